use crate::{config::GlobalConfig, signal::RuntimeSignal};
use brainfloat::NumericKernel;

/// Kernel whose signal is chosen by configuration.
pub type RuntimeKernel = NumericKernel<RuntimeSignal>;

/// Builds a kernel from `config`.
pub fn create_kernel(config: &GlobalConfig) -> RuntimeKernel {
    log::debug!(
        "Creating bfloat16 kernel with rounding {} and signal {:?}",
        config.kernel.rounding,
        config.signal.strategy
    );

    NumericKernel::new(
        config.kernel.rounding,
        RuntimeSignal::from_config(&config.signal),
    )
}

/// Builds a kernel from the global configuration.
pub fn create_global_kernel() -> RuntimeKernel {
    create_kernel(&GlobalConfig::get())
}

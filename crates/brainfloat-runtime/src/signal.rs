use crate::config::{
    Logger,
    signal::{SignalConfig, SignalLogLevel, SignalStrategy},
};
use alloc::format;
use brainfloat::signal::{
    CountingSignal, FpException, FpExceptionSignal, FpuSignal, SignalCounts, SilentSignal,
};

/// Counts exceptions and writes each one to a [`Logger`].
#[derive(Debug)]
pub struct LogSignal {
    logger: spin::Mutex<Logger>,
    counts: CountingSignal,
}

impl LogSignal {
    /// Creates a log signal writing to the outputs of `config`.
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            logger: spin::Mutex::new(Logger::new(config)),
            counts: CountingSignal::default(),
        }
    }

    /// Number of exceptions seen so far.
    pub fn counts(&self) -> SignalCounts {
        self.counts.snapshot()
    }

    fn emit(&self, exception: FpException) {
        let count = self.counts.record(exception);
        let mut logger = self.logger.lock();

        match logger.log_level_signal() {
            SignalLogLevel::Disabled => {}
            SignalLogLevel::Basic => logger.log_signal(&format!("bfloat16 {exception}")),
            SignalLogLevel::Full => {
                logger.log_signal(&format!("bfloat16 {exception} (raised {count} times)"))
            }
        }
    }
}

impl FpExceptionSignal for LogSignal {
    fn overflow(&self) {
        self.emit(FpException::Overflow)
    }

    fn underflow(&self) {
        self.emit(FpException::Underflow)
    }

    fn invalid(&self) {
        self.emit(FpException::Invalid)
    }
}

/// The signal selected by a [`SignalStrategy`].
#[derive(Debug)]
pub enum RuntimeSignal {
    /// Raises flags in the floating point unit.
    Fpu(FpuSignal),
    /// Counts and logs events.
    Log(LogSignal),
    /// Counts events.
    Counting(CountingSignal),
    /// Drops events.
    Silent(SilentSignal),
}

impl Default for RuntimeSignal {
    fn default() -> Self {
        Self::Fpu(FpuSignal)
    }
}

impl RuntimeSignal {
    /// Builds the signal selected by `config`.
    pub fn from_config(config: &SignalConfig) -> Self {
        match config.strategy {
            SignalStrategy::Fpu => Self::Fpu(FpuSignal),
            SignalStrategy::Log => Self::Log(LogSignal::new(config)),
            SignalStrategy::Count => Self::Counting(CountingSignal::default()),
            SignalStrategy::Silent => Self::Silent(SilentSignal),
        }
    }

    /// Counters of the signal, when it keeps any.
    pub fn counts(&self) -> Option<SignalCounts> {
        match self {
            Self::Log(signal) => Some(signal.counts()),
            Self::Counting(signal) => Some(signal.snapshot()),
            Self::Fpu(_) | Self::Silent(_) => None,
        }
    }
}

impl FpExceptionSignal for RuntimeSignal {
    fn overflow(&self) {
        self.raise(FpException::Overflow)
    }

    fn underflow(&self) {
        self.raise(FpException::Underflow)
    }

    fn invalid(&self) {
        self.raise(FpException::Invalid)
    }

    fn raise(&self, exception: FpException) {
        match self {
            Self::Fpu(signal) => signal.raise(exception),
            Self::Log(signal) => signal.raise(exception),
            Self::Counting(signal) => signal.raise(exception),
            Self::Silent(signal) => signal.raise(exception),
        }
    }
}

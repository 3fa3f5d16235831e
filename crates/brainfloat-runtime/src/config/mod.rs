/// Kernel config module.
pub mod kernel;
/// Signal config module.
pub mod signal;

mod base;
mod logger;

pub use base::*;
pub use logger::{LogCrateLevel, LogLevel, Logger, LoggerConfig};

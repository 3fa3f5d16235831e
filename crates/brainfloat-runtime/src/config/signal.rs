use super::logger::{LogLevel, LoggerConfig};

/// Configuration of floating point exception signaling.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SignalConfig {
    /// Which signal the kernel reports exceptions to.
    #[serde(default)]
    pub strategy: SignalStrategy,

    /// Logger used by the [`SignalStrategy::Log`] strategy.
    #[serde(default)]
    pub logger: LoggerConfig<SignalLogLevel>,
}

/// Where floating point exceptions are reported.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignalStrategy {
    /// Raise the matching flag in the floating point unit.
    #[default]
    #[serde(rename = "fpu")]
    Fpu,

    /// Count events and write them to the configured logger.
    #[serde(rename = "log")]
    Log,

    /// Only count events.
    #[serde(rename = "count")]
    Count,

    /// Drop events.
    #[serde(rename = "silent")]
    Silent,
}

/// Log levels for exception signaling.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignalLogLevel {
    /// Signal logging is disabled.
    #[default]
    #[serde(rename = "disabled")]
    Disabled,

    /// The kind of each exception is logged.
    #[serde(rename = "basic")]
    Basic,

    /// The kind of each exception is logged along with how many times it was raised so far.
    #[serde(rename = "full")]
    Full,
}

impl LogLevel for SignalLogLevel {}

use super::signal::{SignalConfig, SignalLogLevel};
use alloc::vec::Vec;
use core::fmt::Display;

#[cfg(std_io)]
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Configuration for logging in brainfloat, parameterized by a log level type.
///
/// Note that you can use multiple loggers at the same time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct LoggerConfig<L: LogLevel> {
    /// Path to the log file, if file logging is enabled (requires `std` feature).
    #[serde(default)]
    #[cfg(std_io)]
    pub file: Option<PathBuf>,

    /// Whether to append to the log file (true) or overwrite it (false). Defaults to true.
    #[serde(default = "append_default")]
    pub append: bool,

    /// Whether to log to standard output.
    #[serde(default)]
    pub stdout: bool,

    /// Whether to log to standard error.
    #[serde(default)]
    pub stderr: bool,

    /// Optional crate-level logging configuration (e.g., info, debug, trace).
    #[serde(default)]
    pub log: Option<LogCrateLevel>,

    /// The log level for this logger, determining verbosity.
    #[serde(default)]
    pub level: L,
}

impl<L: LogLevel> Default for LoggerConfig<L> {
    fn default() -> Self {
        Self {
            #[cfg(std_io)]
            file: None,
            append: true,
            stdout: false,
            stderr: false,
            log: None,
            level: L::default(),
        }
    }
}

/// Log levels using the `log` crate.
#[derive(
    Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, Hash, PartialEq, Eq,
)]
pub enum LogCrateLevel {
    /// Logs informational messages.
    #[default]
    #[serde(rename = "info")]
    Info,

    /// Logs debugging messages.
    #[serde(rename = "debug")]
    Debug,

    /// Logs trace-level messages.
    #[serde(rename = "trace")]
    Trace,
}

fn append_default() -> bool {
    true
}

/// Trait for types that can be used as log levels in `LoggerConfig`.
pub trait LogLevel:
    serde::de::DeserializeOwned + serde::Serialize + Clone + Copy + core::fmt::Debug + Default
{
}

/// Writes signal messages to every output enabled in a [`SignalConfig`].
#[derive(Debug)]
pub struct Logger {
    loggers: Vec<LoggerKind>,
    level: SignalLogLevel,
}

impl Logger {
    /// Creates a logger for the outputs enabled in `config`.
    ///
    /// No output is opened when the level is [`SignalLogLevel::Disabled`]. A log file that can't be
    /// opened is reported with `log::warn!` and skipped.
    pub fn new(config: &SignalConfig) -> Self {
        let logger = &config.logger;
        let mut loggers = Vec::new();

        if let SignalLogLevel::Disabled = logger.level {
            return Self {
                loggers,
                level: logger.level,
            };
        }

        #[cfg(std_io)]
        if let Some(file) = &logger.file {
            match FileLogger::new(file, logger.append) {
                Ok(file_logger) => loggers.push(LoggerKind::File(file_logger)),
                Err(err) => log::warn!("Can't open signal log {}: {err}", file.display()),
            }
        }

        #[cfg(feature = "std")]
        if logger.stdout {
            loggers.push(LoggerKind::Stdout);
        }

        #[cfg(feature = "std")]
        if logger.stderr {
            loggers.push(LoggerKind::Stderr);
        }

        if let Some(level) = logger.log {
            loggers.push(LoggerKind::Log(level));
        }

        Self {
            loggers,
            level: logger.level,
        }
    }

    /// Logs a message to all configured outputs.
    pub fn log_signal<S: Display>(&mut self, msg: &S) {
        for logger in self.loggers.iter_mut() {
            logger.log(msg);
        }
    }

    /// Returns the configured signal log level.
    pub fn log_level_signal(&self) -> SignalLogLevel {
        self.level
    }

    /// Whether at least one output is enabled.
    pub fn is_enabled(&self) -> bool {
        !self.loggers.is_empty()
    }
}

/// Represents different types of loggers.
#[derive(Debug)]
enum LoggerKind {
    /// Logs to a file.
    #[cfg(std_io)]
    File(FileLogger),

    /// Logs to standard output.
    #[cfg(feature = "std")]
    Stdout,

    /// Logs to standard error.
    #[cfg(feature = "std")]
    Stderr,

    /// Logs using the `log` crate with a specified level.
    Log(LogCrateLevel),
}

impl LoggerKind {
    fn log<S: Display>(&mut self, msg: &S) {
        match self {
            #[cfg(std_io)]
            LoggerKind::File(file_logger) => file_logger.log(msg),
            #[cfg(feature = "std")]
            LoggerKind::Stdout => println!("{msg}"),
            #[cfg(feature = "std")]
            LoggerKind::Stderr => eprintln!("{msg}"),
            LoggerKind::Log(level) => match level {
                LogCrateLevel::Info => log::info!("{msg}"),
                LogCrateLevel::Debug => log::debug!("{msg}"),
                LogCrateLevel::Trace => log::trace!("{msg}"),
            },
        }
    }
}

/// Logger that writes messages to a file.
#[derive(Debug)]
#[cfg(std_io)]
struct FileLogger {
    writer: BufWriter<File>,
}

#[cfg(std_io)]
impl FileLogger {
    fn new(path: &Path, append: bool) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .append(append)
            .truncate(!append)
            .create(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    // Flushes after every message so the file is readable while the process runs.
    fn log<S: Display>(&mut self, msg: &S) {
        let result = writeln!(self.writer, "{msg}").and_then(|_| self.writer.flush());

        if let Err(err) = result {
            log::warn!("Can't write to the signal log: {err}");
        }
    }
}

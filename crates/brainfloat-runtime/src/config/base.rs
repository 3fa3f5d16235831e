use super::{
    kernel::KernelConfig,
    signal::{SignalConfig, SignalLogLevel, SignalStrategy},
};
use alloc::sync::Arc;
use brainfloat::RoundingMode;

/// Static mutex holding the global configuration, initialized as `None`.
static BRAINFLOAT_GLOBAL_CONFIG: spin::Mutex<Option<Arc<GlobalConfig>>> = spin::Mutex::new(None);

/// Represents the global configuration for brainfloat, combining kernel and signal settings.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GlobalConfig {
    /// Configuration of the numeric kernel.
    #[serde(default)]
    pub kernel: KernelConfig,

    /// Configuration of exception signaling.
    #[serde(default)]
    pub signal: SignalConfig,
}

impl GlobalConfig {
    /// Retrieves the current global configuration, loading it from the current directory if not set.
    ///
    /// If no configuration is set, it attempts to load one from `brainfloat.toml` or
    /// `BrainFloat.toml` in the current directory or its parents, then applies the environment
    /// overrides. If no file is found, a default configuration is used.
    ///
    /// # Notes
    ///
    /// Calling this function takes a global lock. Build a kernel once and keep it around rather
    /// than reading the config on every operation.
    pub fn get() -> Arc<Self> {
        let mut state = BRAINFLOAT_GLOBAL_CONFIG.lock();
        if let Some(config) = state.as_ref() {
            return config.clone();
        }

        cfg_if::cfg_if! {
            if #[cfg(std_io)] {
                let config = Self::from_current_dir();
                let config = config.override_from_env();
            } else {
                let config = Self::default();
            }
        }

        let config = Arc::new(config);
        *state = Some(config.clone());
        config
    }

    /// Sets the global configuration to the provided value.
    ///
    /// # Panics
    /// Panics if the configuration has already been set or read, as it cannot be overridden.
    ///
    /// # Warning
    /// This method must be called at the start of the program, before any calls to `get`.
    pub fn set(config: Self) {
        let mut state = BRAINFLOAT_GLOBAL_CONFIG.lock();
        if state.is_some() {
            panic!("Cannot set the global configuration multiple times.");
        }
        *state = Some(Arc::new(config));
    }

    #[cfg(std_io)]
    /// Save the current configuration to the provided file path.
    pub fn save_default<P: AsRef<std::path::Path>>(path: P) -> Result<(), ConfigError> {
        Self::get().save(path)
    }

    #[cfg(std_io)]
    /// Write this configuration to the provided file path as toml.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    #[cfg(std_io)]
    /// Overrides configuration fields based on environment variables.
    pub fn override_from_env(self) -> Self {
        self.override_from(|key| std::env::var(key).ok())
    }

    /// Overrides configuration fields using `lookup` to resolve variables by name.
    ///
    /// Recognized variables are `BRAINFLOAT_ROUNDING`, `BRAINFLOAT_SIGNAL` and
    /// `BRAINFLOAT_DEBUG_LOG`. Unknown values are ignored.
    pub fn override_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<alloc::string::String>,
    {
        if let Some(val) = lookup("BRAINFLOAT_ROUNDING") {
            match val.as_str() {
                "even" | "ties-to-even" => self.kernel.rounding = RoundingMode::TiesToEven,
                "away" | "ties-away" => self.kernel.rounding = RoundingMode::TiesAway,
                _ => log::warn!("Unknown rounding mode {val:?}"),
            }
        }

        if let Some(val) = lookup("BRAINFLOAT_SIGNAL") {
            match val.as_str() {
                "fpu" => self.signal.strategy = SignalStrategy::Fpu,
                "log" => self.signal.strategy = SignalStrategy::Log,
                "count" => self.signal.strategy = SignalStrategy::Count,
                "silent" => self.signal.strategy = SignalStrategy::Silent,
                _ => log::warn!("Unknown signal strategy {val:?}"),
            }
        }

        if let Some(val) = lookup("BRAINFLOAT_DEBUG_LOG") {
            self.signal.strategy = SignalStrategy::Log;
            self.signal.logger.level = SignalLogLevel::Full;

            match val.as_str() {
                "stdout" => {
                    #[cfg(feature = "std")]
                    {
                        self.signal.logger.stdout = true;
                    }
                }
                "stderr" => {
                    #[cfg(feature = "std")]
                    {
                        self.signal.logger.stderr = true;
                    }
                }
                "1" | "true" => {
                    #[cfg(std_io)]
                    {
                        self.signal.logger.file = Some("/tmp/brainfloat.log".into());
                    }
                }
                "0" | "false" => {
                    self.signal.logger.level = SignalLogLevel::Disabled;
                }
                #[allow(unused_variables)]
                file_path => {
                    #[cfg(std_io)]
                    {
                        self.signal.logger.file = Some(file_path.into());
                    }
                }
            }
        }

        self
    }

    // Loads configuration from `brainfloat.toml` or `BrainFloat.toml` in the current directory or
    // its parents.
    //
    // Traverses up the directory tree until a valid configuration file is found or the root is
    // reached. Returns a default configuration if no file is found.
    #[cfg(std_io)]
    fn from_current_dir() -> Self {
        let mut dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                log::warn!("Can't read the current directory, using the default config: {err}");
                return Self::default();
            }
        };

        loop {
            for name in ["brainfloat.toml", "BrainFloat.toml"] {
                let path = dir.join(name);
                if !path.is_file() {
                    continue;
                }

                match Self::from_file_path(&path) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(err) => log::warn!("Skipping config file {}: {err}", path.display()),
                }
            }

            if !dir.pop() {
                break;
            }
        }

        Self::default()
    }

    /// Loads configuration from a specified file path.
    #[cfg(std_io)]
    pub fn from_file_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }
}

/// Errors raised when reading or writing a configuration file.
#[cfg(std_io)]
#[derive(thiserror::Error)]
pub enum ConfigError {
    /// The file couldn't be read or written.
    #[error("Can't access the config file\nCaused by:\n  {0}")]
    Io(#[from] std::io::Error),

    /// The file isn't a valid configuration.
    #[error("The config file doesn't have the right format\nCaused by:\n  {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration couldn't be encoded as toml.
    #[error("Can't serialize the config\nCaused by:\n  {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(std_io)]
impl core::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogCrateLevel;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test_log::test]
    fn empty_toml_gives_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();

        assert_eq!(config.kernel.rounding, RoundingMode::TiesToEven);
        assert_eq!(config.signal.strategy, SignalStrategy::Fpu);
        assert_eq!(config.signal.logger.level, SignalLogLevel::Disabled);
        assert!(config.signal.logger.append);
    }

    #[test_log::test]
    fn sections_are_parsed() {
        let config: GlobalConfig = toml::from_str(
            r#"
            [kernel]
            rounding = "ties-away"

            [signal]
            strategy = "count"

            [signal.logger]
            stderr = true
            level = "basic"
            log = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.kernel.rounding, RoundingMode::TiesAway);
        assert_eq!(config.signal.strategy, SignalStrategy::Count);
        assert_eq!(config.signal.logger.level, SignalLogLevel::Basic);
        assert_eq!(config.signal.logger.log, Some(LogCrateLevel::Debug));
        assert!(config.signal.logger.stderr);
        assert!(!config.signal.logger.stdout);
    }

    #[test_log::test]
    fn unknown_rounding_is_a_parse_error() {
        let result = toml::from_str::<GlobalConfig>("[kernel]\nrounding = \"up\"\n");

        assert!(result.is_err());
    }

    #[test_log::test]
    fn rounding_and_strategy_overrides() {
        let config = GlobalConfig::default().override_from(lookup(&[
            ("BRAINFLOAT_ROUNDING", "away"),
            ("BRAINFLOAT_SIGNAL", "silent"),
        ]));

        assert_eq!(config.kernel.rounding, RoundingMode::TiesAway);
        assert_eq!(config.signal.strategy, SignalStrategy::Silent);

        let config = config.override_from(lookup(&[("BRAINFLOAT_ROUNDING", "ties-to-even")]));
        assert_eq!(config.kernel.rounding, RoundingMode::TiesToEven);
        assert_eq!(config.signal.strategy, SignalStrategy::Silent);
    }

    #[test_log::test]
    fn unknown_override_values_are_ignored() {
        let config = GlobalConfig::default().override_from(lookup(&[
            ("BRAINFLOAT_ROUNDING", "nearest"),
            ("BRAINFLOAT_SIGNAL", "panic"),
        ]));

        assert_eq!(config.kernel.rounding, RoundingMode::TiesToEven);
        assert_eq!(config.signal.strategy, SignalStrategy::Fpu);
    }

    #[test_log::test]
    fn debug_log_switches_to_log_strategy() {
        let config =
            GlobalConfig::default().override_from(lookup(&[("BRAINFLOAT_DEBUG_LOG", "stderr")]));

        assert_eq!(config.signal.strategy, SignalStrategy::Log);
        assert_eq!(config.signal.logger.level, SignalLogLevel::Full);
        assert!(config.signal.logger.stderr);
    }

    #[test_log::test]
    fn debug_log_can_be_disabled() {
        let config =
            GlobalConfig::default().override_from(lookup(&[("BRAINFLOAT_DEBUG_LOG", "0")]));

        assert_eq!(config.signal.strategy, SignalStrategy::Log);
        assert_eq!(config.signal.logger.level, SignalLogLevel::Disabled);
    }

    #[cfg(std_io)]
    #[test_log::test]
    fn debug_log_file_targets() {
        let config =
            GlobalConfig::default().override_from(lookup(&[("BRAINFLOAT_DEBUG_LOG", "true")]));
        assert_eq!(
            config.signal.logger.file,
            Some(std::path::PathBuf::from("/tmp/brainfloat.log"))
        );

        let config = GlobalConfig::default()
            .override_from(lookup(&[("BRAINFLOAT_DEBUG_LOG", "signals.log")]));
        assert_eq!(
            config.signal.logger.file,
            Some(std::path::PathBuf::from("signals.log"))
        );
    }

    #[cfg(std_io)]
    #[test_log::test]
    fn save_then_load() {
        let path =
            std::env::temp_dir().join(format!("brainfloat-config-{}.toml", std::process::id()));
        let mut config = GlobalConfig::default();
        config.kernel.rounding = RoundingMode::TiesAway;
        config.signal.strategy = SignalStrategy::Log;
        config.signal.logger.level = SignalLogLevel::Full;

        config.save(&path).unwrap();
        let loaded = GlobalConfig::from_file_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.kernel.rounding, RoundingMode::TiesAway);
        assert_eq!(loaded.signal.strategy, SignalStrategy::Log);
        assert_eq!(loaded.signal.logger.level, SignalLogLevel::Full);
    }

    #[cfg(std_io)]
    #[test_log::test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("brainfloat-config-does-not-exist.toml");
        let err = GlobalConfig::from_file_path(path).unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
        assert!(format!("{err:?}").starts_with("Can't access the config file"));
    }
}

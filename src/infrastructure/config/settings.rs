//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `HWSTOCK_*` environment variables
//! override the storage section.
//!
//! # Example
//!
//! ```no_run
//! use hwstock::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::storage::{StorageConfig, StorageOverrides};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty document yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where and how the inventory is stored.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An `HWSTOCK_*` variable holds an invalid value
    /// - Validation fails
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.storage.apply(StorageOverrides::from_env()?);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or for any reason
    /// [`parse_toml`](Self::parse_toml) fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus environment overrides, for when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an `HWSTOCK_*` variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::parse_toml("")
    }

    /// Apply overrides (typically from command-line flags) and re-validate.
    ///
    /// # Errors
    /// Returns an error if the result is no longer valid.
    pub fn override_storage(&mut self, overrides: StorageOverrides) -> Result<()> {
        self.storage.apply(overrides);
        self.validate()
    }

    /// Replace the log level and/or switch to JSON logs, then re-validate.
    ///
    /// # Errors
    /// Returns an error if `level` is not a valid filter directive.
    pub fn override_logging(&mut self, level: Option<String>, json: bool) -> Result<()> {
        if let Some(level) = level {
            self.logging.level = level;
        }
        if json {
            self.logging.format = "json".into();
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::storage::Backend;

    #[test]
    fn parses_full_document() {
        let config: Config = toml::from_str(
            r#"
[storage]
backend = "sqlite"
path = "stock.txt"
database = "stock.db"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, Backend::Sqlite);
        assert_eq!(config.storage.database, "stock.db");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.backend, Backend::File);
        assert_eq!(config.storage.path, Path::new("hardware_inventory.txt"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn rejects_unknown_backend() {
        let result: std::result::Result<Config, _> = toml::from_str("[storage]\nbackend = \"csv\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let config: Config = toml::from_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn storage_overrides_are_revalidated() {
        let mut config = Config::default();
        let result = config.override_storage(StorageOverrides {
            path: Some("".into()),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::MissingField {
                field: "storage.path"
            }))
        ));
    }
}

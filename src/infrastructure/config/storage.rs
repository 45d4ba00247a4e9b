//! Storage backend selection.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Which persistence adapter holds the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One delimited line per record in a text file.
    #[default]
    File,
    /// One row per record in a SQLite table.
    Sqlite,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown backend {other:?}, expected \"file\" or \"sqlite\"")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    /// Inventory file for the `file` backend.
    pub path: PathBuf,
    /// Database path for the `sqlite` backend.
    pub database: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            path: PathBuf::from("hardware_inventory.txt"),
            database: "inventory.db".into(),
        }
    }
}

/// Values that replace what the config file says.
#[derive(Debug, Clone, Default)]
pub struct StorageOverrides {
    pub backend: Option<Backend>,
    pub path: Option<PathBuf>,
    pub database: Option<String>,
}

impl StorageOverrides {
    /// Read `HWSTOCK_BACKEND`, `HWSTOCK_DATA_FILE` and `HWSTOCK_DATABASE`.
    ///
    /// # Errors
    /// Returns an error if `HWSTOCK_BACKEND` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("HWSTOCK_BACKEND") {
            Ok(raw) => Some(raw.parse::<Backend>().map_err(|reason| ConfigError::InvalidValue {
                field: "HWSTOCK_BACKEND",
                reason,
            })?),
            Err(_) => None,
        };

        Ok(Self {
            backend,
            path: std::env::var_os("HWSTOCK_DATA_FILE").map(PathBuf::from),
            database: std::env::var("HWSTOCK_DATABASE").ok(),
        })
    }
}

impl StorageConfig {
    /// Replace every field the overrides set; unset fields keep their value.
    pub fn apply(&mut self, overrides: StorageOverrides) {
        if let Some(backend) = overrides.backend {
            self.backend = backend;
        }
        if let Some(path) = overrides.path {
            self.path = path;
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self.backend {
            Backend::File if self.path.as_os_str().is_empty() => {
                Err(ConfigError::MissingField { field: "storage.path" }.into())
            }
            Backend::Sqlite if self.database.trim().is_empty() => {
                Err(ConfigError::MissingField {
                    field: "storage.database",
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("SQLite".parse::<Backend>(), Ok(Backend::Sqlite));
        assert_eq!(" file ".parse::<Backend>(), Ok(Backend::File));
        assert!("postgres".parse::<Backend>().is_err());
    }

    #[test]
    fn later_overrides_win() {
        let env = StorageOverrides {
            backend: Some(Backend::Sqlite),
            path: Some("env.txt".into()),
            database: None,
        };
        let cli = StorageOverrides {
            backend: Some(Backend::File),
            ..Default::default()
        };

        let mut storage = StorageConfig::default();
        storage.apply(env);
        storage.apply(cli);

        assert_eq!(storage.backend, Backend::File);
        assert_eq!(storage.path, PathBuf::from("env.txt"));
        assert_eq!(storage.database, "inventory.db");
    }

    #[test]
    fn active_backend_location_is_required() {
        let storage = StorageConfig {
            backend: Backend::Sqlite,
            path: PathBuf::new(),
            database: "inv.db".into(),
        };
        assert!(storage.validate().is_ok());

        let storage = StorageConfig {
            backend: Backend::File,
            path: PathBuf::new(),
            database: "inv.db".into(),
        };
        assert!(storage.validate().is_err());
    }
}

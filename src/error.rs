use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of the durable storage medium behind an adapter.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("migration error: {0}")]
    Migration(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("model '{model}' is already in the inventory")]
    DuplicateModel { model: String },

    #[error("model '{model}' was not found in the inventory")]
    NotFound { model: String },

    #[error("storage failure: {0}")]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt error: {0}")]
    Prompt(String),
}

impl Error {
    /// Whether the failure came from the storage medium rather than the request.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_renders_a_distinct_message() {
        let messages = [
            Error::InvalidField {
                field: "quantity",
                reason: "must be non-negative, got -1".into(),
            }
            .to_string(),
            Error::DuplicateModel {
                model: "RTX 3070".into(),
            }
            .to_string(),
            Error::NotFound {
                model: "RTX 3070".into(),
            }
            .to_string(),
            Error::from(PersistenceError::Database("disk I/O error".into())).to_string(),
        ];

        assert!(messages[0].starts_with("invalid value for quantity"));
        assert!(messages[1].contains("already in the inventory"));
        assert!(messages[2].contains("not found"));
        assert!(messages[3].starts_with("storage failure"));
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn only_storage_failures_are_persistence() {
        assert!(Error::from(PersistenceError::Connection("refused".into())).is_persistence());
        assert!(!Error::NotFound { model: "x".into() }.is_persistence());
    }
}

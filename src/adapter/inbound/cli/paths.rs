//! Path utilities for hwstock.
//!
//! User-level settings live under `~/.hwstock/`:
//! - `~/.hwstock/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the hwstock home directory (`~/.hwstock/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hwstock")
}

/// Returns the default config file path (`~/.hwstock/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

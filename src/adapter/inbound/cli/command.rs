//! Command-line interface definitions.
//!
//! Defines the CLI structure for hwstock using `clap`. Global flags select
//! the config file, override the storage backend and control output; each
//! subcommand maps onto one record store operation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::config::storage::{Backend, StorageOverrides};

/// Computer-hardware stock tracker
#[derive(Parser, Debug)]
#[command(name = "hwstock")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file [default: ~/.hwstock/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend [file, sqlite]
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// Inventory file for the file backend
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Database path for the sqlite backend
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Storage settings given on the command line.
    #[must_use]
    pub fn storage_overrides(&self) -> StorageOverrides {
        StorageOverrides {
            backend: self.backend,
            path: self.data_file.clone(),
            database: self.database.clone(),
        }
    }
}

/// Top-level subcommands for the hwstock CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a hardware record
    Add(AddArgs),

    /// Remove the record with exactly this model
    Remove(ModelArg),

    /// Search for a model, ignoring case
    Find(ModelArg),

    /// Display the inventory sorted by model
    List,

    /// Copy records from a flat inventory file into the configured backend
    Import(ImportArgs),

    /// Interactive menu
    Shell,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Hardware type, e.g. GPU or CPU
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: String,

    /// Model name, unique within the inventory
    #[arg(long)]
    pub model: String,

    /// Units on hand
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i32,

    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
}

/// Shared argument for commands that only need a model.
#[derive(Parser, Debug)]
pub struct ModelArg {
    /// Model name
    pub model: String,
}

/// Arguments for the `import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Flat inventory file with `type,model,quantity,price` lines
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hwstock",
            "add",
            "--type",
            "GPU",
            "--model",
            "RTX 3070",
            "--quantity",
            "20",
            "--price",
            "299.99",
            "--backend",
            "sqlite",
        ])
        .unwrap();

        assert_eq!(cli.backend, Some(Backend::Sqlite));
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.kind, "GPU");
                assert_eq!(args.model, "RTX 3070");
                assert_eq!(args.quantity, 20);
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_reaches_validation() {
        let cli = Cli::try_parse_from([
            "hwstock", "add", "--type", "GPU", "--model", "X", "--quantity", "-3", "--price", "1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Add(AddArgs { quantity: -3, .. })));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["hwstock", "list", "--backend", "csv"]).is_err());
    }
}

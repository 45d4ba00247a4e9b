//! Command dispatch.
//!
//! Resolves configuration, starts logging, opens the configured backend and
//! hands the record store to the handler for the chosen subcommand.

use std::path::Path;

use tracing::debug;

use crate::adapter::inbound::cli::command::{Cli, Commands};
use crate::adapter::inbound::cli::{import, inventory, paths, shell};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::persistence::build_record_store;

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    config.init_logging();
    debug!(
        backend = %config.storage.backend,
        path = %config.storage.path.display(),
        database = %config.storage.database,
        "resolved storage"
    );

    let mut store = build_record_store(&config.storage)?;

    match cli.command {
        Commands::Add(args) => inventory::add(&mut store, args),
        Commands::Remove(args) => inventory::remove(&mut store, &args.model),
        Commands::Find(args) => inventory::find(&store, &args.model),
        Commands::List => inventory::list(&store),
        Commands::Import(args) => import::execute(&mut store, &args),
        Commands::Shell => shell::execute(&mut store),
    }
}

/// Config file, then environment, then command-line flags.
///
/// An explicit `--config` must exist. The default file under `~/.hwstock`
/// is optional.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => load_default(&paths::default_config())?,
    };
    config.override_storage(cli.storage_overrides())?;
    config.override_logging(cli.log_level.clone(), cli.json_logs)?;
    Ok(config)
}

fn load_default(path: &Path) -> Result<Config> {
    if path.is_file() {
        Config::load(path)
    } else {
        Config::from_env()
    }
}

//! Persistence factory for the configured backend.

use tracing::debug;

use crate::adapter::outbound::file::DelimitedFileAdapter;
use crate::adapter::outbound::sqlite::SqliteAdapter;
use crate::application::RecordStore;
use crate::error::Result;
use crate::infrastructure::config::storage::{Backend, StorageConfig};
use crate::port::PersistenceAdapter;

/// Record store over whichever backend the configuration selects.
pub type DynRecordStore = RecordStore<Box<dyn PersistenceAdapter>>;

/// Open the adapter named by `config`.
///
/// # Errors
/// Returns an error if the file cannot be read or the database cannot be
/// opened or migrated.
pub fn build_adapter(config: &StorageConfig) -> Result<Box<dyn PersistenceAdapter>> {
    debug!(backend = %config.backend, "opening inventory backend");
    match config.backend {
        Backend::File => Ok(Box::new(DelimitedFileAdapter::open(config.path.clone())?)),
        Backend::Sqlite => Ok(Box::new(SqliteAdapter::open(&config.database)?)),
    }
}

/// Open the configured backend and wrap it in a [`RecordStore`].
///
/// # Errors
/// See [`build_adapter`].
pub fn build_record_store(config: &StorageConfig) -> Result<DynRecordStore> {
    Ok(RecordStore::new(build_adapter(config)?))
}

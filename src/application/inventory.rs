//! The record store: invariant enforcement in front of a persistence adapter.

use tracing::{debug, info, warn};

use crate::domain::HardwareRecord;
use crate::error::{Error, Result};
use crate::port::PersistenceAdapter;

/// Authoritative owner of the inventory.
///
/// Every record is validated and checked for a duplicate model before it
/// reaches the adapter, so adapters only ever see well-formed, unique
/// records. Mutations return only after the adapter has made them durable.
pub struct RecordStore<A: PersistenceAdapter> {
    adapter: A,
}

/// Outcome counts of a bulk [`RecordStore::import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl<A: PersistenceAdapter> RecordStore<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Add a new record.
    ///
    /// # Errors
    /// [`Error::InvalidField`] if the record breaks a field rule,
    /// [`Error::DuplicateModel`] if the exact model is already stored, or a
    /// persistence error if the write failed. The inventory is unchanged on
    /// every error.
    pub fn add(&mut self, record: HardwareRecord) -> Result<()> {
        record.validate()?;

        if self.adapter.get(&record.model)?.is_some() {
            return Err(Error::DuplicateModel {
                model: record.model,
            });
        }

        self.adapter.insert(&record)?;
        info!(
            backend = self.adapter.name(),
            model = %record.model,
            quantity = record.quantity,
            price = record.price,
            "added hardware"
        );
        Ok(())
    }

    /// Remove the record with exactly this model.
    ///
    /// # Errors
    /// [`Error::NotFound`] if no record has this exact model, or a
    /// persistence error if the write failed.
    pub fn remove(&mut self, model: &str) -> Result<()> {
        if self.adapter.get(model)?.is_none() {
            return Err(Error::NotFound {
                model: model.to_string(),
            });
        }

        if !self.adapter.remove(model)? {
            // Vanished between the lookup and the delete.
            warn!(backend = self.adapter.name(), model, "record disappeared before delete");
            return Err(Error::NotFound {
                model: model.to_string(),
            });
        }

        info!(backend = self.adapter.name(), model, "removed hardware");
        Ok(())
    }

    /// Search by model ignoring ASCII case; returns the first match.
    ///
    /// A stored `"RTX 3070"` is found by `"rtx 3070"`.
    pub fn find(&self, model: &str) -> Result<Option<HardwareRecord>> {
        self.adapter.find_ignore_case(model)
    }

    /// All records ordered by model, byte-wise ascending.
    ///
    /// Uppercase letters sort before lowercase ones, so `"RTX 3070"` lists
    /// before `"Ryzen 5"`.
    pub fn list_sorted(&self) -> Result<Vec<HardwareRecord>> {
        self.adapter.list_sorted()
    }

    pub fn len(&self) -> Result<usize> {
        self.adapter.count()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Add every record, skipping duplicates and invalid records.
    ///
    /// # Errors
    /// Stops at the first persistence error; records added before it stay.
    pub fn import<I>(&mut self, records: I) -> Result<ImportSummary>
    where
        I: IntoIterator<Item = HardwareRecord>,
    {
        let mut summary = ImportSummary::default();
        for record in records {
            let model = record.model.clone();
            match self.add(record) {
                Ok(()) => summary.imported += 1,
                Err(Error::DuplicateModel { .. }) => {
                    debug!(model = %model, "import skipped duplicate");
                    summary.duplicates += 1;
                }
                Err(Error::InvalidField { field, reason }) => {
                    debug!(model = %model, field, reason = %reason, "import rejected record");
                    summary.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(summary)
    }

    /// The backing adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}

//! Persistence port for hardware records.

use crate::domain::HardwareRecord;
use crate::error::Result;

/// Durable storage for the record set.
///
/// Adapters own only the serialized copy of the inventory. They do not
/// enforce record invariants; [`RecordStore`](crate::application::RecordStore)
/// validates every record and checks uniqueness before calling
/// [`insert`](Self::insert).
///
/// # Implementation Notes
///
/// - Every mutating call must be durable before it returns `Ok`.
/// - A mutating call that fails must leave both the durable copy and any
///   in-memory mirror as they were before the call.
/// - Calls are synchronous and single-writer; no locking is expected.
pub trait PersistenceAdapter {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Get a record by exact, case-sensitive model.
    fn get(&self, model: &str) -> Result<Option<HardwareRecord>>;

    /// First record whose model equals `query` ignoring ASCII case.
    fn find_ignore_case(&self, query: &str) -> Result<Option<HardwareRecord>>;

    /// Insert a validated record whose model is not yet stored.
    fn insert(&mut self, record: &HardwareRecord) -> Result<()>;

    /// Delete a record by exact model. Returns true if a record was deleted.
    fn remove(&mut self, model: &str) -> Result<bool>;

    /// All records ordered by model, byte-wise ascending.
    fn list_sorted(&self) -> Result<Vec<HardwareRecord>>;

    /// Number of stored records.
    fn count(&self) -> Result<usize>;
}

impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, model: &str) -> Result<Option<HardwareRecord>> {
        (**self).get(model)
    }

    fn find_ignore_case(&self, query: &str) -> Result<Option<HardwareRecord>> {
        (**self).find_ignore_case(query)
    }

    fn insert(&mut self, record: &HardwareRecord) -> Result<()> {
        (**self).insert(record)
    }

    fn remove(&mut self, model: &str) -> Result<bool> {
        (**self).remove(model)
    }

    fn list_sorted(&self) -> Result<Vec<HardwareRecord>> {
        (**self).list_sorted()
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }
}

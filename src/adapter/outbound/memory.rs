//! In-memory adapter for testing.

use crate::domain::HardwareRecord;
use crate::error::{PersistenceError, Result};
use crate::port::PersistenceAdapter;

/// Insertion-ordered record list with switchable write failures.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    records: Vec<HardwareRecord>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following insert and remove fail with a storage error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful mutating calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(PersistenceError::Database("injected write failure".into()).into());
        }
        Ok(())
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, model: &str) -> Result<Option<HardwareRecord>> {
        Ok(self.records.iter().find(|r| r.model == model).cloned())
    }

    fn find_ignore_case(&self, query: &str) -> Result<Option<HardwareRecord>> {
        Ok(self.records.iter().find(|r| r.matches_model(query)).cloned())
    }

    fn insert(&mut self, record: &HardwareRecord) -> Result<()> {
        self.check_writable()?;
        self.records.push(record.clone());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, model: &str) -> Result<bool> {
        self.check_writable()?;
        let before = self.records.len();
        self.records.retain(|r| r.model != model);
        self.writes += 1;
        Ok(self.records.len() < before)
    }

    fn list_sorted(&self) -> Result<Vec<HardwareRecord>> {
        let mut records = self.records.clone();
        records.sort_by(HardwareRecord::cmp_by_model);
        Ok(records)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}

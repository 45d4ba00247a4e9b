//! Flat-file adapter.
//!
//! Keeps an insertion-ordered mirror of the file in memory and rewrites the
//! whole file after every mutation.

use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::line::{format_line, parse_line, SkipReason};
use crate::domain::HardwareRecord;
use crate::error::{PersistenceError, Result};
use crate::port::PersistenceAdapter;

/// Records stored one per line in a delimited text file.
#[derive(Debug)]
pub struct DelimitedFileAdapter {
    path: PathBuf,
    records: Vec<HardwareRecord>,
}

impl DelimitedFileAdapter {
    /// Open the inventory at `path`, loading whatever it already holds.
    ///
    /// A missing file is an empty inventory; it is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load(&path)?;
        info!(path = %path.display(), records = records.len(), "opened flat-file inventory");
        Ok(Self { path, records })
    }

    /// Records in file order.
    pub fn records(&self) -> &[HardwareRecord] {
        &self.records
    }

    fn save(&self) -> Result<()> {
        save(&self.path, &self.records)
    }
}

/// Read every usable record from `path`.
///
/// Blank lines, lines without exactly four fields, lines whose quantity or
/// price does not parse, records that break a field rule, and repeats of an
/// already loaded model are skipped without error.
///
/// # Errors
/// Any I/O failure other than the file not existing.
pub fn load(path: &Path) -> Result<Vec<HardwareRecord>> {
    let mut seen = HashSet::new();
    let records = read_records(path)?
        .into_iter()
        .filter(|record| {
            if let Err(e) = record.validate() {
                debug!(model = %record.model, error = %e, "skipping invalid inventory line");
                return false;
            }
            if !seen.insert(record.model.clone()) {
                debug!(model = %record.model, "skipping repeated model");
                return false;
            }
            true
        })
        .collect();
    Ok(records)
}

/// Parse every well-formed line of `path` without checking record rules.
///
/// A missing file yields no records. Lines that are not valid UTF-8 are
/// skipped like any other malformed line.
///
/// # Errors
/// Any I/O failure other than the file not existing.
pub fn read_records(path: &Path) -> Result<Vec<HardwareRecord>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    let mut records = Vec::new();
    for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = index + 1, "skipping inventory line that is not valid UTF-8");
            continue;
        };
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(SkipReason::Blank) => {}
            Err(reason) => {
                debug!(line = index + 1, ?reason, "skipping malformed inventory line");
            }
        }
    }
    Ok(records)
}

/// Replace the contents of `path` with `records`, one line each, in order.
///
/// The lines go to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a half-written inventory.
///
/// # Errors
/// Any I/O failure creating, writing, syncing or renaming the file.
pub fn save(path: &Path, records: &[HardwareRecord]) -> Result<()> {
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut contents = String::new();
    for record in records {
        contents.push_str(&format_line(record));
        contents.push('\n');
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

impl PersistenceAdapter for DelimitedFileAdapter {
    fn name(&self) -> &'static str {
        "file"
    }

    fn get(&self, model: &str) -> Result<Option<HardwareRecord>> {
        Ok(self.records.iter().find(|r| r.model == model).cloned())
    }

    fn find_ignore_case(&self, query: &str) -> Result<Option<HardwareRecord>> {
        Ok(self.records.iter().find(|r| r.matches_model(query)).cloned())
    }

    fn insert(&mut self, record: &HardwareRecord) -> Result<()> {
        self.records.push(record.clone());
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, model: &str) -> Result<bool> {
        let Some(index) = self.records.iter().position(|r| r.model == model) else {
            return Ok(false);
        };

        let removed = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(true)
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

use std::fs;
use std::path::{Path, PathBuf};

use hwstock::adapter::outbound::file::DelimitedFileAdapter;
use hwstock::adapter::outbound::sqlite::SqliteAdapter;
use tempfile::TempDir;

/// Scratch directory holding a flat inventory file and a SQLite database.
///
/// Everything is removed when the value is dropped.
pub struct TempInventory {
    dir: TempDir,
}

impl TempInventory {
    pub fn create() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("hardware_inventory.txt")
    }

    pub fn database(&self) -> String {
        self.dir.path().join("inventory.db").display().to_string()
    }

    pub fn write_data_file(&self, contents: &str) {
        fs::write(self.data_file(), contents).expect("write inventory file");
    }

    pub fn read_data_file(&self) -> String {
        fs::read_to_string(self.data_file()).expect("read inventory file")
    }

    /// Write a config file pointing both backends into this directory.
    pub fn write_config(&self, backend: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        let contents = format!(
            "[storage]\nbackend = \"{backend}\"\npath = \"{}\"\ndatabase = \"{}\"\n",
            self.data_file().display(),
            self.database(),
        );
        fs::write(&path, contents).expect("write temp config");
        path
    }

    pub fn open_file(&self) -> DelimitedFileAdapter {
        DelimitedFileAdapter::open(self.data_file()).expect("open inventory file")
    }

    pub fn open_sqlite(&self) -> SqliteAdapter {
        SqliteAdapter::open(&self.database()).expect("open sqlite inventory")
    }
}

//! hwstock - a small computer-hardware stock tracker.
//!
//! Records (type, model, quantity, price) are keyed by model and kept in
//! one of two interchangeable backends: a comma-delimited flat file or a
//! SQLite table.
//!
//! # Architecture
//!
//! - [`domain`] - The hardware record and its field rules
//! - [`port`] - The persistence trait every backend implements
//! - [`application`] - `RecordStore`, which enforces uniqueness and validation
//! - [`adapter`] - Flat-file, SQLite and in-memory backends plus the CLI
//! - [`infrastructure`] - Configuration and backend construction
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use hwstock::adapter::outbound::memory::MemoryAdapter;
//! use hwstock::application::RecordStore;
//! use hwstock::domain::HardwareRecord;
//!
//! let mut store = RecordStore::new(MemoryAdapter::new());
//! store.add(HardwareRecord::new("GPU", "RTX 3070", 20, 299.99)).unwrap();
//! assert_eq!(store.find("rtx 3070").unwrap().unwrap().quantity, 20);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

//! Delimited flat-file persistence.

pub mod line;
pub mod store;

pub use store::{load, read_records, save, DelimitedFileAdapter};

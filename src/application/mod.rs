//! Application services that coordinate domain rules and ports.

mod inventory;

pub use inventory::{ImportSummary, RecordStore};

//! Outbound adapters (driven side).

pub mod file;
pub mod memory;
pub mod sqlite;

//! SQLite persistence adapter.
//!
//! One row per record in the `computer_hardware` table, keyed by model,
//! accessed through Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteAdapter;

//! Outbound ports implemented by storage adapters.

pub mod store;

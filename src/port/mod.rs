//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!     CLI  ─────────▶│ RecordStore (invariants)│
//!                    └────────────┬────────────┘
//!                                 │ PersistenceAdapter
//!              ┌──────────────────┼──────────────────┐
//!              ▼                  ▼                  ▼
//!        ┌───────────┐     ┌─────────────┐     ┌──────────┐
//!        │ Flat file │     │   SQLite    │     │  Memory  │
//!        └───────────┘     └─────────────┘     └──────────┘
//! ```

pub mod outbound;

pub use outbound::store::PersistenceAdapter;

//! Backend-agnostic inventory types.

mod record;

pub use record::{HardwareRecord, FORBIDDEN_TEXT_CHARS};

//! Factory modules for building infrastructure components.
//!
//! # Submodules
//!
//! - [`persistence`] - Persistence adapter and record store construction

pub mod persistence;

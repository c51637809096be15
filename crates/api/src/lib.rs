//! Public API types for the dhkex library
//!
//! This crate provides the error type shared by every dhkex component and the
//! registry of named groups that exchangers are identified by.

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::Curve;

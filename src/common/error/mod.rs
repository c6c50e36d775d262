//! Unified error types for the style model.
//!
//! [`FormatError`] is the only error the canonicalizing core raises. The crate-wide
//! [`Error`] adds the failures of the collection and persistence layers on top of it.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, FormatError, Result};

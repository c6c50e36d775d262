//! Common types, traits, and utilities shared by every style variant.
//!
//! This module provides the canonical value types (colors, measurements, emphasis),
//! the process-wide defaults and the error types used throughout the crate.

// Submodule declarations
pub mod defaults;
pub mod error;
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use defaults::StyleDefaults;
pub use error::{Error, FormatError, Result};
pub use style::{AUTOMATIC, Emphasis, Measure, RGBColor, StyleColor, canonicalize_color};

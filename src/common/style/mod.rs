//! Common style and formatting types.
//!
//! This module provides the canonical value types every style attribute is built from.

// Submodule declarations
pub mod color;
pub mod emphasis;
pub mod measure;
mod named;

// Re-exports
pub use color::{AUTOMATIC, RGBColor, StyleColor, canonicalize_color};
pub use emphasis::Emphasis;
pub use measure::{MAX_POINTS, Measure};

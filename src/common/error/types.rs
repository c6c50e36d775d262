//! Unified error types for the style model.
//!
//! Every failure is local and synchronous. A failed assignment never leaves a
//! field partially updated.
use thiserror::Error;

/// Error raised when text cannot be canonicalized.
///
/// Returned by every fallible style mutator. The field being assigned keeps its
/// previous value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Input is neither `automatic` nor a parseable web color
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Input is not a finite real number
    #[error("Invalid measurement: {0:?}")]
    InvalidMeasure(String),

    /// Input parsed but lies outside the range accepted by the field
    #[error("Measurement {value} is out of range: {requirement}")]
    MeasureOutOfRange {
        value: f64,
        requirement: &'static str,
    },

    /// Input does not name a style kind
    #[error("Invalid style kind: {0:?}")]
    InvalidStyleKind(String),
}

/// Main error type for style model operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Canonicalization failure
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// A style with the same name already exists in the collection
    #[error("Duplicate style name: {0}")]
    DuplicateStyle(String),

    /// No style with the given name exists in the collection
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Process-wide defaults were already initialized
    #[error("Style defaults are already installed")]
    DefaultsAlreadyInstalled,

    /// Theme (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing into a string buffer failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type for style model operations.
pub type Result<T> = std::result::Result<T, Error>;

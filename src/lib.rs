//! Docstyle - a canonical style model for word-processing documents
//!
//! This library provides the normalized, comparable and serializable description
//! of paragraph and character formatting that document tools build, compare and
//! persist. It does not render anything.
//!
//! # Features
//!
//! - **Color canonicalization**: every color is stored as `#RRGGBB` (uppercase) or
//!   the `automatic` sentinel, whatever web color syntax it was written in
//! - **Measurements**: font sizes and spacing render with the `"0.0#"` pattern
//! - **Style variants**: paragraph, character, quick-style and theme entries share
//!   one attribute set and differ only by a small policy table
//! - **Themes**: named collections with unique style names and quick-style slots
//! - **Output**: serde support, YAML themes, WordprocessingML `styles.xml`
//!
//! # Example
//!
//! ```rust
//! use docstyle::style::{Style, StyleKind, StyleVariant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut heading = Style::new("Heading 1", StyleKind::heading(1).unwrap(), StyleVariant::QuickStyle);
//! heading.set_color("cornflowerblue")?;
//! heading.set_font_size("16")?;
//! heading.set_bold(true);
//!
//! assert_eq!(heading.color().to_string(), "#6495ED");
//! assert_eq!(heading.font_size().to_string(), "16.0");
//!
//! // Invalid input is rejected and leaves the style untouched
//! assert!(heading.set_color("notacolor").is_err());
//! assert_eq!(heading.color().to_string(), "#6495ED");
//! # Ok(())
//! # }
//! ```

/// Canonical value types, defaults and errors
///
/// Colors, measurements and emphasis flags live here, together with the
/// process-wide defaults every new style starts from.
pub mod common;

/// Styles, variants and themes
///
/// The style entity built on top of the common value types.
pub mod style;

// Re-export commonly used types for convenience
pub use common::{Error, FormatError, Result, StyleColor, StyleDefaults};
pub use style::{AttributeSet, Style, StyleKind, StyleVariant, Theme};

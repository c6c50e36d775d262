//! The attribute set shared by every style variant.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::common::StyleDefaults;
use crate::common::error::FormatError;
use crate::common::style::{Emphasis, Measure, StyleColor};

/// Canonical formatting attributes.
///
/// This is both the payload of a [`Style`](crate::style::Style) and the target a
/// style is applied onto (the formatting of a run or paragraph). Colors and
/// measurements can only enter through the canonicalizing mutators, so every
/// value held here is already in canonical form and equality is plain value
/// equality.
///
/// # Examples
///
/// ```rust
/// use docstyle::style::AttributeSet;
///
/// let mut attributes = AttributeSet::new();
/// attributes.set_foreground("#00ff00").unwrap();
/// assert_eq!(attributes.foreground().to_string(), "#00FF00");
///
/// // A failed assignment leaves the field untouched
/// assert!(attributes.set_foreground("notacolor").is_err());
/// assert_eq!(attributes.foreground().to_string(), "#00FF00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Text color
    pub(crate) foreground: StyleColor,
    /// Highlight color
    pub(crate) background: StyleColor,
    /// Font family; may be a comma-separated fallback list
    pub(crate) font_family: String,
    /// Font size in points
    #[serde(deserialize_with = "deserialize_font_size")]
    pub(crate) font_size: Measure,
    /// Emphasis flags
    #[serde(default)]
    pub(crate) emphasis: Emphasis,
    /// Space before the paragraph in points
    #[serde(deserialize_with = "deserialize_spacing")]
    pub(crate) space_before: Measure,
    /// Space after the paragraph in points
    #[serde(deserialize_with = "deserialize_spacing")]
    pub(crate) space_after: Measure,
    /// Whether colors are honored by consumers that respect the flag
    pub(crate) apply_colors: bool,
}

impl AttributeSet {
    /// Create an attribute set holding the documented defaults.
    ///
    /// Automatic colors, the process-wide default font family and size, no
    /// emphasis, zero spacing, colors enabled.
    pub fn new() -> Self {
        let defaults = StyleDefaults::get();
        Self {
            foreground: StyleColor::Automatic,
            background: StyleColor::Automatic,
            font_family: defaults.font_family().to_string(),
            font_size: defaults.font_size(),
            emphasis: Emphasis::empty(),
            space_before: Measure::ZERO,
            space_after: Measure::ZERO,
            apply_colors: true,
        }
    }

    /// Get the text color.
    #[inline]
    pub fn foreground(&self) -> StyleColor {
        self.foreground
    }

    /// Set the text color from any accepted color specification.
    pub fn set_foreground(&mut self, color: &str) -> Result<(), FormatError> {
        self.foreground = StyleColor::parse(color)?;
        Ok(())
    }

    /// Get the highlight color.
    #[inline]
    pub fn background(&self) -> StyleColor {
        self.background
    }

    /// Set the highlight color from any accepted color specification.
    pub fn set_background(&mut self, color: &str) -> Result<(), FormatError> {
        self.background = StyleColor::parse(color)?;
        Ok(())
    }

    /// Get the font family.
    #[inline]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Set the font family (e.g., "Calibri" or "Georgia, serif").
    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = font_family.into();
    }

    /// Get the font size.
    #[inline]
    pub fn font_size(&self) -> Measure {
        self.font_size
    }

    /// Set the font size from decimal text; must be greater than zero.
    pub fn set_font_size(&mut self, size: &str) -> Result<(), FormatError> {
        self.font_size = Measure::parse(size)?.require_positive()?;
        Ok(())
    }

    /// Get the emphasis flags.
    #[inline]
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Turn emphasis flags on or off. Flags not named in `flags` are unchanged.
    #[inline]
    pub fn set_emphasis(&mut self, flags: Emphasis, enabled: bool) {
        self.emphasis.set(flags, enabled);
    }

    /// Get the stored space before the paragraph.
    #[inline]
    pub fn space_before(&self) -> Measure {
        self.space_before
    }

    /// Set the space before the paragraph from decimal text; must not be negative.
    pub fn set_space_before(&mut self, points: &str) -> Result<(), FormatError> {
        self.space_before = Measure::parse(points)?.require_non_negative()?;
        Ok(())
    }

    /// Get the stored space after the paragraph.
    #[inline]
    pub fn space_after(&self) -> Measure {
        self.space_after
    }

    /// Set the space after the paragraph from decimal text; must not be negative.
    pub fn set_space_after(&mut self, points: &str) -> Result<(), FormatError> {
        self.space_after = Measure::parse(points)?.require_non_negative()?;
        Ok(())
    }

    /// Get the apply-colors flag.
    #[inline]
    pub fn apply_colors(&self) -> bool {
        self.apply_colors
    }

    /// Set the apply-colors flag.
    #[inline]
    pub fn set_apply_colors(&mut self, apply_colors: bool) {
        self.apply_colors = apply_colors;
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

fn deserialize_font_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Measure, D::Error> {
    Measure::deserialize(deserializer)?
        .require_positive()
        .map_err(de::Error::custom)
}

fn deserialize_spacing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Measure, D::Error> {
    Measure::deserialize(deserializer)?
        .require_non_negative()
        .map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attributes = AttributeSet::new();
        assert!(attributes.foreground().is_automatic());
        assert!(attributes.background().is_automatic());
        assert_eq!(attributes.font_family(), StyleDefaults::get().font_family());
        assert_eq!(attributes.font_size().to_string(), "11.0");
        assert!(attributes.emphasis().is_empty());
        assert_eq!(attributes.space_before().to_string(), "0.0");
        assert_eq!(attributes.space_after().to_string(), "0.0");
        assert!(attributes.apply_colors());
        assert_eq!(attributes, AttributeSet::default());
    }

    #[test]
    fn test_invalid_assignments_leave_fields_unchanged() {
        let mut attributes = AttributeSet::new();
        attributes.set_background("yellow").unwrap();
        attributes.set_font_size("14").unwrap();
        attributes.set_space_after("6").unwrap();

        assert!(attributes.set_background("#12").is_err());
        assert!(attributes.set_font_size("huge").is_err());
        assert!(attributes.set_font_size("-3").is_err());
        assert!(attributes.set_font_size("0").is_err());
        assert!(attributes.set_space_after("-1").is_err());

        assert_eq!(attributes.background().to_string(), "#FFFF00");
        assert_eq!(attributes.font_size().to_string(), "14.0");
        assert_eq!(attributes.space_after().to_string(), "6.0");
    }

    #[test]
    fn test_zero_spacing_is_allowed() {
        let mut attributes = AttributeSet::new();
        attributes.set_space_before("12").unwrap();
        attributes.set_space_before("0").unwrap();
        assert_eq!(attributes.space_before(), Measure::ZERO);
    }

    #[test]
    fn test_emphasis_mutation() {
        let mut attributes = AttributeSet::new();
        attributes.set_emphasis(Emphasis::BOLD | Emphasis::ITALIC, true);
        attributes.set_emphasis(Emphasis::ITALIC, false);
        assert_eq!(attributes.emphasis(), Emphasis::BOLD);
    }
}

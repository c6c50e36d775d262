//! The style entity.
//!
//! A [`Style`] is a named [`AttributeSet`] tagged with a [`StyleKind`] and a
//! [`StyleVariant`]. All variants share one attribute set and one set of
//! canonicalization rules; the variant only changes how spacing is rendered and
//! whether the apply-colors flag is honored.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeSet;
use super::kind::{StyleKind, StyleVariant};
use crate::common::error::FormatError;
use crate::common::style::{Emphasis, Measure, StyleColor};

/// A named bundle of formatting attributes.
///
/// Styles are plain values: `Clone` produces a fully independent instance and
/// a style is `Send + Sync`, so a finished style can be shared for reading
/// across threads. Mutation needs `&mut`, which serializes writers.
///
/// # Examples
///
/// ```rust
/// use docstyle::style::{Style, StyleKind, StyleVariant};
///
/// let mut s = Style::default();
/// s.set_color("#00ff00").unwrap();
/// assert_eq!(s.color().to_string(), "#00FF00");
///
/// let mut t = Style::copy_from(&s);
/// t.set_color("automatic").unwrap();
/// assert_eq!(s.color().to_string(), "#00FF00");
/// assert_eq!(t.color().to_string(), "automatic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// UI-visible name; unique within a theme
    name: String,
    /// Semantic kind
    kind: StyleKind,
    /// Container variant
    variant: StyleVariant,
    /// Ordering / quick-style slot; assigned by the caller
    index: i32,
    /// Formatting attributes
    attributes: AttributeSet,
}

impl Style {
    /// Create a style with default attributes.
    pub fn new(name: impl Into<String>, kind: StyleKind, variant: StyleVariant) -> Self {
        Self {
            name: name.into(),
            kind,
            variant,
            index: 0,
            attributes: AttributeSet::new(),
        }
    }

    /// Create an independent copy of `source`.
    pub fn copy_from(source: &Style) -> Self {
        source.clone()
    }

    /// Create an independent copy of `source` placed in another container variant.
    ///
    /// Every attribute is carried over value for value, including the stored
    /// spacing of a character-variant source, which only its rendering hides.
    pub fn copy_as(source: &Style, variant: StyleVariant) -> Self {
        Self {
            variant,
            ..source.clone()
        }
    }

    /// Get the style name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the style name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the style kind.
    #[inline]
    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    /// Get the container variant.
    #[inline]
    pub fn variant(&self) -> StyleVariant {
        self.variant
    }

    /// Get the ordering / quick-style slot index.
    #[inline]
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Set the ordering / quick-style slot index. Uniqueness is not enforced.
    pub fn set_index(&mut self, index: i32) {
        self.index = index;
    }

    /// Get the underlying attribute set.
    #[inline]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Get the text color (`automatic` or `#RRGGBB`).
    #[inline]
    pub fn color(&self) -> StyleColor {
        self.attributes.foreground()
    }

    /// Set the text color.
    ///
    /// On error the previous color is kept.
    pub fn set_color(&mut self, color: &str) -> Result<(), FormatError> {
        self.attributes.set_foreground(color)
    }

    /// Get the highlight color (`automatic` or `#RRGGBB`).
    #[inline]
    pub fn highlight(&self) -> StyleColor {
        self.attributes.background()
    }

    /// Set the highlight color.
    ///
    /// On error the previous color is kept.
    pub fn set_highlight(&mut self, color: &str) -> Result<(), FormatError> {
        self.attributes.set_background(color)
    }

    /// Get the font family.
    #[inline]
    pub fn font_family(&self) -> &str {
        self.attributes.font_family()
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.attributes.set_font_family(font_family);
    }

    /// Get the font size.
    #[inline]
    pub fn font_size(&self) -> Measure {
        self.attributes.font_size()
    }

    /// Set the font size from decimal text.
    pub fn set_font_size(&mut self, size: &str) -> Result<(), FormatError> {
        self.attributes.set_font_size(size)
    }

    /// Get the space before the paragraph, as rendered for this variant.
    pub fn space_before(&self) -> Measure {
        if self.variant.policy().paragraph_spacing {
            self.attributes.space_before()
        } else {
            Measure::ZERO
        }
    }

    /// Set the space before the paragraph from decimal text.
    pub fn set_space_before(&mut self, points: &str) -> Result<(), FormatError> {
        self.attributes.set_space_before(points)
    }

    /// Get the space after the paragraph, as rendered for this variant.
    pub fn space_after(&self) -> Measure {
        if self.variant.policy().paragraph_spacing {
            self.attributes.space_after()
        } else {
            Measure::ZERO
        }
    }

    /// Set the space after the paragraph from decimal text.
    pub fn set_space_after(&mut self, points: &str) -> Result<(), FormatError> {
        self.attributes.set_space_after(points)
    }

    /// Get the emphasis flags.
    #[inline]
    pub fn emphasis(&self) -> Emphasis {
        self.attributes.emphasis()
    }

    /// Check if bold is set.
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.emphasis().contains(Emphasis::BOLD)
    }

    /// Set bold formatting.
    pub fn set_bold(&mut self, bold: bool) {
        self.attributes.set_emphasis(Emphasis::BOLD, bold);
    }

    /// Check if italic is set.
    #[inline]
    pub fn is_italic(&self) -> bool {
        self.emphasis().contains(Emphasis::ITALIC)
    }

    /// Set italic formatting.
    pub fn set_italic(&mut self, italic: bool) {
        self.attributes.set_emphasis(Emphasis::ITALIC, italic);
    }

    /// Check if underline is set.
    #[inline]
    pub fn is_underline(&self) -> bool {
        self.emphasis().contains(Emphasis::UNDERLINE)
    }

    /// Set underline formatting.
    pub fn set_underline(&mut self, underline: bool) {
        self.attributes.set_emphasis(Emphasis::UNDERLINE, underline);
    }

    /// Check if strikethrough is set.
    #[inline]
    pub fn is_strikethrough(&self) -> bool {
        self.emphasis().contains(Emphasis::STRIKETHROUGH)
    }

    /// Set strikethrough formatting.
    pub fn set_strikethrough(&mut self, strikethrough: bool) {
        self.attributes.set_emphasis(Emphasis::STRIKETHROUGH, strikethrough);
    }

    /// Check if superscript is set.
    #[inline]
    pub fn is_superscript(&self) -> bool {
        self.emphasis().contains(Emphasis::SUPERSCRIPT)
    }

    /// Set superscript. Does not clear subscript.
    pub fn set_superscript(&mut self, superscript: bool) {
        self.attributes.set_emphasis(Emphasis::SUPERSCRIPT, superscript);
    }

    /// Check if subscript is set.
    #[inline]
    pub fn is_subscript(&self) -> bool {
        self.emphasis().contains(Emphasis::SUBSCRIPT)
    }

    /// Set subscript. Does not clear superscript.
    pub fn set_subscript(&mut self, subscript: bool) {
        self.attributes.set_emphasis(Emphasis::SUBSCRIPT, subscript);
    }

    /// Get the raw apply-colors flag.
    #[inline]
    pub fn apply_colors(&self) -> bool {
        self.attributes.apply_colors()
    }

    /// Set the apply-colors flag.
    pub fn set_apply_colors(&mut self, apply_colors: bool) {
        self.attributes.set_apply_colors(apply_colors);
    }

    /// Whether colors take effect when this style is applied.
    ///
    /// Quick-style and theme variants always apply colors; saved paragraph and
    /// character records follow the flag.
    #[inline]
    pub fn applies_colors(&self) -> bool {
        self.variant.applies_colors(self.attributes.apply_colors())
    }

    /// Apply this style onto existing formatting.
    ///
    /// Font, size and emphasis always replace the target's. Spacing is written
    /// only by variants with paragraph spacing. Colors are written only when
    /// [`Style::applies_colors`] holds, and an `automatic` color leaves the
    /// target's color alone.
    pub fn apply_to(&self, target: &mut AttributeSet) {
        let source = &self.attributes;
        target.font_family.clone_from(&source.font_family);
        target.font_size = source.font_size;
        target.emphasis = source.emphasis;

        if self.variant.policy().paragraph_spacing {
            target.space_before = source.space_before;
            target.space_after = source.space_after;
        }

        if self.applies_colors() {
            if !source.foreground.is_automatic() {
                target.foreground = source.foreground;
            }
            if !source.background.is_automatic() {
                target.background = source.background;
            }
        } else {
            log::trace!("style {:?} keeps target colors", self.name);
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(String::new(), StyleKind::default(), StyleVariant::default())
    }
}

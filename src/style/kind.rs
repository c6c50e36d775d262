//! Style kinds and variants.
//!
//! [`StyleKind`] says what a style means when applied (body text, a heading, a
//! quote). [`StyleVariant`] says which container it lives in, and carries the
//! small policy table that is the only variant-specific behavior in the model.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::common::error::FormatError;

/// Highest supported heading level.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// Heading level, always within `1..=MAX_HEADING_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Create a level, or `None` if `level` is outside 1..=9.
    #[inline]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= MAX_HEADING_LEVEL {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the level number.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic kind of a style.
///
/// Fixed at construction; only an explicit copy produces a style of another kind.
///
/// # Examples
///
/// ```rust
/// use docstyle::style::StyleKind;
///
/// let kind: StyleKind = "heading-2".parse().unwrap();
/// assert_eq!(kind, StyleKind::heading(2).unwrap());
/// assert_eq!(kind.to_string(), "heading-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleKind {
    /// Body paragraph
    #[default]
    Paragraph,
    /// Character run
    Character,
    /// Heading of the given level
    Heading(HeadingLevel),
    /// Document title
    Title,
    /// Block quote
    Quote,
    /// Source code
    Code,
    /// Citation
    Citation,
    /// Hyperlink run
    Hyperlink,
}

impl StyleKind {
    /// Create a heading kind, or `None` if `level` is outside 1..=9.
    #[inline]
    pub const fn heading(level: u8) -> Option<Self> {
        match HeadingLevel::new(level) {
            Some(level) => Some(Self::Heading(level)),
            None => None,
        }
    }

    /// Heading level, if this is a heading.
    #[inline]
    pub const fn heading_level(self) -> Option<u8> {
        match self {
            Self::Heading(level) => Some(level.get()),
            _ => None,
        }
    }

    /// Whether the kind formats runs rather than whole paragraphs.
    #[inline]
    pub const fn is_character_scope(self) -> bool {
        matches!(self, Self::Character | Self::Hyperlink)
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => f.write_str("paragraph"),
            Self::Character => f.write_str("character"),
            Self::Heading(level) => write!(f, "heading-{level}"),
            Self::Title => f.write_str("title"),
            Self::Quote => f.write_str("quote"),
            Self::Code => f.write_str("code"),
            Self::Citation => f.write_str("citation"),
            Self::Hyperlink => f.write_str("hyperlink"),
        }
    }
}

impl FromStr for StyleKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "title" => Some(Self::Title),
            "quote" => Some(Self::Quote),
            "code" => Some(Self::Code),
            "citation" => Some(Self::Citation),
            "hyperlink" => Some(Self::Hyperlink),
            _ => s
                .strip_prefix("heading-")
                .and_then(|level| level.parse::<u8>().ok())
                .and_then(Self::heading),
        };
        kind.ok_or_else(|| FormatError::InvalidStyleKind(s.to_string()))
    }
}

impl Serialize for StyleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StyleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// How a variant treats the `apply_colors` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Colors are applied whatever the flag says
    Always,
    /// Colors are applied only when the flag is set
    RespectFlag,
}

/// Per-variant behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPolicy {
    /// Whether spacing before/after is meaningful; when not, it renders as `0.0`
    pub paragraph_spacing: bool,
    /// Treatment of the `apply_colors` flag
    pub colors: ColorPolicy,
}

/// The container a style belongs to.
///
/// | Variant | spacing | `apply_colors` |
/// |---|---|---|
/// | `Paragraph` | stored | respected |
/// | `Character` | always `0.0` | respected |
/// | `QuickStyle` | stored | ignored |
/// | `Theme` | stored | ignored |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVariant {
    /// Saved paragraph-scope style record
    #[default]
    Paragraph,
    /// Saved character-scope style record
    Character,
    /// Indexed quick-style slot
    QuickStyle,
    /// Theme entry
    Theme,
}

impl StyleVariant {
    /// Look up the policy row for this variant.
    #[inline]
    pub const fn policy(self) -> VariantPolicy {
        match self {
            Self::Paragraph => VariantPolicy {
                paragraph_spacing: true,
                colors: ColorPolicy::RespectFlag,
            },
            Self::Character => VariantPolicy {
                paragraph_spacing: false,
                colors: ColorPolicy::RespectFlag,
            },
            Self::QuickStyle | Self::Theme => VariantPolicy {
                paragraph_spacing: true,
                colors: ColorPolicy::Always,
            },
        }
    }

    /// Resolve whether colors are applied given the style's flag.
    #[inline]
    pub const fn applies_colors(self, apply_colors_flag: bool) -> bool {
        match self.policy().colors {
            ColorPolicy::Always => true,
            ColorPolicy::RespectFlag => apply_colors_flag,
        }
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "Paragraph"),
            Self::Character => write!(f, "Character"),
            Self::QuickStyle => write!(f, "Quick Style"),
            Self::Theme => write!(f, "Theme"),
        }
    }
}

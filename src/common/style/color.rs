//! Color values and their canonical text form.
//!
//! Every color that enters the style model goes through [`StyleColor::parse`]
//! exactly once. The result is either the `automatic` sentinel or an RGB triple
//! that always renders as `#RRGGBB` with uppercase digits, so two colors compare
//! equal exactly when their canonical strings do.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::named;
use crate::common::error::FormatError;

/// Canonical text of the "do not override" color sentinel.
pub const AUTOMATIC: &str = "automatic";

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use docstyle::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// assert_eq!(blue.to_string(), "#0000FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a six digit hex string.
    ///
    /// The leading `#` is optional and digits may be in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docstyle::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("ff0000").unwrap();
    /// let blue = RGBColor::from_hex("#0000FF").unwrap();
    /// assert_eq!(red, RGBColor::new(255, 0, 0));
    /// assert!(RGBColor::from_hex("+F0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docstyle::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A canonical style color: the `automatic` sentinel or an explicit RGB value.
///
/// Alpha channels and alternate spellings are absorbed at parse time, so the
/// value has no memory of how it was written.
///
/// # Examples
///
/// ```rust
/// use docstyle::common::StyleColor;
///
/// let color = StyleColor::parse("red").unwrap();
/// assert_eq!(color.to_string(), "#FF0000");
/// assert_eq!(StyleColor::parse("#f00").unwrap(), color);
/// assert!(StyleColor::parse("AUTOMATIC").unwrap().is_automatic());
/// assert!(StyleColor::parse("notacolor").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleColor {
    /// Inherit; do not override the color of the target
    #[default]
    Automatic,
    /// Explicit color
    Rgb(RGBColor),
}

impl StyleColor {
    /// Parse and canonicalize a color specification.
    ///
    /// Accepted forms, all surrounded by optional whitespace:
    ///
    /// - `automatic` in any letter case
    /// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - a bare `RRGGBB` as used by WordprocessingML `w:color`
    /// - an HTML/CSS color keyword such as `red` or `CornflowerBlue`
    /// - `rgb(...)` / `rgba(...)` with comma or space separated channels
    ///
    /// Alpha is validated and then discarded.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let color = if trimmed.eq_ignore_ascii_case(AUTOMATIC) {
            Self::Automatic
        } else {
            match parse_rgb(trimmed) {
                Some(rgb) => Self::Rgb(rgb),
                None => {
                    log::warn!("rejected color specification {input:?}");
                    return Err(FormatError::InvalidColor(input.to_string()));
                },
            }
        };
        log::trace!("canonicalized color {input:?} as {color}");
        Ok(color)
    }

    /// Check whether this is the `automatic` sentinel.
    #[inline]
    pub const fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    /// Get the explicit RGB value, if any.
    #[inline]
    pub const fn rgb(&self) -> Option<RGBColor> {
        match self {
            Self::Automatic => None,
            Self::Rgb(rgb) => Some(*rgb),
        }
    }
}

impl From<RGBColor> for StyleColor {
    fn from(rgb: RGBColor) -> Self {
        Self::Rgb(rgb)
    }
}

impl fmt::Display for StyleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => f.write_str(AUTOMATIC),
            Self::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

impl FromStr for StyleColor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compares against canonical text; `"#ff0000"` is not equal, `"#FF0000"` is.
impl PartialEq<str> for StyleColor {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Automatic => other == AUTOMATIC,
            Self::Rgb(rgb) => other
                .strip_prefix('#')
                .is_some_and(|hex| hex == rgb.to_hex()),
        }
    }
}

impl PartialEq<&str> for StyleColor {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for StyleColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StyleColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/// Canonicalize a color specification to its `#RRGGBB` / `automatic` text.
///
/// # Examples
///
/// ```rust
/// use docstyle::common::canonicalize_color;
///
/// assert_eq!(canonicalize_color("#00ff00").unwrap(), "#00FF00");
/// assert_eq!(canonicalize_color("Automatic").unwrap(), "automatic");
/// ```
pub fn canonicalize_color(input: &str) -> Result<String, FormatError> {
    StyleColor::parse(input).map(|color| color.to_string())
}

fn parse_rgb(s: &str) -> Option<RGBColor> {
    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex_digits(digits);
    }
    if let Some(rgb) = named::lookup(s) {
        return Some(rgb);
    }
    if let Some(args) = functional_args(s) {
        return parse_rgb_function(args);
    }
    RGBColor::from_hex(s)
}

fn parse_hex_digits(digits: &str) -> Option<RGBColor> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 | 4 => {
            let bytes = digits.as_bytes();
            let expand = |i: usize| nibble(bytes[i]) * 0x11;
            Some(RGBColor::new(expand(0), expand(1), expand(2)))
        },
        6 | 8 => RGBColor::from_hex(&digits[..6]),
        _ => None,
    }
}

#[inline]
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Extract the argument list of `rgb(...)` / `rgba(...)`.
fn functional_args(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let name = s[..open].trim_end();
    if !(name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba")) {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

fn parse_rgb_function(args: &str) -> Option<RGBColor> {
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (args, None),
    };

    let parts: Vec<&str> = if channels.contains(',') {
        channels.split(',').map(str::trim).collect()
    } else {
        channels.split_whitespace().collect()
    };

    let alpha = match (parts.len(), slash_alpha) {
        (3, alpha) => alpha,
        (4, None) if channels.contains(',') => Some(parts[3]),
        _ => return None,
    };
    if let Some(alpha) = alpha {
        parse_alpha(alpha.trim())?;
    }

    Some(RGBColor::new(
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ))
}

fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = fast_float2::parse(text).ok()?;
    value.is_finite().then_some(value)
}

fn parse_channel(text: &str) -> Option<u8> {
    let value = match text.strip_suffix('%') {
        Some(percent) => parse_number(percent)?.clamp(0.0, 100.0) * 255.0 / 100.0,
        None => parse_number(text)?.clamp(0.0, 255.0),
    };
    Some(value.round() as u8)
}

fn parse_alpha(text: &str) -> Option<f64> {
    match text.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|p| p.clamp(0.0, 100.0) / 100.0),
        None => parse_number(text).map(|a| a.clamp(0.0, 1.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(input: &str) -> String {
        canonicalize_color(input).unwrap()
    }

    #[test]
    fn test_automatic_ignores_case() {
        assert_eq!(canon("automatic"), "automatic");
        assert_eq!(canon("AUTOMATIC"), "automatic");
        assert_eq!(canon("Automatic"), "automatic");
        assert_eq!(canon("  automatic "), "automatic");
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(canon("#ff0000"), "#FF0000");
        assert_eq!(canon("#FF0000"), "#FF0000");
        assert_eq!(canon("#f00"), "#FF0000");
        assert_eq!(canon("#f00c"), "#FF0000");
        assert_eq!(canon("#12345678"), "#123456");
        assert_eq!(canon("2f5496"), "#2F5496");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(canon("red"), "#FF0000");
        assert_eq!(canon("Red"), "#FF0000");
        assert_eq!(canon("cornflowerblue"), "#6495ED");
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(canon("rgb(255, 0, 0)"), "#FF0000");
        assert_eq!(canon("RGB(0,128,255)"), "#0080FF");
        assert_eq!(canon("rgba(255, 255, 255, 0.5)"), "#FFFFFF");
        assert_eq!(canon("rgb(100% 0% 50%)"), "#FF0080");
        assert_eq!(canon("rgb(10 20 30 / 40%)"), "#0A141E");
        assert_eq!(canon("rgb(300, -5, 12.6)"), "#FF000D");
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "notacolor",
            "",
            "#",
            "#12",
            "#12345",
            "#1234567",
            "#gg0000",
            "+F0000",
            "transparent",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(1 2 3 4)",
            "rgb(a, b, c)",
            "rgb(1, 2, 3",
            "hsl(0, 100%, 50%)",
            "rgb(nan, 0, 0)",
        ] {
            assert_eq!(
                StyleColor::parse(input),
                Err(FormatError::InvalidColor(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_compare_with_canonical_text() {
        let color = StyleColor::parse("lime").unwrap();
        assert!(color == "#00FF00");
        assert!(color != "#00ff00");
        assert!(color != "00FF00");
        assert!(StyleColor::Automatic == "automatic");
        assert!(StyleColor::Automatic != "Automatic");
    }

    #[test]
    fn test_deserialize_goes_through_normalization() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error as ValueError, StrDeserializer};

        let de: StrDeserializer<'_, ValueError> = "#abcdef".into_deserializer();
        assert_eq!(StyleColor::deserialize(de).unwrap().to_string(), "#ABCDEF");

        let de: StrDeserializer<'_, ValueError> = "notacolor".into_deserializer();
        assert!(StyleColor::deserialize(de).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy producing color specifications in every accepted syntax
        fn color_input_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                any::<(u8, u8, u8)>().prop_map(|(r, g, b)| format!("#{r:02x}{g:02X}{b:02x}")),
                any::<(u8, u8, u8)>().prop_map(|(r, g, b)| format!("rgb({r}, {g}, {b})")),
                "#[0-9a-fA-F]{3}",
                "#[0-9a-fA-F]{8}",
                Just("automatic".to_string()),
                Just("DarkOliveGreen".to_string()),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_canonicalization_is_idempotent(input in color_input_strategy()) {
                let once = canonicalize_color(&input).unwrap();
                let twice = canonicalize_color(&once).unwrap();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn prop_canonical_form_shape((r, g, b) in any::<(u8, u8, u8)>()) {
                let text = canonicalize_color(&format!("rgb({r} {g} {b})")).unwrap();
                prop_assert_eq!(text.len(), 7);
                prop_assert!(text.starts_with('#'));
                prop_assert!(!text.bytes().any(|c| c.is_ascii_lowercase()));
                prop_assert_eq!(StyleColor::parse(&text).unwrap().rgb(), Some(RGBColor::new(r, g, b)));
            }

            #[test]
            fn prop_case_insensitive(input in color_input_strategy()) {
                prop_assert_eq!(
                    canonicalize_color(&input.to_ascii_uppercase()).unwrap(),
                    canonicalize_color(&input.to_ascii_lowercase()).unwrap()
                );
            }
        }
    }
}

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::common::error::FormatError;

const TWIPS_PER_POINT: f64 = 20.0;
const HALF_POINTS_PER_POINT: f64 = 2.0;

/// Largest magnitude, in points, a measurement may hold.
pub const MAX_POINTS: f64 = 1_000_000.0;

/// A typographic measurement in points (font size, paragraph spacing).
///
/// Values are rounded half away from zero to two fractional digits when they are
/// stored, and always render with the `"0.0#"` pattern: at least one fractional
/// digit, at most two, so `11` renders as `"11.0"` and `11.256` as `"11.26"`.
///
/// # Examples
///
/// ```rust
/// use docstyle::common::Measure;
///
/// assert_eq!(Measure::parse("11").unwrap().to_string(), "11.0");
/// assert_eq!(Measure::parse("11.256").unwrap().to_string(), "11.26");
/// assert_eq!(Measure::parse("10.50").unwrap().to_string(), "10.5");
/// assert!(Measure::parse("eleven").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Measure(f64);

impl Measure {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Create a measurement from a point value.
    ///
    /// Fails for NaN and infinities, and for magnitudes above [`MAX_POINTS`].
    pub fn new(points: f64) -> Result<Self, FormatError> {
        if !points.is_finite() {
            return Err(FormatError::InvalidMeasure(points.to_string()));
        }
        if points.abs() > MAX_POINTS {
            log::warn!("rejected oversized measurement {points}");
            return Err(FormatError::MeasureOutOfRange {
                value: points,
                requirement: "magnitude must not exceed 1000000 points",
            });
        }
        let rounded = (points * 100.0).round() / 100.0;
        // Fold -0.0 into 0.0 so equal values hash equally
        Ok(Self(if rounded == 0.0 { 0.0 } else { rounded }))
    }

    /// Parse a decimal number of points.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let points: f64 = match fast_float2::parse(text.trim()) {
            Ok(points) => points,
            Err(_) => {
                log::warn!("rejected measurement {text:?}");
                return Err(FormatError::InvalidMeasure(text.to_string()));
            },
        };
        if !points.is_finite() {
            log::warn!("rejected non-finite measurement {text:?}");
            return Err(FormatError::InvalidMeasure(text.to_string()));
        }
        Self::new(points)
    }

    /// Get the value in points.
    #[inline]
    pub const fn points(&self) -> f64 {
        self.0
    }

    /// Convert to half-points, the unit of WordprocessingML `w:sz`.
    #[inline]
    pub fn half_points(&self) -> u32 {
        (self.0 * HALF_POINTS_PER_POINT).round().max(0.0) as u32
    }

    /// Convert to twips (1/20 point), the unit of WordprocessingML `w:spacing`.
    #[inline]
    pub fn twips(&self) -> u32 {
        (self.0 * TWIPS_PER_POINT).round().max(0.0) as u32
    }

    /// Value in hundredths of a point; exact because values are stored rounded
    /// and bounded by [`MAX_POINTS`].
    #[inline]
    fn hundredths(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    pub(crate) fn require_positive(self) -> Result<Self, FormatError> {
        if self.0 > 0.0 {
            Ok(self)
        } else {
            Err(FormatError::MeasureOutOfRange {
                value: self.0,
                requirement: "must be greater than zero",
            })
        }
    }

    pub(crate) fn require_non_negative(self) -> Result<Self, FormatError> {
        if self.0 >= 0.0 {
            Ok(self)
        } else {
            Err(FormatError::MeasureOutOfRange {
                value: self.0,
                requirement: "must not be negative",
            })
        }
    }
}

// Stored values are always finite, so equality is total.
impl Eq for Measure {}

impl Hash for Measure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hundredths().hash(state);
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.hundredths();
        let sign = if hundredths < 0 { "-" } else { "" };
        let magnitude = hundredths.unsigned_abs();
        let (whole, fraction) = (magnitude / 100, magnitude % 100);
        if fraction % 10 == 0 {
            write!(f, "{sign}{whole}.{}", fraction / 10)
        } else {
            write!(f, "{sign}{whole}.{fraction:02}")
        }
    }
}

impl FromStr for Measure {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MeasureVisitor)
    }
}

/// Accepts both the canonical text and bare numbers, since YAML may emit either.
struct MeasureVisitor;

impl Visitor<'_> for MeasureVisitor {
    type Value = Measure;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number of points")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Measure, E> {
        Measure::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Measure, E> {
        Measure::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Measure, E> {
        Measure::new(v as f64).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Measure, E> {
        Measure::new(v as f64).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        Measure::parse(text).unwrap().to_string()
    }

    #[test]
    fn test_zero_pattern() {
        assert_eq!(render("11"), "11.0");
        assert_eq!(render("11.0"), "11.0");
        assert_eq!(render("11.25"), "11.25");
        assert_eq!(render("11.250"), "11.25");
        assert_eq!(render("11.2"), "11.2");
        assert_eq!(render("0"), "0.0");
        assert_eq!(render("0.05"), "0.05");
        assert_eq!(render(" 12 "), "12.0");
        assert_eq!(render("1e1"), "10.0");
    }

    #[test]
    fn test_rounding_policy() {
        assert_eq!(render("11.256"), "11.26");
        assert_eq!(render("11.254"), "11.25");
        assert_eq!(render("11.999"), "12.0");
        assert_eq!(Measure::parse("11.256").unwrap(), Measure::parse("11.26").unwrap());
    }

    #[test]
    fn test_negative_zero_folds() {
        let negative = Measure::parse("-0.001").unwrap();
        assert_eq!(negative, Measure::ZERO);
        assert_eq!(negative.to_string(), "0.0");
        assert_eq!(render("-1.5"), "-1.5");
    }

    #[test]
    fn test_rejects_non_numbers() {
        for input in ["", "abc", "11pt", "1.2.3", "NaN", "inf", "-infinity"] {
            assert_eq!(
                Measure::parse(input),
                Err(FormatError::InvalidMeasure(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_range_checks() {
        assert!(Measure::ZERO.require_positive().is_err());
        assert!(Measure::ZERO.require_non_negative().is_ok());
        let negative = Measure::new(-2.0).unwrap();
        assert!(matches!(
            negative.require_non_negative(),
            Err(FormatError::MeasureOutOfRange { .. })
        ));
    }

    #[test]
    fn test_oversized_values_rejected() {
        assert_eq!(render("1000000"), "1000000.0");
        assert_eq!(render("-999999.99"), "-999999.99");

        for input in ["100000000000000000", "1e307", "-1000000.01"] {
            assert!(
                matches!(Measure::parse(input), Err(FormatError::MeasureOutOfRange { .. })),
                "{input:?} should be out of range"
            );
        }
        assert!(Measure::new(f64::MAX).is_err());
    }

    #[test]
    fn test_unit_conversions() {
        let size = Measure::parse("11").unwrap();
        assert_eq!(size.half_points(), 22);
        let spacing = Measure::parse("12").unwrap();
        assert_eq!(spacing.twips(), 240);
        assert_eq!(Measure::parse("10.5").unwrap().half_points(), 21);
        assert_eq!(Measure::new(MAX_POINTS).unwrap().twips(), 20_000_000);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_rendering_has_one_or_two_fraction_digits(value in 0.0f64..10_000.0) {
                let text = Measure::new(value).unwrap().to_string();
                let (_, fraction) = text.split_once('.').unwrap();
                prop_assert!(!fraction.is_empty() && fraction.len() <= 2, "{}", text);
                if fraction.len() == 2 {
                    prop_assert!(!fraction.ends_with('0'), "{}", text);
                }
            }

            #[test]
            fn prop_rendering_round_trips(value in 0.0f64..10_000.0) {
                let measure = Measure::new(value).unwrap();
                let reparsed = Measure::parse(&measure.to_string()).unwrap();
                prop_assert_eq!(measure, reparsed);
                prop_assert_eq!(measure.to_string(), reparsed.to_string());
            }
        }
    }
}

//! Process-wide style defaults.
//!
//! The default font family and size are configured at most once, at startup,
//! and are immutable afterwards. Every freshly constructed style reads them.

use once_cell::sync::OnceCell;

use crate::common::error::{Error, Result};
use crate::common::style::Measure;

/// Font family used when nothing else is configured.
pub const BUILTIN_FONT_FAMILY: &str = "Calibri";

/// Font size in points used when nothing else is configured.
pub const BUILTIN_FONT_SIZE: f64 = 11.0;

static DEFAULTS: OnceCell<StyleDefaults> = OnceCell::new();

/// Default font attributes applied to new styles.
///
/// Only [`StyleDefaults::new`] and [`StyleDefaults::builtin`] build a record, so
/// an installed default font size is always positive.
///
/// # Examples
///
/// ```rust
/// use docstyle::common::StyleDefaults;
///
/// let defaults = StyleDefaults::get();
/// assert!(!defaults.font_family().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefaults {
    font_family: String,
    font_size: Measure,
}

impl StyleDefaults {
    /// Create a defaults record.
    ///
    /// Fails if the font size is not a positive number.
    pub fn new(font_family: impl Into<String>, font_size: &str) -> Result<Self> {
        let font_size = Measure::parse(font_size)?.require_positive()?;
        Ok(Self {
            font_family: font_family.into(),
            font_size,
        })
    }

    /// The built-in defaults: Calibri, 11 points.
    pub fn builtin() -> Self {
        Self {
            font_family: BUILTIN_FONT_FAMILY.to_string(),
            font_size: Measure::new(BUILTIN_FONT_SIZE).unwrap_or_default(),
        }
    }

    /// Install process-wide defaults.
    ///
    /// Succeeds at most once per process, and only before the defaults were
    /// first read through [`StyleDefaults::get`].
    pub fn install(defaults: StyleDefaults) -> Result<()> {
        log::debug!(
            "installing style defaults: {} {}pt",
            defaults.font_family,
            defaults.font_size
        );
        DEFAULTS
            .set(defaults)
            .map_err(|_| Error::DefaultsAlreadyInstalled)
    }

    /// Get the process-wide defaults, falling back to [`StyleDefaults::builtin`].
    pub fn get() -> &'static StyleDefaults {
        DEFAULTS.get_or_init(Self::builtin)
    }

    /// Default font family; may be a comma-separated fallback list.
    #[inline]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Default font size.
    #[inline]
    pub fn font_size(&self) -> Measure {
        self.font_size
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

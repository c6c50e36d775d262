//! Theme support.
//!
//! A theme is a named collection that owns its styles by value. Style names are
//! unique within a theme (compared exactly, including case).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::{StyleKind, StyleVariant};
use super::model::Style;
use crate::common::error::{Error, FormatError, Result};

/// A named collection of styles intended to be applied together.
///
/// Mutation happens through [`Theme::add`], [`Theme::update`] and
/// [`Theme::remove`]; each either fully succeeds or leaves the theme unchanged.
///
/// # Examples
///
/// ```rust
/// use docstyle::style::{Style, StyleKind, StyleVariant, Theme};
///
/// let mut theme = Theme::new("Report");
/// let mut body = Style::new("Body", StyleKind::Paragraph, StyleVariant::Theme);
/// body.set_color("#333").unwrap();
/// theme.add(body).unwrap();
///
/// theme.update("Body", |style| style.set_font_size("10.5")).unwrap();
/// assert_eq!(theme.get("Body").unwrap().font_size().to_string(), "10.5");
/// assert!(theme.add(Style::new("Body", StyleKind::Paragraph, StyleVariant::Theme)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThemeRecord")]
pub struct Theme {
    /// Theme name
    name: String,
    /// Styles in insertion order
    styles: SmallVec<[Style; 8]>,
}

/// Unvalidated shape of a persisted theme.
#[derive(Deserialize)]
struct ThemeRecord {
    name: String,
    #[serde(default)]
    styles: Vec<Style>,
}

impl TryFrom<ThemeRecord> for Theme {
    type Error = Error;

    fn try_from(record: ThemeRecord) -> Result<Self> {
        let mut theme = Theme::new(record.name);
        for style in record.styles {
            theme.add(style)?;
        }
        Ok(theme)
    }
}

impl Theme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: SmallVec::new(),
        }
    }

    /// Get the theme name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the theme name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the number of styles.
    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the theme holds no styles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over the styles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    /// Check if a style with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name() == name)
    }

    /// Add a style, taking ownership of it.
    ///
    /// Fails with [`Error::DuplicateStyle`] if the name is already taken.
    pub fn add(&mut self, style: Style) -> Result<()> {
        if self.contains(style.name()) {
            log::warn!("theme {:?} already has a style named {:?}", self.name, style.name());
            return Err(Error::DuplicateStyle(style.name().to_string()));
        }
        log::debug!("theme {:?}: adding style {:?}", self.name, style.name());
        self.styles.push(style);
        Ok(())
    }

    /// Edit a style in place.
    ///
    /// The closure works on a copy that is committed only if it succeeds and the
    /// (possibly renamed) style does not collide with another name.
    pub fn update<F, R>(&mut self, name: &str, edit: F) -> Result<R>
    where
        F: FnOnce(&mut Style) -> std::result::Result<R, FormatError>,
    {
        let position = self
            .position(name)
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))?;

        let mut draft = self.styles[position].clone();
        let output = edit(&mut draft)?;

        if draft.name() != name && self.contains(draft.name()) {
            log::warn!("theme {:?}: rename of {:?} to {:?} collides", self.name, name, draft.name());
            return Err(Error::DuplicateStyle(draft.name().to_string()));
        }

        log::debug!("theme {:?}: updated style {:?}", self.name, draft.name());
        self.styles[position] = draft;
        Ok(output)
    }

    /// Remove a style by name and hand it back.
    pub fn remove(&mut self, name: &str) -> Result<Style> {
        let position = self
            .position(name)
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))?;
        log::debug!("theme {:?}: removing style {:?}", self.name, name);
        Ok(self.styles.remove(position))
    }

    /// Quick-style slots ordered by index; ties keep insertion order.
    pub fn quick_styles(&self) -> Vec<&Style> {
        let mut quick: Vec<&Style> = self
            .styles
            .iter()
            .filter(|s| s.variant() == StyleVariant::QuickStyle)
            .collect();
        quick.sort_by_key(|s| s.index());
        quick
    }

    /// Get the first quick style occupying the given slot.
    pub fn quick_style(&self, index: i32) -> Option<&Style> {
        self.styles
            .iter()
            .find(|s| s.variant() == StyleVariant::QuickStyle && s.index() == index)
    }

    /// Build the default Office theme: Normal, Title, Heading 1-3, Quote and Hyperlink.
    pub fn office() -> Result<Self> {
        let mut theme = Self::new("Office Theme");

        let normal = Style::new("Normal", StyleKind::Paragraph, StyleVariant::QuickStyle);
        theme.add(normal)?;

        let mut title = Style::new("Title", StyleKind::Title, StyleVariant::QuickStyle);
        title.set_index(1);
        title.set_font_family("Calibri Light");
        title.set_font_size("28")?;
        theme.add(title)?;

        for (level, size, color, before) in [
            (1u8, "16", "2F5496", "12"),
            (2, "13", "2F5496", "2"),
            (3, "12", "1F3763", "2"),
        ] {
            let kind = StyleKind::heading(level).unwrap_or(StyleKind::Paragraph);
            let mut heading = Style::new(format!("Heading {level}"), kind, StyleVariant::QuickStyle);
            heading.set_index(1 + i32::from(level));
            heading.set_font_family("Calibri Light");
            heading.set_font_size(size)?;
            heading.set_color(color)?;
            heading.set_space_before(before)?;
            theme.add(heading)?;
        }

        let mut quote = Style::new("Quote", StyleKind::Quote, StyleVariant::QuickStyle);
        quote.set_index(5);
        quote.set_italic(true);
        quote.set_color("404040")?;
        quote.set_space_before("10")?;
        quote.set_space_after("8")?;
        theme.add(quote)?;

        let mut hyperlink = Style::new("Hyperlink", StyleKind::Hyperlink, StyleVariant::Character);
        hyperlink.set_index(99);
        hyperlink.set_color("0563C1")?;
        hyperlink.set_underline(true);
        theme.add(hyperlink)?;

        Ok(theme)
    }

    /// Serialize the theme to YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize theme to YAML: {}", e)))
    }

    /// Load a theme from YAML.
    ///
    /// Colors and measurements are canonicalized while loading; invalid values
    /// and duplicate style names are rejected.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Serialization(format!("Failed to load theme from YAML: {}", e)))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.styles.iter().position(|s| s.name() == name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<'a> IntoIterator for &'a Theme {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MAX_HEADING_LEVEL;

    fn quick(name: &str, index: i32) -> Style {
        let mut style = Style::new(name, StyleKind::Paragraph, StyleVariant::QuickStyle);
        style.set_index(index);
        style
    }

    #[test]
    fn test_theme_creation() {
        let theme = Theme::new("Plain");
        assert_eq!(theme.name(), "Plain");
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }

    #[test]
    fn test_names_are_unique() {
        let mut theme = Theme::new("Plain");
        theme.add(quick("Body", 0)).unwrap();
        let err = theme.add(quick("Body", 1)).unwrap_err();
        assert!(matches!(err, Error::DuplicateStyle(ref name) if name == "Body"));
        assert_eq!(theme.len(), 1);

        // Exact comparison: a different case is a different name
        theme.add(quick("body", 1)).unwrap();
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_update_commits_on_success() {
        let mut theme = Theme::new("Plain");
        theme.add(quick("Body", 0)).unwrap();

        theme
            .update("Body", |style| {
                style.set_color("purple")?;
                style.set_name("Text");
                Ok(())
            })
            .unwrap();

        assert!(!theme.contains("Body"));
        assert_eq!(theme.get("Text").unwrap().color(), "#800080");
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut theme = Theme::new("Plain");
        theme.add(quick("Body", 0)).unwrap();
        theme.add(quick("Caption", 1)).unwrap();

        let err = theme
            .update("Body", |style| {
                style.set_bold(true);
                style.set_color("notacolor")
            })
            .unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::InvalidColor(_))));
        assert!(!theme.get("Body").unwrap().is_bold());

        let err = theme
            .update("Body", |style| {
                style.set_italic(true);
                style.set_name("Caption");
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateStyle(_)));
        assert!(!theme.get("Body").unwrap().is_italic());

        assert!(matches!(
            theme.update("Missing", |_| Ok(())),
            Err(Error::StyleNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let mut theme = Theme::new("Plain");
        theme.add(quick("Body", 0)).unwrap();
        let removed = theme.remove("Body").unwrap();
        assert_eq!(removed.name(), "Body");
        assert!(theme.is_empty());
        assert!(matches!(theme.remove("Body"), Err(Error::StyleNotFound(_))));
    }

    #[test]
    fn test_quick_styles_ordered_by_index() {
        let mut theme = Theme::new("Plain");
        theme.add(quick("C", 2)).unwrap();
        theme.add(quick("A", 0)).unwrap();
        theme.add(Style::new("Run", StyleKind::Character, StyleVariant::Character)).unwrap();
        theme.add(quick("B", 2)).unwrap();

        let names: Vec<&str> = theme.quick_styles().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["A", "C", "B"]);
        assert_eq!(theme.quick_style(2).map(Style::name), Some("C"));
        assert!(theme.quick_style(7).is_none());
    }

    #[test]
    fn test_office_theme() {
        let theme = Theme::office().unwrap();
        assert_eq!(theme.name(), "Office Theme");
        assert_eq!(theme.len(), 7);

        let h1 = theme.get("Heading 1").unwrap();
        assert_eq!(h1.kind(), StyleKind::heading(1).unwrap());
        assert_eq!(h1.color(), "#2F5496");
        assert_eq!(h1.font_size().to_string(), "16.0");
        assert_eq!(h1.space_before().to_string(), "12.0");

        let normal = theme.get("Normal").unwrap();
        assert_eq!(normal.font_size().to_string(), "11.0");
        assert!(normal.color().is_automatic());

        let slots: Vec<i32> = theme.quick_styles().iter().map(|s| s.index()).collect();
        assert_eq!(slots, [0, 1, 2, 3, 4, 5]);
        assert_eq!(theme.get("Hyperlink").unwrap().variant(), StyleVariant::Character);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_round_trip() {
        let theme = Theme::office().unwrap();
        let yaml = theme.to_yaml().unwrap();
        assert!(yaml.contains("#2F5496"));
        let loaded = Theme::from_yaml(&yaml).unwrap();
        assert_eq!(loaded, theme);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_round_trip_keeps_every_heading_level() {
        let mut theme = Theme::new("Outline");
        for level in 1..=MAX_HEADING_LEVEL {
            let kind = StyleKind::heading(level).unwrap();
            theme.add(Style::new(format!("Level {level}"), kind, StyleVariant::Theme)).unwrap();
        }
        let loaded = Theme::from_yaml(&theme.to_yaml().unwrap()).unwrap();
        assert_eq!(loaded, theme);
        assert_eq!(loaded.get("Level 9").unwrap().kind().heading_level(), Some(9));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_load_normalizes_and_validates() {
        let yaml = r##"
name: Loaded
styles:
  - name: Body
    kind: paragraph
    variant: theme
    index: 0
    attributes:
      foreground: "red"
      background: "Automatic"
      font_family: Cambria
      font_size: "12"
      emphasis: "BOLD"
      space_before: "0"
      space_after: "6"
      apply_colors: true
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        let body = theme.get("Body").unwrap();
        assert_eq!(body.color(), "#FF0000");
        assert!(body.highlight().is_automatic());
        assert_eq!(body.font_size().to_string(), "12.0");
        assert!(body.is_bold());

        let bad_color = yaml.replace("\"red\"", "\"notacolor\"");
        assert!(matches!(Theme::from_yaml(&bad_color), Err(Error::Serialization(_))));

        let bad_size = yaml.replace("font_size: \"12\"", "font_size: \"-12\"");
        assert!(Theme::from_yaml(&bad_size).is_err());

        let duplicate = format!(
            "{}{}",
            yaml,
            &yaml[yaml.find("  - name").unwrap_or(0)..]
        );
        assert!(Theme::from_yaml(&duplicate).is_err());
    }
}

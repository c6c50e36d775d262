//! WordprocessingML output for styles.
//!
//! Renders styles as `<w:style>` elements and themes as a complete `styles.xml`
//! part. Only canonical values reach the markup: colors as `RRGGBB`, sizes in
//! half-points and spacing in twips.

use std::fmt::Write as FmtWrite;

use super::kind::StyleVariant;
use super::model::Style;
use super::theme::Theme;
use crate::common::StyleDefaults;
use crate::common::error::Result;
use crate::common::xml::escape_xml;

impl Style {
    /// Derive a `w:styleId` from the name by dropping whitespace.
    ///
    /// Falls back to `Style{index}` for names without any other character.
    pub fn style_id(&self) -> String {
        let id: String = self.name().chars().filter(|c| !c.is_whitespace()).collect();
        if id.is_empty() {
            format!("Style{}", self.index())
        } else {
            id
        }
    }

    /// Generate the `<w:style>` element for this style.
    ///
    /// Superscript wins over subscript when both are set, since a run has a
    /// single vertical alignment.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        let character =
            self.variant() == StyleVariant::Character || self.kind().is_character_scope();

        write!(
            &mut xml,
            r#"<w:style w:type="{}" w:styleId="{}">"#,
            if character { "character" } else { "paragraph" },
            escape_xml(&self.style_id())
        )?;
        write!(&mut xml, r#"<w:name w:val="{}"/>"#, escape_xml(self.name()))?;
        write!(&mut xml, r#"<w:uiPriority w:val="{}"/>"#, self.index())?;

        if self.variant() == StyleVariant::QuickStyle {
            xml.push_str("<w:qFormat/>");
        }

        // Paragraph properties
        if !character && self.variant().policy().paragraph_spacing {
            write!(
                &mut xml,
                r#"<w:pPr><w:spacing w:before="{}" w:after="{}"/></w:pPr>"#,
                self.space_before().twips(),
                self.space_after().twips()
            )?;
        }

        // Run properties
        xml.push_str("<w:rPr>");
        write_fonts(&mut xml, self.font_family())?;

        if self.is_bold() {
            xml.push_str("<w:b/>");
        }
        if self.is_italic() {
            xml.push_str("<w:i/>");
        }
        if self.is_strikethrough() {
            xml.push_str("<w:strike/>");
        }

        let colors = self.applies_colors();
        if colors && let Some(rgb) = self.color().rgb() {
            write!(&mut xml, r#"<w:color w:val="{}"/>"#, rgb.to_hex())?;
        }

        let size = self.font_size().half_points();
        write!(&mut xml, r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size)?;

        if self.is_underline() {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }

        if colors && let Some(rgb) = self.highlight().rgb() {
            write!(
                &mut xml,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                rgb.to_hex()
            )?;
        }

        if self.is_superscript() {
            xml.push_str(r#"<w:vertAlign w:val="superscript"/>"#);
        } else if self.is_subscript() {
            xml.push_str(r#"<w:vertAlign w:val="subscript"/>"#);
        }

        xml.push_str("</w:rPr></w:style>");

        Ok(xml)
    }
}

/// `w:rFonts` takes one typeface, so only the first entry of a fallback list is written.
fn write_fonts(xml: &mut String, font_family: &str) -> Result<()> {
    let primary = font_family.split(',').next().unwrap_or_default().trim();
    if !primary.is_empty() {
        let font = escape_xml(primary);
        write!(
            xml,
            r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
            font, font, font
        )?;
    }
    Ok(())
}

/// Generate a complete `styles.xml` part from a theme, with document defaults
/// taken from [`StyleDefaults`].
pub fn generate_styles_xml(theme: &Theme) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    // Document defaults
    let defaults = StyleDefaults::get();
    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    write_fonts(&mut xml, defaults.font_family())?;
    let size = defaults.font_size().half_points();
    write!(&mut xml, r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size)?;
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>");

    for style in theme {
        xml.push_str(&style.to_xml()?);
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

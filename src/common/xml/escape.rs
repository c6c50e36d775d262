use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SPECIAL).expect("Failed to build XML escaper"));

/// Escape text for use inside an XML attribute value or text node.
///
/// # Examples
///
/// ```
/// use docstyle::common::xml::escape_xml;
/// assert_eq!(escape_xml("Quote & \"Cite\""), "Quote &amp; &quot;Cite&quot;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &ENTITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("Heading 1"), "Heading 1");
        assert_eq!(escape_xml(""), "");
    }
}

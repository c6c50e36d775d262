use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Character emphasis flags.
    ///
    /// Every flag is independent. In particular `SUPERSCRIPT` and `SUBSCRIPT` may
    /// both be set; resolving that conflict is left to whoever renders the text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Emphasis: u8 {
        /// Bold
        const BOLD = 0x01;
        /// Italic
        const ITALIC = 0x02;
        /// Single underline
        const UNDERLINE = 0x04;
        /// Strikethrough
        const STRIKETHROUGH = 0x08;
        /// Raised, reduced-size text
        const SUPERSCRIPT = 0x10;
        /// Lowered, reduced-size text
        const SUBSCRIPT = 0x20;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Emphasis::default().is_empty());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut emphasis = Emphasis::BOLD;
        emphasis.set(Emphasis::SUPERSCRIPT, true);
        emphasis.set(Emphasis::SUBSCRIPT, true);
        assert!(emphasis.contains(Emphasis::BOLD | Emphasis::SUPERSCRIPT | Emphasis::SUBSCRIPT));

        emphasis.set(Emphasis::BOLD, false);
        assert!(!emphasis.contains(Emphasis::BOLD));
        assert!(emphasis.contains(Emphasis::SUBSCRIPT));
    }
}

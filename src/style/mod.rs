//! The style model.
//!
//! - [`Style`]: a named, kinded bundle of formatting attributes
//! - [`AttributeSet`]: the canonical attribute values shared by every variant
//! - [`StyleKind`] / [`StyleVariant`]: semantic kind and container variant
//! - [`Theme`]: a named collection owning its styles
//!
//! Every variant shares one color canonicalization; variants differ only in how
//! spacing is rendered and whether the apply-colors flag is honored.

mod attributes;
mod kind;
mod model;
mod theme;
mod writer;

pub use attributes::AttributeSet;
pub use kind::{
    ColorPolicy, HeadingLevel, MAX_HEADING_LEVEL, StyleKind, StyleVariant, VariantPolicy,
};
pub use model::Style;
pub use theme::Theme;
pub use writer::generate_styles_xml;

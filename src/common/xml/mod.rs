//! XML text helpers shared by the writers.

mod escape;

pub use escape::escape_xml;

//! Content parsing: line classification, list grouping and sections.

mod classifier;
mod grouper;
mod options;
mod rules;
mod sections;

pub use classifier::LineClassifier;
pub use grouper::{blocks, group};
pub use options::ParseOptions;
pub use rules::{rules, Line, Rule};
pub use sections::{split_sections, Section, SectionKind};

use crate::model::ParsedContent;

/// Classify text with default options.
pub fn parse(text: &str) -> ParsedContent {
    LineClassifier::new().parse(text)
}

//! Line classifier: body text to classified items and a heading outline.

use std::borrow::Cow;

use super::rules::{rules, Line};
use super::ParseOptions;
use crate::model::{ContentItem, ParsedContent};
use crate::render::{CleanupOptions, CleanupPipeline};

/// Classifies generated content one line at a time.
///
/// The pass is single, top to bottom, and never looks back at earlier
/// lines. Blank lines are dropped; every other line yields exactly one item.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    options: ParseOptions,
}

impl LineClassifier {
    /// Create a classifier with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Classify a single line. Blank lines classify as empty paragraphs.
    pub fn classify_line(&self, raw: &str) -> ContentItem {
        let line = Line::new(raw);
        rules()
            .iter()
            .find_map(|rule| rule.apply(&line, &self.options))
            .unwrap_or_else(|| ContentItem::paragraph(line.trimmed))
    }

    /// Classify a whole body of text.
    pub fn parse(&self, text: &str) -> ParsedContent {
        let text: Cow<'_, str> = if self.options.cleanup {
            Cow::Owned(CleanupPipeline::new(CleanupOptions::standard()).process(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut parsed = ParsedContent::new();
        for raw in text.lines() {
            let line = Line::new(raw);
            if line.is_blank() {
                continue;
            }

            let item = self.classify_line(raw);
            if let Some(level) = item.heading_level() {
                parsed.headings.push(item.content(), level);
            }
            parsed.items.push(item);
        }

        log::debug!(
            "classified {} items, {} headings",
            parsed.items.len(),
            parsed.headings.len()
        );
        parsed
    }
}

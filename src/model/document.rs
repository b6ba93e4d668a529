//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{ContentItem, GroupedNode, Heading, ItemKind, Outline};
use crate::generate::{ContentType, GenerationStatus};

/// A generated title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// Document title
    pub title: String,

    /// Markdown-like body text
    pub content: String,

    /// Kind of content
    pub content_type: ContentType,

    /// Whether the body came from a generator or a demo template
    pub status: GenerationStatus,
}

impl ContentDocument {
    /// Create a new document.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
        status: GenerationStatus,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_type,
            status,
        }
    }

    /// Check if the body is blank.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Approximate word count of the body.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Output of one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContent {
    /// One item per non-blank line, in order
    pub items: Vec<ContentItem>,

    /// Headings in document order
    pub headings: Outline,
}

impl ParsedContent {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count items of one kind.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|i| i.kind() == kind).count()
    }

    /// First level-1 heading, commonly the document title.
    pub fn title(&self) -> Option<&Heading> {
        self.headings.iter().find(|h| h.level == 1)
    }

    /// Group list runs for rendering.
    pub fn grouped(&self) -> Vec<GroupedNode> {
        crate::parser::group(&self.items)
    }
}

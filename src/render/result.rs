//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::{ContentItem, ParsedContent};
use crate::scripture::ScriptureRecognizer;

/// Result of rendering, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Statistics over the rendered items
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected over classified items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStats {
    /// Headings of any level
    pub heading_count: u32,

    /// Bullet, nested bullet and numbered items
    pub list_item_count: u32,

    /// Scripture lines, with or without verse text
    pub scripture_count: u32,

    /// Scripture references recognized anywhere in item text
    pub reference_count: u32,

    /// Prayer lines
    pub prayer_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over every item of a parsed document.
    pub fn from_parsed(parsed: &ParsedContent) -> Self {
        let mut stats = Self::new();
        for item in &parsed.items {
            stats.record(item);
        }
        stats
    }

    /// Count one item.
    pub fn record(&mut self, item: &ContentItem) {
        match item {
            ContentItem::Heading { .. }
            | ContentItem::Subheading { .. }
            | ContentItem::Subheading3 { .. } => self.heading_count += 1,
            ContentItem::List { .. }
            | ContentItem::ListNested { .. }
            | ContentItem::Numbered { .. } => self.list_item_count += 1,
            ContentItem::Scripture { .. } | ContentItem::ScriptureWithText { .. } => {
                self.scripture_count += 1
            }
            ContentItem::Prayer { .. } => self.prayer_count += 1,
            _ => {}
        }

        if let Some(label) = item.label() {
            self.count_text(label);
        }
        self.count_text(item.content());
        if let Some(verse) = item.verse_text() {
            self.count_text(verse);
        }
        self.reference_count += ScriptureRecognizer::new().find(item.content()).len() as u32;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.scripture_count += other.scripture_count;
        self.reference_count += other.reference_count;
        self.prayer_count += other.prayer_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_parsed() {
        let parsed = parse("# Hope\n- One\n1. Two\nJohn 3:16\nClosing Prayer\nSee Romans 8:28 too.");
        let stats = RenderStats::from_parsed(&parsed);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.scripture_count, 1);
        assert_eq!(stats.prayer_count, 1);
        assert_eq!(stats.reference_count, 2);
    }

    #[test]
    fn test_merge() {
        let mut a = RenderStats {
            heading_count: 2,
            ..Default::default()
        };
        let b = RenderStats {
            heading_count: 1,
            prayer_count: 3,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.heading_count, 3);
        assert_eq!(a.prayer_count, 3);
    }

    #[test]
    fn test_content_only() {
        let result = RenderResult::content_only("<p>x</p>".to_string());
        assert_eq!(result.content_len(), 8);
        assert_eq!(result.stats, RenderStats::default());
    }
}

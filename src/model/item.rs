//! Classified content items.

use serde::{Deserialize, Serialize};

/// One classified, non-blank line of generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ContentItem {
    /// `# ` heading
    Heading { content: String },

    /// `## ` heading
    Subheading { content: String },

    /// `### ` heading
    Subheading3 { content: String },

    /// Plain paragraph, stored trimmed and verbatim
    Paragraph { content: String },

    /// Top-level bullet item
    List { content: String },

    /// Indented bullet item
    ListNested {
        content: String,
        /// Count of leading whitespace characters on the raw line
        depth: usize,
    },

    /// `1. ` item with its prefix stripped
    Numbered { content: String, number: u32 },

    /// Line that opens with a scripture reference and carries no verse text
    Scripture { content: String },

    /// Scripture reference followed by separated verse text
    ScriptureWithText { content: String, verse_text: String },

    /// Short line about prayer
    Prayer { content: String },

    /// `**Label:** rest`
    BoldLabel { label: String, content: String },

    /// `- **Label:** rest`
    BoldBullet { label: String, content: String },

    /// `> ` blockquote
    Callout { content: String },
}

/// Discriminant of a [`ContentItem`], useful for counting and rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Heading,
    Subheading,
    Subheading3,
    Paragraph,
    List,
    ListNested,
    Numbered,
    Scripture,
    ScriptureWithText,
    Prayer,
    BoldLabel,
    BoldBullet,
    Callout,
}

impl ContentItem {
    /// Create a paragraph item.
    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentItem::Paragraph {
            content: content.into(),
        }
    }

    /// Create a top-level bullet item.
    pub fn bullet(content: impl Into<String>) -> Self {
        ContentItem::List {
            content: content.into(),
        }
    }

    /// Create a numbered item.
    pub fn numbered(number: u32, content: impl Into<String>) -> Self {
        ContentItem::Numbered {
            content: content.into(),
            number,
        }
    }

    /// Get the item kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            ContentItem::Heading { .. } => ItemKind::Heading,
            ContentItem::Subheading { .. } => ItemKind::Subheading,
            ContentItem::Subheading3 { .. } => ItemKind::Subheading3,
            ContentItem::Paragraph { .. } => ItemKind::Paragraph,
            ContentItem::List { .. } => ItemKind::List,
            ContentItem::ListNested { .. } => ItemKind::ListNested,
            ContentItem::Numbered { .. } => ItemKind::Numbered,
            ContentItem::Scripture { .. } => ItemKind::Scripture,
            ContentItem::ScriptureWithText { .. } => ItemKind::ScriptureWithText,
            ContentItem::Prayer { .. } => ItemKind::Prayer,
            ContentItem::BoldLabel { .. } => ItemKind::BoldLabel,
            ContentItem::BoldBullet { .. } => ItemKind::BoldBullet,
            ContentItem::Callout { .. } => ItemKind::Callout,
        }
    }

    /// Get the main text of the item.
    pub fn content(&self) -> &str {
        match self {
            ContentItem::Heading { content }
            | ContentItem::Subheading { content }
            | ContentItem::Subheading3 { content }
            | ContentItem::Paragraph { content }
            | ContentItem::List { content }
            | ContentItem::ListNested { content, .. }
            | ContentItem::Numbered { content, .. }
            | ContentItem::Scripture { content }
            | ContentItem::ScriptureWithText { content, .. }
            | ContentItem::Prayer { content }
            | ContentItem::BoldLabel { content, .. }
            | ContentItem::BoldBullet { content, .. }
            | ContentItem::Callout { content } => content,
        }
    }

    /// Get the label of bold-labeled items.
    pub fn label(&self) -> Option<&str> {
        match self {
            ContentItem::BoldLabel { label, .. } | ContentItem::BoldBullet { label, .. } => {
                Some(label)
            }
            _ => None,
        }
    }

    /// Get separately captured verse text, if any.
    pub fn verse_text(&self) -> Option<&str> {
        match self {
            ContentItem::ScriptureWithText { verse_text, .. } => Some(verse_text),
            _ => None,
        }
    }

    /// Heading level (1-3) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            ContentItem::Heading { .. } => Some(1),
            ContentItem::Subheading { .. } => Some(2),
            ContentItem::Subheading3 { .. } => Some(3),
            _ => None,
        }
    }

    /// Check if this is a plain or nested bullet item.
    pub fn is_bullet(&self) -> bool {
        matches!(
            self,
            ContentItem::List { .. } | ContentItem::ListNested { .. }
        )
    }

    /// Check if this is a numbered item.
    pub fn is_numbered(&self) -> bool {
        matches!(self, ContentItem::Numbered { .. })
    }

    /// Check if this is either scripture variant.
    pub fn is_scripture(&self) -> bool {
        matches!(
            self,
            ContentItem::Scripture { .. } | ContentItem::ScriptureWithText { .. }
        )
    }

    /// A paragraph made only of `---`, `***` or `___`.
    pub fn is_thematic_break(&self) -> bool {
        match self {
            ContentItem::Paragraph { content } => {
                let mut chars = content.chars().filter(|c| !c.is_whitespace());
                match chars.next() {
                    Some(first @ ('-' | '*' | '_')) => {
                        let rest: Vec<char> = chars.collect();
                        rest.len() >= 2 && rest.iter().all(|&c| c == first)
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

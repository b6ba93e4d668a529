//! Plain text rendering for parsed content.

use crate::error::Result;
use crate::model::{Block, ContentItem, ParsedContent};
use crate::parser::blocks;

use super::inline::strip_markup;
use super::{CleanupPipeline, RenderOptions};

/// Convert parsed content to plain text.
///
/// Blocks are separated by blank lines; list items stay on consecutive
/// lines. Emphasis markers are removed unless inline markup is disabled.
pub fn to_text(parsed: &ParsedContent, options: &RenderOptions) -> Result<String> {
    let plain = |text: &str| {
        if options.inline_markup {
            strip_markup(text)
        } else {
            text.to_string()
        }
    };

    let mut chunks: Vec<String> = Vec::new();
    for block in blocks(&parsed.grouped()) {
        let chunk = match &block {
            Block::Item(item) => item_text(item, &plain),
            Block::BulletList(items) | Block::NumberedList(items) => items
                .iter()
                .map(|item| item_text(item, &plain))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        chunks.push(chunk);
    }
    let mut output = chunks.join("\n\n");

    // Apply cleanup if configured
    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

fn item_text(item: &ContentItem, plain: &dyn Fn(&str) -> String) -> String {
    if item.is_thematic_break() {
        return "-".repeat(40);
    }

    match item {
        ContentItem::Heading { content } => {
            let text = plain(content);
            let underline = "=".repeat(text.chars().count());
            format!("{}\n{}", text, underline)
        }
        ContentItem::Subheading { content } => {
            let text = plain(content);
            let underline = "-".repeat(text.chars().count());
            format!("{}\n{}", text, underline)
        }
        ContentItem::List { content } => format!("• {}", plain(content)),
        ContentItem::ListNested { content, depth } => {
            let indent = " ".repeat((*depth).max(2));
            format!("{}◦ {}", indent, plain(content))
        }
        ContentItem::Numbered { content, number } => format!("{}. {}", number, plain(content)),
        ContentItem::ScriptureWithText {
            content,
            verse_text,
        } => format!("{}\n    \"{}\"", content, plain(verse_text)),
        ContentItem::BoldLabel { label, content } => format!("{}: {}", label, plain(content)),
        ContentItem::BoldBullet { label, content } => format!("• {}: {}", label, plain(content)),
        ContentItem::Callout { content } => format!("    {}", plain(content)),
        other => plain(other.content()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::render::CleanupOptions;

    #[test]
    fn test_to_text() {
        let parsed = parse("# Hope\nA **firm** anchor.\n- One\n  - Two\n1. Three");
        let text = to_text(&parsed, &RenderOptions::default()).unwrap();
        assert_eq!(
            text,
            "Hope\n====\n\nA firm anchor.\n\n• One\n  ◦ Two\n\n1. Three"
        );
    }

    #[test]
    fn test_scripture_and_labels() {
        let parsed = parse("John 3:16 - For God so loved the world\n**Time:** 9:30 AM");
        let text = to_text(&parsed, &RenderOptions::default()).unwrap();
        assert_eq!(
            text,
            "John 3:16\n    \"For God so loved the world\"\n\nTime: 9:30 AM"
        );
    }

    #[test]
    fn test_cleanup_applied() {
        let parsed = parse("Grace   abounds");
        let options = RenderOptions::default().with_cleanup(CleanupOptions::standard());
        assert_eq!(to_text(&parsed, &options).unwrap(), "Grace abounds");
    }
}

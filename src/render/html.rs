//! HTML fragment rendering for classified content.

use crate::error::Result;
use crate::model::{Block, ContentItem, Heading, Outline, ParsedContent};
use crate::parser::blocks;

use super::inline::{escape_html, render_inline};
use super::visitor::{NodeVisitor, VisitorAction};
use super::{RenderOptions, RenderResult, RenderStats};

/// Convert parsed content to an HTML fragment.
pub fn to_html(parsed: &ParsedContent, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(parsed)
}

/// Convert parsed content to an HTML fragment with statistics.
pub fn to_html_with_stats(parsed: &ParsedContent, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    HtmlRenderer::new(options).render_with_stats(parsed)
}

/// HTML renderer.
///
/// Headings shift down one level (`#` renders as `h2`) so the fragment can
/// sit under a page title.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
    visitor: Option<Box<dyn NodeVisitor>>,
    heading_ordinal: usize,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
            visitor: None,
            heading_ordinal: 0,
        }
    }

    /// Attach a visitor consulted before each item.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render to an HTML fragment.
    pub fn render(mut self, parsed: &ParsedContent) -> Result<String> {
        self.render_internal(parsed)
    }

    /// Render to an HTML fragment with statistics.
    pub fn render_with_stats(mut self, parsed: &ParsedContent) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(parsed)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, parsed: &ParsedContent) -> Result<String> {
        let mut output = String::new();

        if self.options.include_toc {
            output.push_str(&render_toc(
                &parsed.headings,
                self.options.toc_depth,
                self.options.heading_anchors,
            ));
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_start();
        }

        for block in blocks(&parsed.grouped()) {
            self.render_block(&mut output, &block);
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_document_end();
        }

        Ok(output.trim_end().to_string())
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Item(item) => self.render_item(output, item),
            Block::BulletList(items) => {
                output.push_str("<ul>\n");
                for item in items {
                    self.render_list_item(output, item, false);
                }
                output.push_str("</ul>\n");
            }
            Block::NumberedList(items) => {
                match items.first() {
                    Some(ContentItem::Numbered { number, .. }) if *number != 1 => {
                        output.push_str(&format!("<ol start=\"{}\">\n", number));
                    }
                    _ => output.push_str("<ol>\n"),
                }
                for item in items {
                    self.render_list_item(output, item, true);
                }
                output.push_str("</ol>\n");
            }
        }
    }

    fn render_list_item(&mut self, output: &mut String, item: &ContentItem, ordered: bool) {
        let action = match self.visitor.as_mut() {
            Some(visitor) => visitor.visit_list_item(item, ordered),
            None => VisitorAction::Continue,
        };
        if self.apply(output, item, action) {
            return;
        }

        let text = self.inline(item.content());
        match item {
            ContentItem::ListNested { depth, .. } => {
                output.push_str(&format!(
                    "<li class=\"nested\" data-depth=\"{}\">{}</li>\n",
                    depth, text
                ));
            }
            _ => output.push_str(&format!("<li>{}</li>\n", text)),
        }
    }

    fn render_item(&mut self, output: &mut String, item: &ContentItem) {
        if let Some(level) = item.heading_level() {
            self.heading_ordinal += 1;
            let heading = Heading::new(self.heading_ordinal, item.content(), level);
            let action = match self.visitor.as_mut() {
                Some(visitor) => visitor.visit_heading(&heading),
                None => VisitorAction::Continue,
            };
            if !self.apply(output, item, action) {
                self.render_heading(output, &heading);
            }
            return;
        }

        let action = match self.visitor.as_mut() {
            Some(visitor) if item.is_thematic_break() => visitor.visit_thematic_break(),
            Some(visitor) if item.is_scripture() => visitor.visit_scripture(item),
            Some(visitor) => visitor.visit_item(item),
            None => VisitorAction::Continue,
        };
        if self.apply(output, item, action) {
            return;
        }

        if item.is_thematic_break() {
            output.push_str("<hr>\n");
            return;
        }

        let html = match item {
            ContentItem::Scripture { content } => format!(
                "<blockquote class=\"scripture\"><p>{}</p></blockquote>\n",
                self.inline(content)
            ),
            ContentItem::ScriptureWithText {
                content,
                verse_text,
            } => scripture_block(content, verse_text),
            ContentItem::Prayer { content } => {
                format!("<p class=\"prayer\">{}</p>\n", self.inline(content))
            }
            ContentItem::BoldLabel { label, content } => format!(
                "<p class=\"bold-label\"><strong>{}:</strong> {}</p>\n",
                escape_html(label),
                self.inline(content)
            ),
            ContentItem::BoldBullet { label, content } => format!(
                "<p class=\"bold-bullet\"><strong>{}:</strong> {}</p>\n",
                escape_html(label),
                self.inline(content)
            ),
            ContentItem::Callout { content } => format!(
                "<blockquote class=\"callout\"><p>{}</p></blockquote>\n",
                self.inline(content)
            ),
            other => format!("<p>{}</p>\n", self.inline(other.content())),
        };
        output.push_str(&html);
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        let tag = heading_tag(heading.level);
        let text = self.inline(&heading.text);
        if self.options.heading_anchors {
            output.push_str(&format!(
                "<{tag} id=\"{}\">{}</{tag}>\n",
                heading.id,
                text,
                tag = tag
            ));
        } else {
            output.push_str(&format!("<{tag}>{}</{tag}>\n", text, tag = tag));
        }
    }

    /// Apply a visitor action. Returns true when the item was handled.
    fn apply(&mut self, output: &mut String, item: &ContentItem, action: VisitorAction) -> bool {
        if !action.should_skip() && self.options.collect_stats {
            self.stats.record(item);
        }
        match action {
            VisitorAction::Continue => false,
            VisitorAction::Skip => true,
            VisitorAction::Replace(html) => {
                output.push_str(&html);
                if !html.ends_with('\n') {
                    output.push('\n');
                }
                true
            }
        }
    }

    fn inline(&self, text: &str) -> String {
        render_inline(
            text,
            self.options.inline_markup,
            self.options.link_references,
        )
    }
}

/// Heading tag for an outline level: 1 → `h2`, 2 → `h3`, 3 → `h4`.
pub fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h2",
        2 => "h3",
        _ => "h4",
    }
}

/// A scripture blockquote with a cited reference and verse text.
pub fn scripture_block(reference: &str, text: &str) -> String {
    format!(
        "<blockquote class=\"scripture\"><cite>{}</cite><p>{}</p></blockquote>\n",
        escape_html(reference),
        escape_html(text)
    )
}

/// Render a table of contents for headings up to `depth`.
///
/// Returns an empty string when no heading qualifies.
pub fn render_toc(outline: &Outline, depth: u8, anchors: bool) -> String {
    let headings = outline.to_depth(depth);
    if headings.is_empty() {
        return String::new();
    }

    let mut toc = String::from("<nav class=\"toc\">\n<p class=\"toc-title\">Table of Contents</p>\n<ul>\n");
    for heading in headings {
        let text = escape_html(&super::inline::strip_markup(&heading.text));
        if anchors {
            toc.push_str(&format!(
                "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
                heading.level, heading.id, text
            ));
        } else {
            toc.push_str(&format!(
                "<li class=\"toc-level-{}\">{}</li>\n",
                heading.level, text
            ));
        }
    }
    toc.push_str("</ul>\n</nav>\n");
    toc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn html(text: &str) -> String {
        to_html(&parse(text), &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_heading_levels_and_anchors() {
        let out = html("# Title\n## Part\n### Point");
        assert_eq!(
            out,
            "<h2 id=\"h1\">Title</h2>\n<h3 id=\"h2\">Part</h3>\n<h4 id=\"h3\">Point</h4>"
        );
    }

    #[test]
    fn test_lists_are_wrapped() {
        let out = html("- a\n  - b\n1. one\n2. two");
        assert_eq!(
            out,
            "<ul>\n<li>a</li>\n<li class=\"nested\" data-depth=\"2\">b</li>\n</ul>\n<ol>\n<li>one</li>\n<li>two</li>\n</ol>"
        );
    }

    #[test]
    fn test_numbered_list_start() {
        assert!(html("3. three\n4. four").starts_with("<ol start=\"3\">"));
        assert!(html("99999999999. big").starts_with("<ol>\n"));
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(html("Intro\n---\nMore"), "<p>Intro</p>\n<hr>\n<p>More</p>");
    }

    #[test]
    fn test_scripture_blocks() {
        let out = html("John 3:16 - For God so loved the world");
        assert_eq!(
            out,
            "<blockquote class=\"scripture\"><cite>John 3:16</cite><p>For God so loved the world</p></blockquote>"
        );
        assert!(html("Psalm 23:1").starts_with("<blockquote class=\"scripture\"><p><span"));
    }

    #[test]
    fn test_labels_and_prayer() {
        assert_eq!(
            html("**Speaker:** Pastor Lee"),
            "<p class=\"bold-label\"><strong>Speaker:</strong> Pastor Lee</p>"
        );
        assert_eq!(html("Closing Prayer"), "<p class=\"prayer\">Closing Prayer</p>");
    }

    #[test]
    fn test_escapes_text() {
        assert_eq!(html("Tom & <Jerry>"), "<p>Tom &amp; &lt;Jerry&gt;</p>");
    }

    #[test]
    fn test_toc() {
        let options = RenderOptions::default().with_toc(true).with_toc_depth(2);
        let out = to_html(&parse("# Title\n## Part\n### Point"), &options).unwrap();
        assert!(out.starts_with("<nav class=\"toc\">"));
        assert!(out.contains("<a href=\"#h2\">Part</a>"));
        assert!(!out.contains("href=\"#h3\""));
    }

    #[test]
    fn test_stats_collected() {
        let result = to_html_with_stats(&parse("# A\n- b\nClosing Prayer"), &RenderOptions::default())
            .unwrap();
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.list_item_count, 1);
        assert_eq!(result.stats.prayer_count, 1);
    }
}

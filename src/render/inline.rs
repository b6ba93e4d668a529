//! Inline markup: escaping, emphasis and scripture reference spans.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scripture::{ScriptureRecognizer, Segment};

static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Translate emphasis in already-escaped text.
///
/// `***x***` binds before `**x**`, which binds before `*x*`.
pub fn emphasize(escaped: &str) -> String {
    let text = BOLD_ITALIC.replace_all(escaped, "<strong><em>$1</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}

/// Remove emphasis markers, keeping the emphasized text.
pub fn strip_markup(text: &str) -> String {
    let text = BOLD_ITALIC.replace_all(text, "$1");
    let text = BOLD.replace_all(&text, "$1");
    ITALIC.replace_all(&text, "$1").into_owned()
}

/// Wrap recognized references in `scripture-ref` spans.
///
/// Works on escaped HTML: generated tags are lowercase and never look like
/// a reference.
pub fn link_references(html: &str) -> String {
    let recognizer = ScriptureRecognizer::new();
    let mut out = String::with_capacity(html.len());
    for segment in recognizer.segments(html) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Reference(reference) => {
                out.push_str(&reference_span(reference));
            }
        }
    }
    out
}

/// A `scripture-ref` span for one reference.
pub fn reference_span(reference: &str) -> String {
    format!(
        "<span class=\"scripture-ref\" data-ref=\"{}\">{}</span>",
        reference, reference
    )
}

/// Render one line of item text to inline HTML.
pub fn render_inline(text: &str, markup: bool, references: bool) -> String {
    let mut html = escape_html(text);
    if markup {
        html = emphasize(&html);
    }
    if references {
        html = link_references(&html);
    }
    html
}

//! Print-ready standalone HTML export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ContentDocument;
use crate::parser::LineClassifier;

use super::html::{render_toc, HtmlRenderer};
use super::inline::escape_html;
use super::PrintOptions;

/// Visual theme of an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Modern,
    Minimal,
}

/// Style tokens a theme resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Title and section heading color
    pub primary: &'static str,
    /// Rules under the header and the contents title
    pub accent: &'static str,
    /// Scripture text color
    pub scripture: &'static str,
    /// Scripture and contents background
    pub paper: &'static str,
    /// Body text color
    pub text: &'static str,
    /// Emphasis and minor heading color
    pub strong: &'static str,
    /// Subtitle and footer color
    pub muted: &'static str,
    /// Thin separator color
    pub rule: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

static THEMES: [(Theme, ThemeTokens); 3] = [
    (
        Theme::Classic,
        ThemeTokens {
            primary: "#2D5016",
            accent: "#D4A84B",
            scripture: "#8B4513",
            paper: "#FDF8F0",
            text: "#2C2C2C",
            strong: "#1E3A0F",
            muted: "#666666",
            rule: "#E5E0D8",
            heading_font: "Georgia, 'Times New Roman', serif",
            body_font: "Georgia, 'Times New Roman', serif",
        },
    ),
    (
        Theme::Modern,
        ThemeTokens {
            primary: "#1F3A5F",
            accent: "#3D7EAA",
            scripture: "#5B4B8A",
            paper: "#F4F7FB",
            text: "#1E1E1E",
            strong: "#0F2740",
            muted: "#6B7280",
            rule: "#E2E8F0",
            heading_font: "'Helvetica Neue', Arial, sans-serif",
            body_font: "'Helvetica Neue', Arial, sans-serif",
        },
    ),
    (
        Theme::Minimal,
        ThemeTokens {
            primary: "#111111",
            accent: "#999999",
            scripture: "#333333",
            paper: "#FFFFFF",
            text: "#222222",
            strong: "#000000",
            muted: "#777777",
            rule: "#DDDDDD",
            heading_font: "Helvetica, Arial, sans-serif",
            body_font: "Helvetica, Arial, sans-serif",
        },
    ),
];

impl Theme {
    /// All themes.
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Modern, Theme::Minimal];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
        }
    }

    /// Style tokens for this theme.
    pub fn tokens(&self) -> &'static ThemeTokens {
        THEMES
            .iter()
            .find(|(theme, _)| theme == self)
            .map(|(_, tokens)| tokens)
            .unwrap_or(&THEMES[0].1)
    }

    /// Parse a theme name, falling back to classic.
    pub fn from_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown theme {:?}, using classic", name);
            Theme::Classic
        })
    }

    /// CSS for a standalone document in this theme.
    pub fn stylesheet(&self) -> String {
        let t = self.tokens();
        format!(
            r#"@page {{ size: A4; margin: 18mm; }}
body {{ font-family: {body_font}; color: {text}; background: #FFFFFF; line-height: 1.6; max-width: 48rem; margin: 0 auto; padding: 2rem; }}
.doc-header {{ border-bottom: 2px solid {accent}; padding-bottom: 1.25rem; margin-bottom: 2rem; }}
.doc-header h1 {{ font-family: {heading_font}; color: {primary}; font-size: 2rem; margin: 0 0 0.25rem; }}
.doc-header .subtitle {{ color: {muted}; font-size: 0.85rem; margin: 0; }}
.toc {{ background: {paper}; padding: 1rem 1.25rem; border-radius: 4px; margin-bottom: 2rem; }}
.toc-title {{ font-family: {heading_font}; font-weight: bold; color: {primary}; border-bottom: 1px solid {accent}; padding-bottom: 0.3rem; margin: 0 0 0.6rem; }}
.toc ul {{ list-style: none; margin: 0; padding: 0; }}
.toc li {{ font-size: 0.9rem; margin-bottom: 0.2rem; }}
.toc .toc-level-1 {{ font-weight: bold; color: {strong}; }}
.toc .toc-level-2, .toc .toc-level-3 {{ padding-left: 1rem; }}
.toc a {{ color: inherit; text-decoration: none; }}
h2 {{ font-family: {heading_font}; color: {primary}; font-size: 1.4rem; border-bottom: 1px solid {rule}; padding-bottom: 0.3rem; }}
h3, h4 {{ font-family: {heading_font}; color: {strong}; }}
h2, h3, h4 {{ page-break-after: avoid; }}
strong {{ color: {strong}; }}
em {{ color: {scripture}; }}
blockquote.scripture {{ font-style: italic; color: {scripture}; background: {paper}; border-left: 3px solid {accent}; margin: 1rem 0; padding: 0.5rem 1rem; page-break-inside: avoid; }}
blockquote.scripture cite {{ display: block; font-style: normal; font-weight: bold; }}
blockquote.callout {{ border-left: 3px solid {rule}; color: {muted}; margin: 1rem 0; padding: 0.25rem 1rem; }}
.scripture-ref {{ color: {scripture}; font-weight: 600; }}
.prayer {{ font-style: italic; color: {strong}; }}
hr {{ border: none; border-top: 1px solid {rule}; margin: 1.5rem 0; }}
footer {{ margin-top: 3rem; border-top: 1px solid {rule}; padding-top: 0.6rem; text-align: center; font-size: 0.75rem; color: {muted}; }}
@media print {{ body {{ padding: 0; }} a {{ color: inherit; }} }}
"#,
            body_font = t.body_font,
            heading_font = t.heading_font,
            text = t.text,
            accent = t.accent,
            primary = t.primary,
            muted = t.muted,
            paper = t.paper,
            strong = t.strong,
            rule = t.rule,
            scripture = t.scripture,
        )
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidRequest(format!("unknown theme: {}", s)))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a document as a standalone, print-ready HTML page.
pub fn to_print_html(doc: &ContentDocument, options: &PrintOptions) -> Result<String> {
    let parsed = LineClassifier::new().parse(&doc.content);

    let mut body_options = options.body.clone();
    body_options.include_toc = false;
    body_options.heading_anchors = true;
    let body = HtmlRenderer::new(body_options).render(&parsed)?;

    let date = options
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let title = escape_html(&doc.title);

    let mut html = String::with_capacity(body.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!("<style>\n{}</style>\n", options.theme.stylesheet()));
    html.push_str("</head>\n");
    html.push_str(&format!("<body class=\"theme-{}\">\n", options.theme));
    html.push_str(&format!(
        "<header class=\"doc-header\">\n<h1>{}</h1>\n<p class=\"subtitle\">{} • {}</p>\n</header>\n",
        title,
        doc.content_type.label(),
        date.format("%B %-d, %Y")
    ));
    if options.include_toc {
        html.push_str(&render_toc(&parsed.headings, options.toc_depth, true));
    }
    html.push_str("<main>\n");
    html.push_str(&body);
    html.push_str("\n</main>\n");
    html.push_str(&format!("<footer>{}</footer>\n", escape_html(&options.footer)));
    html.push_str("</body>\n</html>\n");

    log::debug!(
        "exported {:?} ({} items, {} theme)",
        doc.title,
        parsed.len(),
        options.theme
    );
    Ok(html)
}

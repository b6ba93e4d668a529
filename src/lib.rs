//! # pulpit
//!
//! Church content generation and formatting library for Rust.
//!
//! This library generates sermons, Bible studies, devotionals and other
//! church content through an OpenAI-compatible chat API (or a built-in demo
//! fallback), classifies the generated text line by line, recognizes
//! scripture references, and renders the result as HTML, plain text, JSON
//! or a print-ready document.
//!
//! ## Quick Start
//!
//! ```
//! use pulpit::{parse, render};
//!
//! fn main() -> pulpit::Result<()> {
//!     // Classify generated content
//!     let parsed = parse("# Hope\n## Anchor\n- Romans 15:13\nClosing Prayer");
//!
//!     // Convert to HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&parsed, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Generation**: six content types, topic suggestions and refinement
//! - **Classification**: headings, lists, scripture lines, prayers and labels
//! - **Scripture**: reference recognition and KJV verse lookup
//! - **Output formats**: HTML, plain text, JSON and themed print HTML
//! - **Local state**: history, favorites, recent verses, templates and drafts
//! - **HTTP API**: request routing for the bundled server

pub mod api;
pub mod bible;
pub mod error;
pub mod generate;
pub mod model;
pub mod parser;
pub mod render;
pub mod scripture;
pub mod store;

// Re-export commonly used types
pub use api::{Api, ApiRequest, ApiResponse};
pub use bible::{BibleService, Passage, Verse, VerseProvider};
pub use error::{Error, Result};
pub use generate::{
    ContentType, GenerationRequest, GenerationResponse, GenerationStatus, Generator,
    GeneratorConfig, RefineRequest,
};
pub use model::{
    Block, ContentDocument, ContentItem, GroupedNode, Heading, ItemKind, Outline, ParsedContent,
};
pub use parser::{LineClassifier, ParseOptions};
pub use render::{
    CleanupOptions, CleanupPreset, JsonFormat, PrintOptions, RenderOptions, RenderResult,
    RenderStats, Theme,
};
pub use scripture::{ReferenceMatch, ScriptureRecognizer, ScriptureReference};
pub use store::LocalState;

/// Classify content with default options.
///
/// # Example
///
/// ```
/// let parsed = pulpit::parse("# Grace\n- Ephesians 2:8");
/// assert_eq!(parsed.headings.len(), 1);
/// ```
pub fn parse(text: &str) -> ParsedContent {
    parser::parse(text)
}

/// Classify content and render it as an HTML fragment.
///
/// # Example
///
/// ```
/// use pulpit::render::RenderOptions;
///
/// let html = pulpit::to_html("# Grace", &RenderOptions::default()).unwrap();
/// assert_eq!(html, "<h2 id=\"h1\">Grace</h2>");
/// ```
pub fn to_html(text: &str, options: &render::RenderOptions) -> Result<String> {
    render::to_html(&parse(text), options)
}

/// Classify content and render it as plain text.
///
/// # Example
///
/// ```
/// use pulpit::render::RenderOptions;
///
/// let text = pulpit::to_text("**Speaker:** Pastor Lee", &RenderOptions::default()).unwrap();
/// assert_eq!(text, "Speaker: Pastor Lee");
/// ```
pub fn to_text(text: &str, options: &render::RenderOptions) -> Result<String> {
    render::to_text(&parse(text), options)
}

/// Classify content and serialize the classification as JSON.
pub fn to_json(text: &str, format: render::JsonFormat) -> Result<String> {
    render::to_json(&parse(text), format)
}

/// Render a document as a standalone, print-ready HTML page.
pub fn to_print_html(doc: &ContentDocument, options: &render::PrintOptions) -> Result<String> {
    render::to_print_html(doc, options)
}

/// Find the scripture references in free text.
///
/// # Example
///
/// ```
/// let found = pulpit::find_references("Read John 3:16 and Romans 8:28-30.");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].text, "Romans 8:28-30");
/// ```
pub fn find_references(text: &str) -> Vec<ReferenceMatch> {
    scripture::find_references(text)
}

/// Builder for classifying and rendering content with custom options.
///
/// # Example
///
/// ```
/// use pulpit::{Pulpit, CleanupPreset};
///
/// let result = Pulpit::new()
///     .with_toc()
///     .with_cleanup(CleanupPreset::Standard)
///     .parse("# Hope\n## Anchor\nRomans 15:13");
///
/// let html = result.to_html().unwrap();
/// assert!(html.starts_with("<nav class=\"toc\">"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pulpit {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Pulpit {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any capitalized word as a book name in scripture lines.
    pub fn lenient_books(mut self) -> Self {
        self.parse_options = self.parse_options.lenient_books();
        self
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Include a table of contents in HTML output.
    pub fn with_toc(mut self) -> Self {
        self.render_options = self.render_options.with_toc(true);
        self
    }

    /// Clean the text before classifying and after rendering plain text.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup(true);
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Render inline markup as literal text.
    pub fn without_markup(mut self) -> Self {
        self.render_options = self.render_options.with_inline_markup(false);
        self
    }

    /// Classify content.
    pub fn parse(&self, text: &str) -> PulpitResult {
        let parsed = LineClassifier::with_options(self.parse_options.clone()).parse(text);
        PulpitResult {
            parsed,
            render_options: self.render_options.clone(),
        }
    }
}

/// Result of classifying content.
#[derive(Debug, Clone)]
pub struct PulpitResult {
    /// The classified content
    pub parsed: ParsedContent,
    /// Render options to use
    render_options: RenderOptions,
}

impl PulpitResult {
    /// Convert to an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.parsed, &self.render_options)
    }

    /// Convert to an HTML fragment with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.parsed, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.parsed, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.parsed, format)
    }

    /// Statistics over every classified item.
    pub fn stats(&self) -> RenderStats {
        RenderStats::from_parsed(&self.parsed)
    }

    /// Get the classified content.
    pub fn parsed(&self) -> &ParsedContent {
        &self.parsed
    }
}

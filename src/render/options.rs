//! Rendering options.

use chrono::NaiveDate;

use super::print::Theme;
use super::{CleanupOptions, CleanupPreset};

/// Footer line printed at the bottom of exported documents.
pub const DEFAULT_FOOTER: &str = "Generated by SDA Content Generator • For church use";

/// Options for screen and text rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit a table of contents before the body
    pub include_toc: bool,

    /// Deepest heading level listed in the table of contents (1-3)
    pub toc_depth: u8,

    /// Give headings `id` anchors (`h1`, `h2`, ...)
    pub heading_anchors: bool,

    /// Wrap recognized scripture references in `scripture-ref` spans
    pub link_references: bool,

    /// Translate `***`, `**` and `*` emphasis (stripped in plain text)
    pub inline_markup: bool,

    /// Collect statistics while rendering
    pub collect_stats: bool,

    /// Cleanup applied to plain-text output
    pub cleanup: Option<CleanupOptions>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_toc: false,
            toc_depth: 3,
            heading_anchors: true,
            link_references: true,
            inline_markup: true,
            collect_stats: false,
            cleanup: None,
        }
    }
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the table of contents depth.
    pub fn with_toc_depth(mut self, depth: u8) -> Self {
        self.toc_depth = depth.clamp(1, 3);
        self
    }

    /// Enable or disable heading anchors.
    pub fn with_heading_anchors(mut self, anchors: bool) -> Self {
        self.heading_anchors = anchors;
        self
    }

    /// Enable or disable scripture reference spans.
    pub fn with_reference_links(mut self, link: bool) -> Self {
        self.link_references = link;
        self
    }

    /// Enable or disable emphasis markup.
    pub fn with_inline_markup(mut self, markup: bool) -> Self {
        self.inline_markup = markup;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set cleanup options for plain-text output.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup from a preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

/// Options for the print-ready export.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Style tokens for the document
    pub theme: Theme,

    /// Emit a table of contents after the header
    pub include_toc: bool,

    /// Deepest heading level listed in the table of contents (1-3)
    pub toc_depth: u8,

    /// Date printed in the header; today when None
    pub date: Option<NaiveDate>,

    /// Footer line
    pub footer: String,

    /// Body rendering options
    pub body: RenderOptions,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            include_toc: true,
            toc_depth: 3,
            date: None,
            footer: DEFAULT_FOOTER.to_string(),
            body: RenderOptions::default(),
        }
    }
}

impl PrintOptions {
    /// Create new print options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the table of contents depth.
    pub fn with_toc_depth(mut self, depth: u8) -> Self {
        self.toc_depth = depth.clamp(1, 3);
        self
    }

    /// Fix the header date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the footer line.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

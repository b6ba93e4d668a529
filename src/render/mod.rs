//! Rendering module for converting parsed content to output formats.

mod cleanup;
mod html;
pub mod inline;
mod json;
mod options;
mod print;
mod result;
mod text;
pub mod visitor;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use html::{heading_tag, render_toc, scripture_block, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat, ParsedView};
pub use options::{PrintOptions, RenderOptions, DEFAULT_FOOTER};
pub use print::{to_print_html, Theme, ThemeTokens};
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
pub use visitor::{CompositeVisitor, DefaultVisitor, InlineVersesVisitor, NodeVisitor, VisitorAction};

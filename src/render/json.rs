//! JSON rendering for parsed content.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ContentItem, GroupedNode, Outline, ParsedContent};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Wire view of a parse: flat items, the heading outline and the grouped
/// render sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedView<'a> {
    pub items: &'a [ContentItem],
    pub headings: &'a Outline,
    pub nodes: Vec<GroupedNode>,
}

impl<'a> ParsedView<'a> {
    /// Build the view, grouping list runs.
    pub fn new(parsed: &'a ParsedContent) -> Self {
        Self {
            items: &parsed.items,
            headings: &parsed.headings,
            nodes: parsed.grouped(),
        }
    }
}

/// Convert parsed content to JSON.
pub fn to_json(parsed: &ParsedContent, format: JsonFormat) -> Result<String> {
    let view = ParsedView::new(parsed);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&view),
        JsonFormat::Compact => serde_json::to_string(&view),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&parse("# Hope\n- One"), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"headings\""));
        assert!(json.contains("\"bulletGroupStart\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&parse("Hello"), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["items"][0]["type"], "paragraph");
        assert_eq!(value["nodes"][0]["node"], "item");
        assert_eq!(value["nodes"][0]["content"], "Hello");
    }
}

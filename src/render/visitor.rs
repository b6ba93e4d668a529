//! Visitor pattern for customizing HTML rendering.
//!
//! The visitor pattern allows callers to replace or drop individual items
//! without modifying the core rendering logic. Replacements are raw HTML.
//!
//! # Example
//!
//! ```
//! use pulpit::render::visitor::{NodeVisitor, VisitorAction};
//! use pulpit::model::ContentItem;
//!
//! struct HidePrayers;
//!
//! impl NodeVisitor for HidePrayers {
//!     fn visit_item(&mut self, item: &ContentItem) -> VisitorAction {
//!         match item {
//!             ContentItem::Prayer { .. } => VisitorAction::Skip,
//!             _ => VisitorAction::Continue,
//!         }
//!     }
//! }
//! ```

use crate::bible::BibleService;
use crate::model::{ContentItem, Heading};
use crate::scripture::ScriptureRecognizer;

use super::html::scripture_block;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom HTML.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting items during HTML rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait NodeVisitor: Send + Sync {
    /// Called before rendering a heading of any level.
    fn visit_heading(&mut self, heading: &Heading) -> VisitorAction {
        let _ = heading;
        VisitorAction::Continue
    }

    /// Called before rendering a bullet or numbered list item.
    fn visit_list_item(&mut self, item: &ContentItem, ordered: bool) -> VisitorAction {
        let _ = (item, ordered);
        VisitorAction::Continue
    }

    /// Called before rendering a scripture line.
    fn visit_scripture(&mut self, item: &ContentItem) -> VisitorAction {
        let _ = item;
        VisitorAction::Continue
    }

    /// Called before rendering a thematic break.
    fn visit_thematic_break(&mut self) -> VisitorAction {
        VisitorAction::Continue
    }

    /// Called before rendering any other item (paragraphs, prayers, labels,
    /// callouts).
    fn visit_item(&mut self, item: &ContentItem) -> VisitorAction {
        let _ = item;
        VisitorAction::Continue
    }

    /// Called once before the first item.
    fn on_document_start(&mut self) {}

    /// Called once after the last item.
    fn on_document_end(&mut self) {}
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl NodeVisitor for DefaultVisitor {}

/// Fills scripture lines that carry no verse text with the verse itself.
///
/// Lines whose reference cannot be resolved render unchanged.
#[derive(Debug, Clone)]
pub struct InlineVersesVisitor {
    service: BibleService,
    recognizer: ScriptureRecognizer,
    resolved: usize,
}

impl InlineVersesVisitor {
    /// Create a visitor backed by a verse service.
    pub fn new(service: BibleService) -> Self {
        Self {
            service,
            recognizer: ScriptureRecognizer::new(),
            resolved: 0,
        }
    }

    /// Number of scripture lines filled so far.
    pub fn resolved(&self) -> usize {
        self.resolved
    }
}

impl NodeVisitor for InlineVersesVisitor {
    fn visit_scripture(&mut self, item: &ContentItem) -> VisitorAction {
        let ContentItem::Scripture { content } = item else {
            return VisitorAction::Continue;
        };

        let Some(reference) = self
            .recognizer
            .find(content)
            .into_iter()
            .find(|m| m.start == 0)
            .and_then(|m| m.reference())
        else {
            return VisitorAction::Continue;
        };

        let resolved = if reference.is_range() {
            self.service
                .passage(&reference)
                .ok()
                .filter(|p| !p.verses.is_empty())
                .map(|p| (p.reference, p.text))
        } else {
            self.service
                .lookup(&reference)
                .ok()
                .map(|v| (v.reference, v.text))
        };

        match resolved {
            Some((reference, text)) => {
                self.resolved += 1;
                VisitorAction::Replace(scripture_block(&reference, &text))
            }
            None => {
                log::debug!("no verse text for {}", reference);
                VisitorAction::Continue
            }
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn NodeVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for CompositeVisitor {
    fn visit_heading(&mut self, heading: &Heading) -> VisitorAction {
        self.first_action(|v| v.visit_heading(heading))
    }

    fn visit_list_item(&mut self, item: &ContentItem, ordered: bool) -> VisitorAction {
        self.first_action(|v| v.visit_list_item(item, ordered))
    }

    fn visit_scripture(&mut self, item: &ContentItem) -> VisitorAction {
        self.first_action(|v| v.visit_scripture(item))
    }

    fn visit_thematic_break(&mut self) -> VisitorAction {
        self.first_action(|v| v.visit_thematic_break())
    }

    fn visit_item(&mut self, item: &ContentItem) -> VisitorAction {
        self.first_action(|v| v.visit_item(item))
    }

    fn on_document_start(&mut self) {
        for visitor in &mut self.visitors {
            visitor.on_document_start();
        }
    }

    fn on_document_end(&mut self) {
        for visitor in &mut self.visitors {
            visitor.on_document_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SkipBreaks;

    impl NodeVisitor for SkipBreaks {
        fn visit_thematic_break(&mut self) -> VisitorAction {
            VisitorAction::Skip
        }
    }

    #[test]
    fn test_visitor_action_default() {
        assert_eq!(VisitorAction::default(), VisitorAction::Continue);
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.should_skip());
        assert_eq!(
            VisitorAction::Replace("<hr>".into()).replacement(),
            Some("<hr>")
        );
    }

    #[test]
    fn test_composite_first_non_continue_wins() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(DefaultVisitor)
            .with_visitor(SkipBreaks);
        assert_eq!(composite.len(), 2);
        assert!(composite.visit_thematic_break().should_skip());
        let item = ContentItem::paragraph("Welcome");
        assert_eq!(composite.visit_item(&item), VisitorAction::Continue);
    }

    #[test]
    fn test_inline_verses_fills_known_verse() {
        let mut visitor = InlineVersesVisitor::new(BibleService::offline());
        let item = ContentItem::Scripture {
            content: "John 3:16".to_string(),
        };
        let action = visitor.visit_scripture(&item);
        let html = action.replacement().unwrap();
        assert!(html.contains("<cite>John 3:16</cite>"));
        assert!(html.contains("For God so loved the world"));
        assert_eq!(visitor.resolved(), 1);
    }

    #[test]
    fn test_inline_verses_leaves_unknown_verse() {
        let mut visitor = InlineVersesVisitor::new(BibleService::offline());
        let item = ContentItem::Scripture {
            content: "John 3:99".to_string(),
        };
        assert_eq!(visitor.visit_scripture(&item), VisitorAction::Continue);
        assert_eq!(visitor.resolved(), 0);
    }
}

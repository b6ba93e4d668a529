//! Integration tests for the visitor pattern.

use std::sync::{Arc, Mutex};

use pulpit::model::{ContentItem, Heading};
use pulpit::render::visitor::{
    CompositeVisitor, DefaultVisitor, InlineVersesVisitor, NodeVisitor, VisitorAction,
};
use pulpit::render::{HtmlRenderer, RenderOptions};
use pulpit::BibleService;

/// Custom visitor that tracks visit counts.
struct CountingVisitor {
    heading_count: usize,
    list_item_count: usize,
    scripture_count: usize,
    break_count: usize,
    item_count: usize,
}

impl CountingVisitor {
    fn new() -> Self {
        Self {
            heading_count: 0,
            list_item_count: 0,
            scripture_count: 0,
            break_count: 0,
            item_count: 0,
        }
    }
}

impl NodeVisitor for CountingVisitor {
    fn visit_heading(&mut self, _heading: &Heading) -> VisitorAction {
        self.heading_count += 1;
        VisitorAction::Continue
    }

    fn visit_list_item(&mut self, _item: &ContentItem, _ordered: bool) -> VisitorAction {
        self.list_item_count += 1;
        VisitorAction::Continue
    }

    fn visit_scripture(&mut self, _item: &ContentItem) -> VisitorAction {
        self.scripture_count += 1;
        VisitorAction::Continue
    }

    fn visit_thematic_break(&mut self) -> VisitorAction {
        self.break_count += 1;
        VisitorAction::Continue
    }

    fn visit_item(&mut self, _item: &ContentItem) -> VisitorAction {
        self.item_count += 1;
        VisitorAction::Continue
    }
}

/// Drops prayer lines.
struct SkipPrayersVisitor;

impl NodeVisitor for SkipPrayersVisitor {
    fn visit_item(&mut self, item: &ContentItem) -> VisitorAction {
        match item {
            ContentItem::Prayer { .. } => VisitorAction::Skip,
            _ => VisitorAction::Continue,
        }
    }
}

/// Replaces top-level headings with a banner.
struct BannerVisitor;

impl NodeVisitor for BannerVisitor {
    fn visit_heading(&mut self, heading: &Heading) -> VisitorAction {
        if heading.level == 1 {
            VisitorAction::Replace(format!("<div class=\"banner\">{}</div>", heading.text))
        } else {
            VisitorAction::Continue
        }
    }
}

/// Records the order of document events.
struct EventLog(Arc<Mutex<Vec<String>>>);

impl NodeVisitor for EventLog {
    fn visit_heading(&mut self, heading: &Heading) -> VisitorAction {
        self.push(format!("heading:{}", heading.id));
        VisitorAction::Continue
    }

    fn on_document_start(&mut self) {
        self.push("start".to_string());
    }

    fn on_document_end(&mut self) {
        self.push("end".to_string());
    }
}

impl EventLog {
    fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }
}

#[test]
fn test_default_visitor_all_continue() {
    let mut visitor = DefaultVisitor::new();
    let heading = Heading::new(1, "Title", 1);
    let item = ContentItem::paragraph("Welcome");

    assert!(matches!(
        visitor.visit_heading(&heading),
        VisitorAction::Continue
    ));
    assert!(matches!(
        visitor.visit_list_item(&item, false),
        VisitorAction::Continue
    ));
    assert!(matches!(
        visitor.visit_thematic_break(),
        VisitorAction::Continue
    ));
    assert!(matches!(visitor.visit_item(&item), VisitorAction::Continue));
}

#[test]
fn test_counting_visitor_sees_every_item() {
    let mut visitor = CountingVisitor::new();
    let text = "# Hope\n- one\n1. two\nJohn 3:16\n---\nClosing Prayer\nPlain words";
    let parsed = pulpit::parse(text);

    for item in &parsed.items {
        if let Some(level) = item.heading_level() {
            visitor.visit_heading(&Heading::new(1, item.content(), level));
        } else if item.is_thematic_break() {
            visitor.visit_thematic_break();
        } else if item.is_scripture() {
            visitor.visit_scripture(item);
        } else if item.is_bullet() || item.is_numbered() {
            visitor.visit_list_item(item, false);
        } else {
            visitor.visit_item(item);
        }
    }

    assert_eq!(visitor.heading_count, 1);
    assert_eq!(visitor.list_item_count, 2);
    assert_eq!(visitor.scripture_count, 1);
    assert_eq!(visitor.break_count, 1);
    assert_eq!(visitor.item_count, 2);
}

#[test]
fn test_renderer_skips_prayers() {
    let parsed = pulpit::parse("Welcome\nClosing Prayer\nAmen");
    let html = HtmlRenderer::new(RenderOptions::default())
        .with_visitor(SkipPrayersVisitor)
        .render(&parsed)
        .unwrap();
    assert_eq!(html, "<p>Welcome</p>\n<p>Amen</p>");
}

#[test]
fn test_renderer_uses_replacement() {
    let parsed = pulpit::parse("# Hope\n## Anchor");
    let html = HtmlRenderer::new(RenderOptions::default())
        .with_visitor(BannerVisitor)
        .render(&parsed)
        .unwrap();
    assert_eq!(
        html,
        "<div class=\"banner\">Hope</div>\n<h3 id=\"h2\">Anchor</h3>"
    );
}

#[test]
fn test_renderer_reports_document_events() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let parsed = pulpit::parse("# A\n## B");
    HtmlRenderer::new(RenderOptions::default())
        .with_visitor(EventLog(Arc::clone(&events)))
        .render(&parsed)
        .unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["start", "heading:h1", "heading:h2", "end"]
    );
}

#[test]
fn test_composite_visitor_chaining() {
    let mut composite = CompositeVisitor::new()
        .with_visitor(SkipPrayersVisitor)
        .with_visitor(BannerVisitor)
        .with_visitor(DefaultVisitor);

    // First matching action wins
    let prayer = ContentItem::Prayer {
        content: "Closing Prayer".to_string(),
    };
    assert!(composite.visit_item(&prayer).should_skip());

    // Heading goes to second visitor
    let action = composite.visit_heading(&Heading::new(1, "Hope", 1));
    assert!(action.is_replace());

    // Paragraph continues through all
    let para = ContentItem::paragraph("Welcome");
    assert!(matches!(
        composite.visit_item(&para),
        VisitorAction::Continue
    ));
}

#[test]
fn test_inline_verses_through_renderer() {
    let parsed = pulpit::parse("## Key Verses\nRomans 12:1-2\nJohn 3:16\nJude 1:99");
    let html = HtmlRenderer::new(RenderOptions::default())
        .with_visitor(InlineVersesVisitor::new(BibleService::offline()))
        .render(&parsed)
        .unwrap();

    assert!(html.contains("<cite>Romans 12:1-2</cite>"));
    assert!(html.contains("<cite>John 3:16</cite><p>For God so loved the world"));
    // Unresolved references keep their default rendering
    assert!(html.contains("<blockquote class=\"scripture\"><p><span"));
}

#[test]
fn test_visitor_action_methods() {
    let continue_action = VisitorAction::Continue;
    assert!(!continue_action.should_skip());
    assert!(!continue_action.is_replace());
    assert!(continue_action.replacement().is_none());

    let skip_action = VisitorAction::Skip;
    assert!(skip_action.should_skip());
    assert!(!skip_action.is_replace());
    assert!(skip_action.replacement().is_none());

    let replace_action = VisitorAction::Replace("replaced".to_string());
    assert!(!replace_action.should_skip());
    assert!(replace_action.is_replace());
    assert_eq!(replace_action.replacement(), Some("replaced"));
}

//! Ordered line classification rules.
//!
//! Rules are tried top to bottom and the first one that produces an item
//! wins. Several patterns overlap (an indented `- **Label:** x` is both a
//! nested bullet and a bold bullet), so the order is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseOptions;
use crate::bible::canon;
use crate::model::ContentItem;

/// A line as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// The line as written, including indentation
    pub raw: &'a str,

    /// The line with surrounding whitespace removed
    pub trimmed: &'a str,
}

impl<'a> Line<'a> {
    /// Wrap a raw line.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
        }
    }

    /// Check if the line carries no content.
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

type Matcher = fn(&Line<'_>, &ParseOptions) -> Option<ContentItem>;

/// One classification rule.
pub struct Rule {
    /// Short rule name, matching the item type it produces
    pub name: &'static str,
    matcher: Matcher,
}

impl Rule {
    /// Try to classify a line with this rule.
    pub fn apply(&self, line: &Line<'_>, options: &ParseOptions) -> Option<ContentItem> {
        (self.matcher)(line, options)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

static RULES: [Rule; 12] = [
    Rule {
        name: "heading",
        matcher: heading,
    },
    Rule {
        name: "subheading",
        matcher: subheading,
    },
    Rule {
        name: "subheading3",
        matcher: subheading3,
    },
    Rule {
        name: "listNested",
        matcher: list_nested,
    },
    Rule {
        name: "boldBullet",
        matcher: bold_bullet,
    },
    Rule {
        name: "numbered",
        matcher: numbered,
    },
    Rule {
        name: "list",
        matcher: list,
    },
    Rule {
        name: "callout",
        matcher: callout,
    },
    Rule {
        name: "scripture",
        matcher: scripture,
    },
    Rule {
        name: "boldLabel",
        matcher: bold_label,
    },
    Rule {
        name: "prayer",
        matcher: prayer,
    },
    Rule {
        name: "paragraph",
        matcher: paragraph,
    },
];

/// The classification rules in priority order. The last rule always matches.
pub fn rules() -> &'static [Rule] {
    &RULES
}

static NESTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indent>\s*)[-*•]\s+(?P<content>\S.*)$").unwrap());

static BOLD_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-*•]\s+\*\*(?P<label>[^*]+?):\*\*\s*(?P<content>.*)$").unwrap()
});

static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<number>\d+)\.\s+(?P<content>.*)$").unwrap());

static SCRIPTURE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<reference>(?P<book>(?:[1-3] )?[A-Z][a-z]+)\.? \d+:\d+(?:-\d+)?(?:,\s*\d+)*)(?P<rest>.*)$",
    )
    .unwrap()
});

static BOLD_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*(?P<label>[^*]+?)(?::\*\*|\*\*:)\s*(?P<content>.*)$").unwrap()
});

const VERSE_SEPARATORS: &[char] = &['-', '–', '—', ':', ','];

fn heading(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let content = line.trimmed.strip_prefix("# ")?.trim().to_string();
    Some(ContentItem::Heading { content })
}

fn subheading(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let content = line.trimmed.strip_prefix("## ")?.trim().to_string();
    Some(ContentItem::Subheading { content })
}

fn subheading3(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let content = line.trimmed.strip_prefix("### ")?.trim().to_string();
    Some(ContentItem::Subheading3 { content })
}

fn list_nested(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    if !line.raw.starts_with("  ") {
        return None;
    }
    let caps = NESTED.captures(line.raw)?;
    Some(ContentItem::ListNested {
        content: caps["content"].trim().to_string(),
        depth: caps["indent"].chars().count(),
    })
}

fn bold_bullet(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let caps = BOLD_BULLET.captures(line.trimmed)?;
    Some(ContentItem::BoldBullet {
        label: caps["label"].trim().to_string(),
        content: caps["content"].trim().to_string(),
    })
}

fn numbered(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let caps = NUMBERED.captures(line.trimmed)?;
    // Numbers past u32 restart the list at 1
    let number = caps["number"].parse().unwrap_or(1);
    Some(ContentItem::numbered(number, caps["content"].trim()))
}

fn list(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let rest = ["- ", "* ", "• "]
        .iter()
        .find_map(|marker| line.trimmed.strip_prefix(marker))?;
    Some(ContentItem::bullet(rest.trim()))
}

fn callout(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    let content = line.trimmed.strip_prefix("> ")?.trim().to_string();
    Some(ContentItem::Callout { content })
}

fn scripture(line: &Line<'_>, options: &ParseOptions) -> Option<ContentItem> {
    let caps = SCRIPTURE_START.captures(line.trimmed)?;
    if options.validate_books && !canon::is_book(&caps["book"]) {
        return None;
    }

    let rest = caps["rest"].trim_start();
    if let Some(after) = rest.strip_prefix(VERSE_SEPARATORS) {
        let verse_text = after.trim();
        if !verse_text.is_empty() {
            return Some(ContentItem::ScriptureWithText {
                content: caps["reference"].to_string(),
                verse_text: verse_text.to_string(),
            });
        }
    }

    Some(ContentItem::Scripture {
        content: line.trimmed.to_string(),
    })
}

fn bold_label(line: &Line<'_>, options: &ParseOptions) -> Option<ContentItem> {
    if line.trimmed.chars().count() >= options.bold_label_max_chars {
        return None;
    }
    let caps = BOLD_LABEL.captures(line.trimmed)?;
    Some(ContentItem::BoldLabel {
        label: caps["label"].trim().to_string(),
        content: caps["content"].trim().to_string(),
    })
}

fn prayer(line: &Line<'_>, options: &ParseOptions) -> Option<ContentItem> {
    let text = line.trimmed;
    if text.chars().count() >= options.prayer_max_chars || text.contains(':') {
        return None;
    }
    if !text.to_lowercase().contains("prayer") {
        return None;
    }
    Some(ContentItem::Prayer {
        content: text.to_string(),
    })
}

fn paragraph(line: &Line<'_>, _: &ParseOptions) -> Option<ContentItem> {
    Some(ContentItem::paragraph(line.trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;

    fn first_match(raw: &str) -> &'static str {
        let line = Line::new(raw);
        let options = ParseOptions::default();
        rules()
            .iter()
            .find(|rule| rule.apply(&line, &options).is_some())
            .map(|rule| rule.name)
            .unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "heading",
                "subheading",
                "subheading3",
                "listNested",
                "boldBullet",
                "numbered",
                "list",
                "callout",
                "scripture",
                "boldLabel",
                "prayer",
                "paragraph",
            ]
        );
    }

    #[test]
    fn test_nested_wins_over_bold_bullet() {
        assert_eq!(first_match("  - **Time:** 9:30 AM"), "listNested");
        assert_eq!(first_match("- **Time:** 9:30 AM"), "boldBullet");
    }

    #[test]
    fn test_heading_levels_do_not_overlap() {
        assert_eq!(first_match("# Title"), "heading");
        assert_eq!(first_match("## Section"), "subheading");
        assert_eq!(first_match("### Detail"), "subheading3");
        assert_eq!(first_match("#### Too deep"), "paragraph");
        assert_eq!(first_match("#NoSpace"), "paragraph");
    }

    #[test]
    fn test_scripture_before_bold_label_and_prayer() {
        assert_eq!(first_match("Philippians 4:6 - by prayer and supplication"), "scripture");
        assert_eq!(first_match("**Opening Prayer:** Elder Smith"), "boldLabel");
        assert_eq!(first_match("Closing Prayer"), "prayer");
        assert_eq!(first_match("Prayer: for the sick"), "paragraph");
    }

    #[test]
    fn test_scripture_with_text() {
        let options = ParseOptions::default();
        let item = scripture(&Line::new("John 3:16 - For God so loved the world"), &options).unwrap();
        assert_eq!(item.kind(), ItemKind::ScriptureWithText);
        assert_eq!(item.content(), "John 3:16");
        assert_eq!(item.verse_text(), Some("For God so loved the world"));

        let item = scripture(&Line::new("Romans 12:1-2, 5"), &options).unwrap();
        assert_eq!(item.kind(), ItemKind::Scripture);
        assert_eq!(item.content(), "Romans 12:1-2, 5");
    }

    #[test]
    fn test_scripture_requires_known_book() {
        let strict = ParseOptions::default();
        assert!(scripture(&Line::new("Service 9:30 - main hall"), &strict).is_none());

        let lenient = ParseOptions::default().lenient_books();
        assert!(scripture(&Line::new("Service 9:30 - main hall"), &lenient).is_some());
    }

    #[test]
    fn test_bold_label_length_bound() {
        assert_eq!(first_match("**Speaker**: Pastor Lee"), "boldLabel");
        assert_eq!(
            first_match("**Speaker:** Pastor Lee from the conference office downtown"),
            "paragraph"
        );
    }

    #[test]
    fn test_numbered_and_list() {
        let options = ParseOptions::default();
        let item = numbered(&Line::new("12. Trust God"), &options).unwrap();
        assert_eq!(item, ContentItem::numbered(12, "Trust God"));
        assert_eq!(first_match("• Bring a friend"), "list");
        assert_eq!(first_match("> Be still, and know"), "callout");
        assert_eq!(first_match("**bold** opener"), "paragraph");
    }

    #[test]
    fn test_numbered_overflow_restarts_at_one() {
        let options = ParseOptions::default();
        let item = numbered(&Line::new("99999999999. big"), &options).unwrap();
        assert_eq!(item, ContentItem::numbered(1, "big"));
    }

    #[test]
    fn test_bare_markers_are_paragraphs() {
        assert_eq!(first_match("  - "), "paragraph");
        assert_eq!(first_match("-"), "paragraph");
        assert_eq!(first_match("  -   x"), "listNested");
    }
}

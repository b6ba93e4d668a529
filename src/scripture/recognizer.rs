//! Finds scripture references in free text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ScriptureReference;
use crate::bible::canon;

/// Optional `1`-`3 ` prefix, one or two capitalized words, `chapter:verse`
/// and an optional `-verse`.
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[1-3] )?[A-Z][a-z]+(?: [A-Z][a-z]+)? \d+:\d+(?:-\d+)?").unwrap()
});

/// A recognized reference: byte span into the scanned text plus the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMatch {
    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,

    /// Matched text
    pub text: String,
}

impl ReferenceMatch {
    /// Re-parse the matched text strictly.
    pub fn reference(&self) -> Option<ScriptureReference> {
        ScriptureReference::parse(&self.text)
    }
}

/// A piece of scanned text: either prose or a recognized reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Reference(&'a str),
}

/// Scripture reference recognizer.
///
/// The default recognizer checks each candidate's book against the canon.
/// A two-word candidate whose first word is not part of a book name is
/// narrowed to its second word, so "See John 3:16" yields "John 3:16".
/// Candidates naming no known book are skipped. Book names longer than two
/// words ("Song of Solomon") are never matched.
#[derive(Debug, Clone, Copy)]
pub struct ScriptureRecognizer {
    validate_books: bool,
}

impl Default for ScriptureRecognizer {
    fn default() -> Self {
        Self {
            validate_books: true,
        }
    }
}

impl ScriptureRecognizer {
    /// Create a recognizer that validates books against the canon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recognizer that returns every raw pattern match.
    pub fn pattern_only() -> Self {
        Self {
            validate_books: false,
        }
    }

    /// Find all references, left to right, non-overlapping.
    pub fn find(&self, text: &str) -> Vec<ReferenceMatch> {
        PATTERN
            .find_iter(text)
            .filter_map(|m| {
                let (start, end) = if self.validate_books {
                    validate(m.as_str())?
                } else {
                    (0, m.as_str().len())
                };
                Some(ReferenceMatch {
                    start: m.start() + start,
                    end: m.start() + end,
                    text: m.as_str()[start..end].to_string(),
                })
            })
            .collect()
    }

    /// Find all references and parse each one strictly.
    pub fn references(&self, text: &str) -> Vec<ScriptureReference> {
        self.find(text).iter().filter_map(|m| m.reference()).collect()
    }

    /// Check if the text contains at least one reference.
    pub fn contains(&self, text: &str) -> bool {
        !self.find(text).is_empty()
    }

    /// Split text into prose and reference segments, in order.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for m in self.find(text) {
            if m.start > cursor {
                segments.push(Segment::Text(&text[cursor..m.start]));
            }
            segments.push(Segment::Reference(&text[m.start..m.end]));
            cursor = m.end;
        }
        if cursor < text.len() {
            segments.push(Segment::Text(&text[cursor..]));
        }
        segments
    }
}

/// Validate a raw candidate, returning the sub-span to keep.
fn validate(candidate: &str) -> Option<(usize, usize)> {
    let book_end = candidate.rfind(' ')?;
    let book = &candidate[..book_end];
    if canon::is_book(book) {
        return Some((0, candidate.len()));
    }

    // Drop the leading word (and any prefix digit) and retry with the last word.
    let narrowed = book.rfind(' ').map(|i| i + 1)?;
    if narrowed > 0 && canon::is_book(&book[narrowed..]) {
        log::debug!("narrowed reference candidate {:?}", candidate);
        return Some((narrowed, candidate.len()));
    }

    log::debug!("skipping reference candidate with unknown book {:?}", candidate);
    None
}

/// Find references with the default recognizer.
pub fn find_references(text: &str) -> Vec<ReferenceMatch> {
    ScriptureRecognizer::default().find(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(matches: &[ReferenceMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_single_reference_in_prose() {
        let text = "See John 3:16 for context.";
        let found = find_references(text);
        assert_eq!(texts(&found), vec!["John 3:16"]);
        assert_eq!(&text[found[0].start..found[0].end], "John 3:16");
    }

    #[test]
    fn test_range_and_order() {
        let found = find_references("Romans 12:1-2 and John 3:16");
        assert_eq!(texts(&found), vec!["Romans 12:1-2", "John 3:16"]);
        let first = found[0].reference().unwrap();
        assert_eq!(first.verse_end, Some(2));
    }

    #[test]
    fn test_numeric_prefix() {
        let found = find_references("Love is patient (1 Corinthians 13:4) and 2 Timothy 3:16 agrees.");
        assert_eq!(texts(&found), vec!["1 Corinthians 13:4", "2 Timothy 3:16"]);
    }

    #[test]
    fn test_three_word_books_are_not_matched() {
        assert!(find_references("Song of Solomon 2:1").is_empty());
    }

    #[test]
    fn test_pattern_only_keeps_raw_candidates() {
        let raw = ScriptureRecognizer::pattern_only().find("See John 3:16 and Solomon 2:1");
        assert_eq!(texts(&raw), vec!["See John 3:16", "Solomon 2:1"]);
    }

    #[test]
    fn test_no_range_without_dash() {
        let found = find_references("Matthew 5:9, 16");
        assert_eq!(texts(&found), vec!["Matthew 5:9"]);
        assert_eq!(found[0].reference().unwrap().verse_end, None);
    }

    #[test]
    fn test_segments() {
        let recognizer = ScriptureRecognizer::new();
        let segments = recognizer.segments("Read Psalm 23:1 today");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Read "),
                Segment::Reference("Psalm 23:1"),
                Segment::Text(" today"),
            ]
        );
    }
}

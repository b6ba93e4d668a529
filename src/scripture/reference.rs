//! Parsed scripture references.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bible::canon;
use crate::error::Error;

/// Strict reference grammar: optional prefix digit, book words, chapter,
/// start verse and an optional `-end` verse.
static STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<prefix>[1-3])\s+)?(?P<book>[A-Za-z]+(?:\s+[A-Za-z]+)*)\.?\s+(?P<chapter>\d+):(?P<start>\d+)(?:-(?P<end>\d+))?$",
    )
    .unwrap()
});

/// A scripture reference such as `1 Corinthians 13:4-7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureReference {
    /// Numeric book prefix ("1" in "1 John")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_prefix: Option<u8>,

    /// Book name without the prefix, as written
    pub book: String,

    /// Chapter number
    pub chapter: u32,

    /// First verse
    pub verse_start: u32,

    /// Inclusive last verse, when a range was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse_end: Option<u32>,
}

impl ScriptureReference {
    /// Create a single-verse reference. A leading `1`-`3 ` in `book` becomes the prefix.
    pub fn single(book: &str, chapter: u32, verse: u32) -> Self {
        let (book_prefix, book) = split_prefix(book);
        Self {
            book_prefix,
            book,
            chapter,
            verse_start: verse,
            verse_end: None,
        }
    }

    /// Create a range reference.
    pub fn range(book: &str, chapter: u32, start: u32, end: u32) -> Self {
        Self {
            verse_end: Some(end),
            ..Self::single(book, chapter, start)
        }
    }

    /// Parse a reference strictly. Returns None for anything that does not
    /// match the reference grammar in full.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = STRICT.captures(input.trim())?;
        let book_prefix = caps.name("prefix").and_then(|m| m.as_str().parse().ok());
        let book = caps["book"].split_whitespace().collect::<Vec<_>>().join(" ");
        let chapter = caps["chapter"].parse().ok()?;
        let verse_start = caps["start"].parse().ok()?;
        let verse_end = match caps.name("end") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(Self {
            book_prefix,
            book,
            chapter,
            verse_start,
            verse_end,
        })
    }

    /// Book name including its numeric prefix ("1 John").
    pub fn full_book(&self) -> String {
        match self.book_prefix {
            Some(prefix) => format!("{} {}", prefix, self.book),
            None => self.book.clone(),
        }
    }

    /// Canonical book name, if the book resolves.
    pub fn canonical_book(&self) -> Option<&'static str> {
        canon::resolve_book(&self.full_book()).map(|b| b.name)
    }

    /// Book name to use for lookups: canonical when known, as written otherwise.
    pub fn lookup_book(&self) -> String {
        self.canonical_book()
            .map(str::to_string)
            .unwrap_or_else(|| self.full_book())
    }

    /// Check if a range end was written.
    pub fn is_range(&self) -> bool {
        self.verse_end.is_some()
    }

    /// Verses covered. An end before the start covers the start verse only.
    pub fn verses(&self) -> RangeInclusive<u32> {
        let end = self
            .verse_end
            .filter(|&end| end >= self.verse_start)
            .unwrap_or(self.verse_start);
        self.verse_start..=end
    }

    /// Reference for one verse of this reference's chapter.
    pub fn verse(&self, verse: u32) -> Self {
        Self {
            book_prefix: self.book_prefix,
            book: self.book.clone(),
            chapter: self.chapter,
            verse_start: verse,
            verse_end: None,
        }
    }

    /// Same reference with the canonical book name, when it resolves.
    pub fn canonicalized(&self) -> Self {
        match self.canonical_book() {
            Some(name) => Self {
                verse_end: self.verse_end,
                ..Self::single(name, self.chapter, self.verse_start)
            },
            None => self.clone(),
        }
    }
}

fn split_prefix(book: &str) -> (Option<u8>, String) {
    let book = book.trim();
    let bytes = book.as_bytes();
    if bytes.len() > 2 && matches!(bytes[0], b'1'..=b'3') && bytes[1] == b' ' {
        (Some(bytes[0] - b'0'), book[2..].trim_start().to_string())
    } else {
        (None, book.to_string())
    }
}

impl fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.full_book(), self.chapter, self.verse_start)?;
        if let Some(end) = self.verse_end {
            write!(f, "-{}", end)?;
        }
        Ok(())
    }
}

impl FromStr for ScriptureReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidReference(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let r = ScriptureReference::parse("John 3:16").unwrap();
        assert_eq!(r.book_prefix, None);
        assert_eq!(r.book, "John");
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse_start, 16);
        assert_eq!(r.verse_end, None);
    }

    #[test]
    fn test_parse_prefixed_range() {
        let r = ScriptureReference::parse("1 Corinthians 13:4-7").unwrap();
        assert_eq!(r.book_prefix, Some(1));
        assert_eq!(r.book, "Corinthians");
        assert_eq!(r.full_book(), "1 Corinthians");
        assert_eq!(r.verses(), 4..=7);
        assert_eq!(r.to_string(), "1 Corinthians 13:4-7");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ScriptureReference::parse("John 3").is_none());
        assert!(ScriptureReference::parse("3:16").is_none());
        assert!(ScriptureReference::parse("John 3:16 and more").is_none());
        assert!("nope".parse::<ScriptureReference>().is_err());
    }

    #[test]
    fn test_multi_word_book_parses_strictly() {
        let r = ScriptureReference::parse("Song of Solomon 2:1").unwrap();
        assert_eq!(r.book, "Song of Solomon");
        assert_eq!(r.canonical_book(), Some("Song of Solomon"));
    }

    #[test]
    fn test_reversed_range_is_single_verse() {
        let r = ScriptureReference::range("John", 3, 18, 16);
        assert_eq!(r.verses(), 18..=18);
    }

    #[test]
    fn test_canonicalized() {
        let r = ScriptureReference::parse("Psalm 23:1").unwrap().canonicalized();
        assert_eq!(r.book, "Psalms");
        let r = ScriptureReference::parse("1 Cor 13:13").unwrap().canonicalized();
        assert_eq!(r.book_prefix, Some(1));
        assert_eq!(r.book, "Corinthians");
    }
}

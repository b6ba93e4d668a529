//! Verse lookup service: static table first, provider second.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::canon;
use super::kjv;
use super::provider::{Verse, VerseProvider};
use crate::error::{Error, Result};
use crate::scripture::ScriptureReference;

/// Maximum number of hits returned by [`BibleService::search`].
pub const SEARCH_LIMIT: usize = 10;

/// Longest verse range fetched for a passage (Psalm 119).
pub const MAX_PASSAGE_VERSES: u32 = 176;

/// Featured verses shown to users as starting points.
pub const POPULAR_VERSES: [&str; 12] = [
    "John 3:16",
    "Psalm 23:1",
    "Proverbs 3:5",
    "Romans 8:28",
    "Philippians 4:13",
    "Psalm 119:105",
    "Isaiah 40:31",
    "Matthew 6:33",
    "1 Corinthians 13:13",
    "Genesis 1:1",
    "1 Peter 2:9",
    "2 Timothy 3:16",
];

/// A keyword search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub reference: String,
    pub text: String,
}

/// One verse of a passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageVerse {
    pub number: u32,
    pub text: String,
}

/// A resolved verse range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Display reference for the requested range
    pub reference: String,

    /// Resolved verses in ascending order; unresolved verses are absent
    pub verses: Vec<PassageVerse>,

    /// Verses joined with their numbers ("16 For God... 17 For God sent...")
    pub text: String,

    /// Translation code
    pub version: String,
}

/// Verse lookup over the static KJV table with an optional remote fallback.
#[derive(Clone, Default)]
pub struct BibleService {
    provider: Option<Arc<dyn VerseProvider>>,
}

impl std::fmt::Debug for BibleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BibleService")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

impl BibleService {
    /// Create a service backed by the static table only.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Create a service with a fallback provider.
    pub fn with_provider(provider: Arc<dyn VerseProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create a service with the bible-api.com provider.
    #[cfg(feature = "remote")]
    pub fn remote() -> Result<Self> {
        let provider = super::provider::BibleApiProvider::new()?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Check if a fallback provider is configured.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Canonical book names in order.
    pub fn books(&self) -> Vec<&'static str> {
        canon::book_names()
    }

    /// Chapter numbers for a book; empty when the book is unknown.
    pub fn chapters(&self, book: &str) -> Vec<u32> {
        canon::chapter_count(book)
            .map(|n| (1..=n).collect())
            .unwrap_or_default()
    }

    /// Look up one verse.
    pub fn verse(&self, book: &str, chapter: u32, verse: u32) -> Result<Verse> {
        let name: &str = match canon::resolve_book(book) {
            Some(b) => b.name,
            None => book.trim(),
        };
        let reference = format!("{} {}:{}", name, chapter, verse);

        if let Some(text) = kjv::get(&kjv::key(name, chapter, verse)) {
            log::debug!("{} served from static table", reference);
            return Ok(Verse::kjv(reference, text));
        }

        if let Some(provider) = &self.provider {
            match provider.fetch(name, chapter, verse) {
                Ok(verse) => return Ok(verse),
                Err(e) => log::warn!("{} lookup of {} failed: {}", provider.name(), reference, e),
            }
        }

        Err(Error::VerseNotFound(reference))
    }

    /// Look up the first verse of a reference.
    pub fn lookup(&self, reference: &ScriptureReference) -> Result<Verse> {
        self.verse(
            &reference.lookup_book(),
            reference.chapter,
            reference.verse_start,
        )
    }

    /// Case-insensitive substring search over the static table.
    ///
    /// Returns the first [`SEARCH_LIMIT`] hits in table order.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        kjv::entries()
            .filter(|(_, text)| text.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .map(|(key, text)| SearchResult {
                reference: kjv::display_reference(key),
                text: text.to_string(),
            })
            .collect()
    }

    /// Resolve every verse of a reference's range.
    ///
    /// Lookups run in parallel. Verses that fail are omitted; the call fails
    /// only when no verse resolves.
    pub fn passage(&self, reference: &ScriptureReference) -> Result<Passage> {
        let book = reference.lookup_book();
        let range = reference.verses();
        let last = (*range.end()).min(range.start().saturating_add(MAX_PASSAGE_VERSES - 1));
        let numbers: Vec<u32> = (*range.start()..=last).collect();

        let mut resolved: Vec<(u32, Verse)> = numbers
            .par_iter()
            .filter_map(|&n| self.verse(&book, reference.chapter, n).ok().map(|v| (n, v)))
            .collect();
        resolved.sort_by_key(|(n, _)| *n);

        if resolved.is_empty() {
            return Err(Error::VerseNotFound(reference.to_string()));
        }
        if resolved.len() < numbers.len() {
            log::warn!(
                "{}: resolved {} of {} verses",
                reference,
                resolved.len(),
                numbers.len()
            );
        }

        let version = resolved[0].1.version.clone();
        let verses: Vec<PassageVerse> = resolved
            .into_iter()
            .map(|(number, verse)| PassageVerse {
                number,
                text: verse.text,
            })
            .collect();
        let text = verses
            .iter()
            .map(|v| format!("{} {}", v.number, v.text))
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Passage {
            reference: reference.canonicalized().to_string(),
            verses,
            text,
            version,
        })
    }

    /// Featured verse references.
    pub fn popular(&self) -> &'static [&'static str] {
        &POPULAR_VERSES
    }
}

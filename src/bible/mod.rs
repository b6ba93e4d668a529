//! Verse resolution: canon, static KJV subset and remote fallback.

pub mod canon;
pub mod kjv;
mod provider;
mod service;

#[cfg(feature = "remote")]
pub use provider::BibleApiProvider;
pub use provider::{ProviderConfig, Verse, VerseProvider};
pub use service::{
    BibleService, Passage, PassageVerse, SearchResult, MAX_PASSAGE_VERSES, POPULAR_VERSES,
    SEARCH_LIMIT,
};

//! Verse text providers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A resolved verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Display reference ("John 3:16")
    pub reference: String,

    /// Verse text
    pub text: String,

    /// Translation code ("KJV")
    pub version: String,
}

impl Verse {
    /// Create a KJV verse.
    pub fn kjv(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
            version: "KJV".to_string(),
        }
    }
}

/// Source of verse text used when the static table has no entry.
///
/// Implementations must be shareable across threads: passage lookups fan
/// out one call per verse.
pub trait VerseProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Fetch a single verse.
    fn fetch(&self, book: &str, chapter: u32, verse: u32) -> Result<Verse>;
}

/// Configuration for the remote verse provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Service base URL
    pub base_url: String,

    /// Translation requested from the service
    pub translation: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the translation.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the lookup URL for a verse.
    pub fn verse_url(&self, book: &str, chapter: u32, verse: u32) -> String {
        format!(
            "{}/{}%20{}:{}?translation={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(book),
            chapter,
            verse,
            urlencoding::encode(&self.translation)
        )
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bible-api.com".to_string(),
            translation: "kjv".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(feature = "remote")]
pub use remote::BibleApiProvider;

#[cfg(feature = "remote")]
mod remote {
    use serde::Deserialize;

    use super::{ProviderConfig, Verse, VerseProvider};
    use crate::error::{Error, Result};

    #[derive(Debug, Deserialize)]
    struct ApiVerse {
        reference: String,
        text: String,
        #[serde(default)]
        translation_id: Option<String>,
    }

    /// Verse provider backed by bible-api.com.
    #[derive(Debug, Clone)]
    pub struct BibleApiProvider {
        client: reqwest::blocking::Client,
        config: ProviderConfig,
    }

    impl BibleApiProvider {
        /// Create a provider with default configuration.
        pub fn new() -> Result<Self> {
            Self::with_config(ProviderConfig::default())
        }

        /// Create a provider with custom configuration.
        pub fn with_config(config: ProviderConfig) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout)
                .build()?;
            Ok(Self { client, config })
        }

        /// Get the configuration.
        pub fn config(&self) -> &ProviderConfig {
            &self.config
        }
    }

    impl VerseProvider for BibleApiProvider {
        fn name(&self) -> &str {
            "bible-api"
        }

        fn fetch(&self, book: &str, chapter: u32, verse: u32) -> Result<Verse> {
            let url = self.config.verse_url(book, chapter, verse);
            log::debug!("fetching verse from {}", url);

            let response = self.client.get(&url).send()?;
            if !response.status().is_success() {
                return Err(Error::VerseNotFound(format!(
                    "{} {}:{} ({})",
                    book,
                    chapter,
                    verse,
                    response.status()
                )));
            }

            let data: ApiVerse = response.json()?;
            let text = data.text.trim().to_string();
            if text.is_empty() {
                return Err(Error::Upstream(format!("empty text for {}", data.reference)));
            }

            Ok(Verse {
                reference: data.reference,
                text,
                version: data
                    .translation_id
                    .map(|t| t.to_uppercase())
                    .unwrap_or_else(|| "KJV".to_string()),
            })
        }
    }
}

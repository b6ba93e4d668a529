//! Stored record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;
use crate::generate::{ContentType, GenerationRequest, GenerationResponse, GenerationStatus};
use crate::model::ContentDocument;

/// A generated document kept in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub status: GenerationStatus,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped now.
    pub fn new(document: ContentDocument) -> Self {
        Self {
            title: document.title,
            content: document.content,
            content_type: document.content_type,
            status: document.status,
            created_at: Utc::now(),
        }
    }

    /// Create an entry from an answered request.
    pub fn from_response(request: &GenerationRequest, response: &GenerationResponse) -> Self {
        Self::new(ContentDocument::new(
            response.title.clone(),
            response.content.clone(),
            request.content_type,
            response.status,
        ))
    }

    /// The stored document.
    pub fn document(&self) -> ContentDocument {
        ContentDocument::new(
            self.title.clone(),
            self.content.clone(),
            self.content_type,
            self.status,
        )
    }
}

/// Saved request parameters, reusable as a starting point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub name: String,
    #[serde(flatten)]
    pub request: GenerationRequest,
    pub saved_at: DateTime<Utc>,
}

impl SavedTemplate {
    pub fn new(name: impl Into<String>, request: GenerationRequest) -> Self {
        Self {
            name: name.into(),
            request,
            saved_at: Utc::now(),
        }
    }
}

impl Keyed for SavedTemplate {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Work in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    pub saved_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_type,
            saved_at: Utc::now(),
        }
    }
}

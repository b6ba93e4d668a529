//! Generation requests and responses.

use serde::{Deserialize, Serialize};

use super::{ContentType, GenerationStatus};

/// Topic value that asks for topic suggestions instead of content.
pub const SUGGEST_TOPICS: &str = "SUGGEST_TOPICS";

/// Audience used when a request names none.
pub const DEFAULT_AUDIENCE: &str = "General Church";

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// A request for generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub content_type: ContentType,

    pub topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripture: Option<String>,

    #[serde(default = "default_audience")]
    pub target_audience: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_time: Option<String>,
}

impl GenerationRequest {
    /// Create a request for a topic.
    pub fn new(content_type: ContentType, topic: impl Into<String>) -> Self {
        Self {
            content_type,
            topic: topic.into(),
            scripture: None,
            target_audience: default_audience(),
            service_time: None,
        }
    }

    /// Create a topic suggestion request.
    pub fn suggestions(content_type: ContentType) -> Self {
        Self::new(content_type, SUGGEST_TOPICS)
    }

    /// Set the focus scripture.
    pub fn with_scripture(mut self, scripture: impl Into<String>) -> Self {
        self.scripture = Some(scripture.into());
        self
    }

    /// Set the target audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    /// Set the service time.
    pub fn with_service_time(mut self, time: impl Into<String>) -> Self {
        self.service_time = Some(time.into());
        self
    }

    /// Check if this asks for topic suggestions.
    pub fn is_suggestion(&self) -> bool {
        self.topic == SUGGEST_TOPICS
    }

    /// Scripture, if present and not blank.
    pub fn scripture(&self) -> Option<&str> {
        non_blank(self.scripture.as_deref())
    }

    /// Service time, if present and not blank.
    pub fn service_time(&self) -> Option<&str> {
        non_blank(self.service_time.as_deref())
    }

    /// Audience, or the default when blank.
    pub fn audience(&self) -> &str {
        non_blank(Some(self.target_audience.as_str())).unwrap_or(DEFAULT_AUDIENCE)
    }

    /// Title for content generated from this request.
    pub fn title(&self) -> String {
        format!("{}: {}", self.content_type.label(), self.topic.trim())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub title: String,
    pub content: String,
    pub status: GenerationStatus,
}

/// Topic suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// Either generated content or suggestions, depending on the request topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateReply {
    Content(GenerationResponse),
    Suggestions(SuggestionResponse),
}

/// A request to revise existing content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    #[serde(default)]
    pub content_type: ContentType,

    #[serde(default)]
    pub title: String,

    pub content: String,

    pub instruction: String,
}

impl RefineRequest {
    /// Create a refine request.
    pub fn new(
        content_type: ContentType,
        title: impl Into<String>,
        content: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            title: title.into(),
            content: content.into(),
            instruction: instruction.into(),
        }
    }
}

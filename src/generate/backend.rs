//! Completion backends.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A chat-completion service.
pub trait CompletionBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Complete a system and user prompt pair, returning the reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Chat-completions response body, reduced to what is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content: plain text, or a list of parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl MessageContent {
    /// Flatten to text. Parts contribute `text`, else `content`, else nothing.
    pub fn into_text(self) -> String {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Parts(parts) => parts
                .into_iter()
                .map(|p| p.text.or(p.content).unwrap_or_default())
                .collect(),
        }
    }
}

impl ChatResponse {
    /// Text of the first choice.
    pub fn first_text(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Upstream("response has no choices".to_string()))?;
        let text = choice.message.content.map(MessageContent::into_text).unwrap_or_default();
        if text.trim().is_empty() {
            return Err(Error::Upstream("empty completion".to_string()));
        }
        Ok(text)
    }
}

#[cfg(feature = "remote")]
pub use remote::OpenAiBackend;

#[cfg(feature = "remote")]
mod remote {
    use super::{ChatMessage, ChatRequest, ChatResponse, CompletionBackend};
    use crate::error::{Error, Result};
    use crate::generate::GeneratorConfig;

    /// OpenAI-compatible chat-completions backend.
    #[derive(Clone)]
    pub struct OpenAiBackend {
        client: reqwest::blocking::Client,
        url: String,
        api_key: String,
        model: String,
    }

    impl std::fmt::Debug for OpenAiBackend {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("OpenAiBackend")
                .field("url", &self.url)
                .field("model", &self.model)
                .finish()
        }
    }

    impl OpenAiBackend {
        /// Create a backend from config. Fails when no key is configured.
        pub fn new(config: &GeneratorConfig) -> Result<Self> {
            let api_key = config.api_key.clone().ok_or(Error::NoBackend)?;
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout)
                .build()?;
            Ok(Self {
                client,
                url: config.completions_url(),
                api_key,
                model: config.model.clone(),
            })
        }
    }

    impl CompletionBackend for OpenAiBackend {
        fn name(&self) -> &str {
            "openai"
        }

        fn complete(&self, system: &str, user: &str) -> Result<String> {
            let body = ChatRequest {
                model: self.model.clone(),
                messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            };

            log::debug!("posting completion to {} with model {}", self.url, self.model);
            let response = self
                .client
                .post(&self.url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&body)
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Upstream(format!("completion returned {}", status)));
            }

            let data: ChatResponse = response.json()?;
            data.first_text()
        }
    }
}

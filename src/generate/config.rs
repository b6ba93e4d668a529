//! Generator configuration.

use std::time::Duration;

/// Default chat-completions API root.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for the completion backend.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// Bearer key; None disables the backend
    pub api_key: Option<String>,

    /// API root; `/chat/completions` is appended
    pub api_url: String,

    /// Model name
    pub model: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeneratorConfig {
    /// Create a config with defaults and no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `AI_API_KEY`, `OPENAI_API_URL` and `PULPIT_MODEL`.
    pub fn from_env() -> Self {
        let env = |name: &str| std::env::var(name).ok().and_then(non_blank);
        Self {
            api_key: env("AI_API_KEY"),
            api_url: env("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: env("PULPIT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ..Self::default()
        }
    }

    /// Set the API key. Blank keys disable the backend.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = non_blank(key.into());
        self
    }

    /// Set the API root.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if a key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! The content generator.

use std::sync::Arc;

use super::backend::CompletionBackend;
use super::demo::demo_response;
use super::prompts::{refine_prompt, suggestion_prompt, user_prompt, SUGGEST_SYSTEM_PROMPT, SYSTEM_PROMPT};
use super::suggestions::{fallback, parse_suggestions};
use super::{
    ContentType, GenerateReply, GenerationRequest, GenerationResponse, GenerationStatus,
    GeneratorConfig, RefineRequest, SuggestionResponse,
};
use crate::error::Result;
use crate::render::{CleanupOptions, CleanupPipeline};

/// Generates church content through a completion backend, falling back to
/// demo templates.
///
/// Backend failures are logged and never surfaced: every call returns
/// usable content.
#[derive(Clone)]
pub struct Generator {
    backend: Option<Arc<dyn CompletionBackend>>,
    cleanup: CleanupPipeline,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .finish()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::demo()
    }
}

impl Generator {
    /// Create a generator that always serves demo templates.
    pub fn demo() -> Self {
        Self {
            backend: None,
            cleanup: CleanupPipeline::new(CleanupOptions::standard()),
        }
    }

    /// Create a generator with a backend.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend: Some(backend),
            ..Self::demo()
        }
    }

    /// Create a generator from config: a remote backend when a key is set,
    /// demo templates otherwise.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        if !config.has_api_key() {
            log::info!("no API key configured, serving demo content");
            return Ok(Self::demo());
        }

        Ok(match remote_backend(config)? {
            Some(backend) => Self::with_backend(backend),
            None => Self::demo(),
        })
    }

    /// Check if a backend is configured.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Answer a request with content or suggestions, depending on its topic.
    pub fn handle(&self, request: &GenerationRequest) -> GenerateReply {
        if request.is_suggestion() {
            GenerateReply::Suggestions(self.suggest(request.content_type, request.audience()))
        } else {
            GenerateReply::Content(self.generate(request))
        }
    }

    /// Generate content for a request.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationResponse {
        let Some(backend) = &self.backend else {
            return demo_response(request);
        };

        match backend.complete(SYSTEM_PROMPT, &user_prompt(request)) {
            Ok(text) => GenerationResponse {
                title: request.title(),
                content: self.cleanup.process(&text),
                status: GenerationStatus::Success,
            },
            Err(e) => {
                log::error!("{} generation failed, serving demo: {}", backend.name(), e);
                demo_response(request)
            }
        }
    }

    /// Suggest topics for a content type.
    pub fn suggest(&self, content_type: ContentType, audience: &str) -> SuggestionResponse {
        let suggestions = self
            .backend
            .as_ref()
            .and_then(|backend| {
                match backend.complete(SUGGEST_SYSTEM_PROMPT, &suggestion_prompt(content_type, audience)) {
                    Ok(text) => parse_suggestions(&text),
                    Err(e) => {
                        log::error!("{} suggestions failed: {}", backend.name(), e);
                        None
                    }
                }
            })
            .unwrap_or_else(|| fallback(content_type));

        SuggestionResponse { suggestions }
    }

    /// Revise existing content. Without a working backend the original
    /// content comes back unchanged with demo status.
    pub fn refine(&self, request: &RefineRequest) -> GenerationResponse {
        let unchanged = || GenerationResponse {
            title: request.title.clone(),
            content: request.content.clone(),
            status: GenerationStatus::Demo,
        };

        let Some(backend) = &self.backend else {
            return unchanged();
        };

        match backend.complete(SYSTEM_PROMPT, &refine_prompt(request)) {
            Ok(text) => GenerationResponse {
                title: request.title.clone(),
                content: self.cleanup.process(&text),
                status: GenerationStatus::Success,
            },
            Err(e) => {
                log::error!("{} refinement failed: {}", backend.name(), e);
                unchanged()
            }
        }
    }
}

#[cfg(feature = "remote")]
fn remote_backend(config: &GeneratorConfig) -> Result<Option<Arc<dyn CompletionBackend>>> {
    let backend = super::backend::OpenAiBackend::new(config)?;
    Ok(Some(Arc::new(backend)))
}

#[cfg(not(feature = "remote"))]
fn remote_backend(_config: &GeneratorConfig) -> Result<Option<Arc<dyn CompletionBackend>>> {
    log::warn!("built without remote support, serving demo content");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Fixed(&'static str);

    impl CompletionBackend for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl CompletionBackend for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Err(Error::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn test_demo_without_backend() {
        let response = Generator::demo().generate(&GenerationRequest::new(ContentType::Devotional, "Rest"));
        assert_eq!(response.status, GenerationStatus::Demo);
        assert_eq!(response.title, "Devotional: Rest");
        assert!(response.content.contains("Demo content"));
    }

    #[test]
    fn test_backend_success_is_cleaned() {
        let generator = Generator::with_backend(Arc::new(Fixed("# Hope   \r\n\r\n\r\n\r\nBody")));
        let response = generator.generate(&GenerationRequest::new(ContentType::Sermon, "Hope"));
        assert_eq!(response.status, GenerationStatus::Success);
        assert_eq!(response.content, "# Hope\n\nBody");
    }

    #[test]
    fn test_backend_failure_falls_back() {
        let generator = Generator::with_backend(Arc::new(Failing));
        let response = generator.generate(&GenerationRequest::new(ContentType::Prayer, "Unity"));
        assert_eq!(response.status, GenerationStatus::Demo);
        assert!(response.content.starts_with("# Prayer Points: Unity"));
    }

    #[test]
    fn test_suggestions() {
        let generator = Generator::with_backend(Arc::new(Fixed("Sure! [\"Hope\", \"Joy\"]")));
        let reply = generator.handle(&GenerationRequest::suggestions(ContentType::Sermon));
        assert_eq!(
            reply,
            GenerateReply::Suggestions(SuggestionResponse {
                suggestions: vec!["Hope".to_string(), "Joy".to_string()],
            })
        );

        let generator = Generator::with_backend(Arc::new(Fixed("no json")));
        let response = generator.suggest(ContentType::Prayer, "Youth");
        assert_eq!(response.suggestions[0], "Church Unity");
    }

    #[test]
    fn test_refine_without_backend_returns_original() {
        let request = RefineRequest::new(ContentType::Sermon, "Grace", "# Grace\nBody", "shorter");
        let response = Generator::demo().refine(&request);
        assert_eq!(response.status, GenerationStatus::Demo);
        assert_eq!(response.content, "# Grace\nBody");
    }

    #[test]
    fn test_from_config_without_key() {
        let generator = Generator::from_config(&GeneratorConfig::new()).unwrap();
        assert!(!generator.has_backend());
    }
}

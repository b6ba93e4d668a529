//! Integration tests for content generation with mock backends.

use std::sync::{Arc, Mutex};

use pulpit::error::{Error, Result};
use pulpit::generate::{
    CompletionBackend, ContentType, GenerateReply, GenerationRequest, GenerationStatus, Generator,
    GeneratorConfig, RefineRequest, DEMO_MARKER,
};
use pulpit::{Api, ApiRequest, BibleService};

/// Backend that replies with fixed text and records the prompts it saw.
struct Recording {
    reply: String,
    prompts: Mutex<Vec<(String, String)>>,
}

impl Recording {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn last_user_prompt(&self) -> String {
        self.prompts
            .lock()
            .unwrap()
            .last()
            .map(|(_, user)| user.clone())
            .unwrap_or_default()
    }
}

impl CompletionBackend for Recording {
    fn name(&self) -> &str {
        "recording"
    }

    fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }
}

/// Backend whose every call fails.
struct Unreachable;

impl CompletionBackend for Unreachable {
    fn name(&self) -> &str {
        "unreachable"
    }

    fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Err(Error::Http("connection timed out".to_string()))
    }
}

#[test]
fn test_generation_uses_backend_reply() {
    let backend = Recording::new("# Faith\r\n\r\n\r\n\r\nStanding firm.  ");
    let generator = Generator::with_backend(backend.clone());

    let request = GenerationRequest::new(ContentType::Sermon, "Faith")
        .with_scripture("Hebrews 11:1")
        .with_audience("Youth");
    let response = generator.generate(&request);

    assert_eq!(response.status, GenerationStatus::Success);
    assert_eq!(response.title, "Sermon: Faith");
    assert!(response.content.starts_with("# Faith"));
    assert!(!response.content.contains("\n\n\n"));

    let prompt = backend.last_user_prompt();
    assert!(prompt.contains("\"Faith\""));
    assert!(prompt.contains("Hebrews 11:1"));
    assert!(prompt.contains("Youth"));
}

#[test]
fn test_generation_falls_back_to_demo() {
    let generator = Generator::with_backend(Arc::new(Unreachable));
    let request = GenerationRequest::new(ContentType::BibleStudy, "Prayer");
    let response = generator.generate(&request);

    assert_eq!(response.status, GenerationStatus::Demo);
    assert_eq!(response.title, "Bible Study: Prayer");
    assert!(response.content.contains(DEMO_MARKER));
}

#[test]
fn test_every_content_type_has_demo() {
    let generator = Generator::demo();
    for content_type in ContentType::ALL {
        let response = generator.generate(&GenerationRequest::new(content_type, "Grace"));
        assert_eq!(response.status, GenerationStatus::Demo);
        assert!(!pulpit::parse(&response.content).is_empty(), "{}", content_type);
    }
}

#[test]
fn test_suggestions_from_backend() {
    let backend = Recording::new("Here you go:\n[\"Hope\", \" Rest \", \"\"]\nEnjoy!");
    let generator = Generator::with_backend(backend);

    match generator.handle(&GenerationRequest::suggestions(ContentType::Devotional)) {
        GenerateReply::Suggestions(s) => assert_eq!(s.suggestions, vec!["Hope", "Rest"]),
        GenerateReply::Content(_) => panic!("expected suggestions"),
    }
}

#[test]
fn test_suggestions_fall_back_when_unparsable() {
    let generator = Generator::with_backend(Recording::new("no list here"));
    let response = generator.suggest(ContentType::Prayer, "Families");
    assert!(!response.suggestions.is_empty());

    let generator = Generator::with_backend(Arc::new(Unreachable));
    assert_eq!(
        generator.suggest(ContentType::Prayer, "Families").suggestions,
        response.suggestions
    );
}

#[test]
fn test_refine_with_and_without_backend() {
    let request = RefineRequest::new(
        ContentType::Devotional,
        "Devotional: Rest",
        "# Rest\nCome to me",
        "Make it shorter",
    );

    let backend = Recording::new("# Rest\nCome.");
    let refined = Generator::with_backend(backend.clone()).refine(&request);
    assert_eq!(refined.status, GenerationStatus::Success);
    assert_eq!(refined.content, "# Rest\nCome.");
    assert!(backend.last_user_prompt().contains("Make it shorter"));

    let unchanged = Generator::demo().refine(&request);
    assert_eq!(unchanged.status, GenerationStatus::Demo);
    assert_eq!(unchanged.content, "# Rest\nCome to me");
    assert_eq!(unchanged.title, "Devotional: Rest");
}

#[test]
fn test_config_without_key_serves_demo() {
    let generator = Generator::from_config(&GeneratorConfig::new().with_api_key("  ")).unwrap();
    assert!(!generator.has_backend());
}

#[test]
fn test_api_generate_through_backend() {
    let api = Api::new(
        BibleService::offline(),
        Generator::with_backend(Recording::new("# Welcome\n- Coffee at 9")),
    );
    let response = api.handle(&ApiRequest::post(
        "/api/generate",
        r#"{"contentType":"announcement","topic":"Potluck","targetAudience":""}"#,
    ));
    assert_eq!(response.status, 200);

    let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(value["title"], "Announcement: Potluck");
    assert_eq!(value["status"], "success");
    assert_eq!(value["content"], "# Welcome\n- Coffee at 9");
}

#[test]
fn test_api_refine() {
    let api = Api::offline();
    let response = api.handle(&ApiRequest::post(
        "/api/refine",
        r##"{"contentType":"sermon","title":"Sermon: Hope","content":"# Hope","instruction":"Add a story"}"##,
    ));
    let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(value["status"], "demo");
    assert_eq!(value["content"], "# Hope");

    let response = api.handle(&ApiRequest::post("/api/refine", r#"{"content":"x"}"#));
    assert_eq!(response.status, 400);
}

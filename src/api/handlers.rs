//! Route handlers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ApiRequest, ApiResponse, Method, Query};
use crate::bible::BibleService;
use crate::error::Error;
use crate::generate::{ContentType, GenerationRequest, GenerationStatus, Generator, RefineRequest};
use crate::model::ContentDocument;
use crate::parser::LineClassifier;
use crate::render::{to_print_html, ParsedView, PrintOptions, Theme};
use crate::scripture::{ReferenceMatch, ScriptureRecognizer, ScriptureReference};

#[derive(Debug, Deserialize)]
struct ParseBody {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ReferencesBody {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportBody {
    #[serde(default)]
    title: String,
    content: String,
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    theme: Option<String>,
}

/// A recognized reference with its strict parse, when it has one.
#[derive(Debug, Serialize)]
struct FoundReference {
    #[serde(flatten)]
    found: ReferenceMatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<ScriptureReference>,
}

/// The API: verse lookup, generation, parsing and export.
#[derive(Debug, Clone, Default)]
pub struct Api {
    bible: BibleService,
    generator: Generator,
    classifier: LineClassifier,
    recognizer: ScriptureRecognizer,
}

impl Api {
    /// Create an API over a verse service and a generator.
    pub fn new(bible: BibleService, generator: Generator) -> Self {
        Self {
            bible,
            generator,
            ..Self::default()
        }
    }

    /// Create an API with no network access: static verses and demo content.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn bible(&self) -> &BibleService {
        &self.bible
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Route a request.
    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let response = match (&request.method, request.path.trim_end_matches('/')) {
            (Method::Get, "/api/bible") => self.bible_action(&request.query),
            (Method::Post, "/api/generate") => self.generate(&request.body),
            (Method::Post, "/api/refine") => self.refine(&request.body),
            (Method::Post, "/api/parse") => self.parse(&request.body),
            (Method::Post, "/api/references") => self.references(&request.body),
            (Method::Post, "/api/export") => self.export(&request.body),
            _ => ApiResponse::error(404, "Not found"),
        };
        log::debug!(
            "{:?} {} -> {}",
            request.method,
            request.path,
            response.status
        );
        response
    }

    fn bible_action(&self, query: &Query) -> ApiResponse {
        match query.get("action") {
            Some("books") => ApiResponse::json(200, &json!({ "books": self.bible.books() })),
            Some("chapters") => match query.get("book") {
                Some(book) => {
                    ApiResponse::json(200, &json!({ "chapters": self.bible.chapters(book) }))
                }
                None => invalid_action(),
            },
            Some("verse") => self.verse(query),
            Some("search") => match query.get("q") {
                Some(q) => ApiResponse::json(200, &json!({ "results": self.bible.search(q) })),
                None => invalid_action(),
            },
            Some("passage") => self.passage(query),
            _ => invalid_action(),
        }
    }

    fn verse(&self, query: &Query) -> ApiResponse {
        let (Some(book), Some(chapter)) = (query.get("book"), query.get("chapter")) else {
            return invalid_action();
        };
        let Ok(chapter) = chapter.trim().parse::<u32>() else {
            return invalid_action();
        };
        let verse = match query.get("verse").map(|v| v.trim().parse::<u32>()) {
            None => 1,
            Some(Ok(verse)) => verse,
            Some(Err(_)) => return invalid_action(),
        };

        match self.bible.verse(book, chapter, verse) {
            Ok(verse) => ApiResponse::json(200, &verse),
            Err(e) => not_found(e),
        }
    }

    fn passage(&self, query: &Query) -> ApiResponse {
        let Some(text) = query.get("ref") else {
            return invalid_action();
        };
        let Some(reference) = ScriptureReference::parse(text) else {
            return ApiResponse::error(400, "Invalid reference");
        };
        match self.bible.passage(&reference) {
            Ok(passage) => ApiResponse::json(200, &passage),
            Err(e) => not_found(e),
        }
    }

    fn generate(&self, body: &str) -> ApiResponse {
        match read_body::<GenerationRequest>(body) {
            Ok(request) => ApiResponse::json(200, &self.generator.handle(&request)),
            Err(response) => response,
        }
    }

    fn refine(&self, body: &str) -> ApiResponse {
        match read_body::<RefineRequest>(body) {
            Ok(request) => ApiResponse::json(200, &self.generator.refine(&request)),
            Err(response) => response,
        }
    }

    fn parse(&self, body: &str) -> ApiResponse {
        match read_body::<ParseBody>(body) {
            Ok(ParseBody { content }) => {
                let parsed = self.classifier.parse(&content);
                ApiResponse::json(200, &ParsedView::new(&parsed))
            }
            Err(response) => response,
        }
    }

    fn references(&self, body: &str) -> ApiResponse {
        match read_body::<ReferencesBody>(body) {
            Ok(ReferencesBody { text }) => {
                let references: Vec<FoundReference> = self
                    .recognizer
                    .find(&text)
                    .into_iter()
                    .map(|found| FoundReference {
                        parsed: found.reference(),
                        found,
                    })
                    .collect();
                ApiResponse::json(200, &json!({ "references": references }))
            }
            Err(response) => response,
        }
    }

    fn export(&self, body: &str) -> ApiResponse {
        let export = match read_body::<ExportBody>(body) {
            Ok(export) => export,
            Err(response) => return response,
        };

        let theme = export
            .theme
            .as_deref()
            .map(Theme::from_lenient)
            .unwrap_or_default();
        let document = ContentDocument::new(
            export.title,
            export.content,
            export.content_type,
            GenerationStatus::Success,
        );
        match to_print_html(&document, &PrintOptions::new().with_theme(theme)) {
            Ok(html) => ApiResponse::html(200, html),
            Err(e) => {
                log::error!("export failed: {}", e);
                ApiResponse::error(500, "Export failed")
            }
        }
    }
}

fn read_body<T: DeserializeOwned>(body: &str) -> std::result::Result<T, ApiResponse> {
    serde_json::from_str(body).map_err(|e| {
        log::debug!("rejected request body: {}", e);
        ApiResponse::error(400, "Invalid request body")
    })
}

fn invalid_action() -> ApiResponse {
    ApiResponse::error(400, "Invalid action")
}

fn not_found(err: Error) -> ApiResponse {
    log::debug!("{}", err);
    ApiResponse::error(404, "Verse not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_books_and_chapters() {
        let api = Api::offline();
        let books = api.handle(&ApiRequest::get("/api/bible?action=books"));
        assert_eq!(body(&books)["books"].as_array().unwrap().len(), 66);

        let chapters = api.handle(&ApiRequest::get("/api/bible?action=chapters&book=Psalms"));
        assert_eq!(body(&chapters)["chapters"].as_array().unwrap().len(), 150);
    }

    #[test]
    fn test_verse_from_static_table() {
        let api = Api::offline();
        let response =
            api.handle(&ApiRequest::get("/api/bible?action=verse&book=John&chapter=3&verse=16"));
        assert_eq!(response.status, 200);
        let value = body(&response);
        assert_eq!(value["reference"], "John 3:16");
        assert_eq!(value["version"], "KJV");
    }

    #[test]
    fn test_verse_not_found() {
        let api = Api::offline();
        let response =
            api.handle(&ApiRequest::get("/api/bible?action=verse&book=John&chapter=3&verse=99"));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"error":"Verse not found"}"#);
    }

    #[test]
    fn test_invalid_action() {
        let api = Api::offline();
        for url in [
            "/api/bible",
            "/api/bible?action=unknown",
            "/api/bible?action=chapters",
            "/api/bible?action=verse&book=John",
            "/api/bible?action=search&q=",
        ] {
            let response = api.handle(&ApiRequest::get(url));
            assert_eq!(response.status, 400, "{}", url);
            assert_eq!(response.body, r#"{"error":"Invalid action"}"#);
        }
    }

    #[test]
    fn test_passage() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::get("/api/bible?action=passage&ref=John%203:16-17"));
        assert_eq!(response.status, 200);
        let value = body(&response);
        assert_eq!(value["verses"].as_array().unwrap().len(), 2);
        assert_eq!(value["verses"][0]["number"], 16);
    }

    #[test]
    fn test_generate_demo_and_bad_body() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::post(
            "/api/generate",
            r#"{"contentType":"devotional","topic":"Rest"}"#,
        ));
        assert_eq!(response.status, 200);
        let value = body(&response);
        assert_eq!(value["title"], "Devotional: Rest");
        assert_eq!(value["status"], "demo");

        let response = api.handle(&ApiRequest::post("/api/generate", "{not json"));
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_suggestions_fallback() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::post(
            "/api/generate",
            r#"{"contentType":"sermon","topic":"SUGGEST_TOPICS"}"#,
        ));
        let value = body(&response);
        assert!(!value["suggestions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_parse_and_references() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::post("/api/parse", r##"{"content":"# Hope\n- a"}"##));
        let value = body(&response);
        assert_eq!(value["headings"][0]["id"], "h1");
        assert_eq!(value["nodes"][1]["node"], "bulletGroupStart");

        let response = api.handle(&ApiRequest::post(
            "/api/references",
            r#"{"text":"See John 3:16 and Romans 12:1-2."}"#,
        ));
        let value = body(&response);
        assert_eq!(value["references"][0]["text"], "John 3:16");
        assert_eq!(value["references"][1]["parsed"]["verseEnd"], 2);
    }

    #[test]
    fn test_export_html() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::post(
            "/api/export",
            r##"{"title":"Hope","content":"# Hope","contentType":"sermon","theme":"modern"}"##,
        ));
        assert_eq!(response.status, 200);
        assert!(response.content_type.starts_with("text/html"));
        assert!(response.body.contains("theme-modern"));
    }

    #[test]
    fn test_unknown_route() {
        let api = Api::offline();
        let response = api.handle(&ApiRequest::get("/api/generate"));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"error":"Not found"}"#);
    }
}

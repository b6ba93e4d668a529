//! Content generation: prompts, completion backends and demo fallbacks.

mod backend;
mod config;
mod content_type;
mod demo;
mod generator;
mod prompts;
mod request;
mod suggestions;

#[cfg(feature = "remote")]
pub use backend::OpenAiBackend;
pub use backend::{ChatMessage, ChatRequest, ChatResponse, CompletionBackend, MessageContent};
pub use config::{GeneratorConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use content_type::{ContentType, GenerationStatus};
pub use demo::{demo_content, demo_response, DEMO_MARKER};
pub use generator::Generator;
pub use prompts::{suggestion_prompt, user_prompt, SUGGEST_SYSTEM_PROMPT, SYSTEM_PROMPT};
pub use request::{
    GenerateReply, GenerationRequest, GenerationResponse, RefineRequest, SuggestionResponse,
    DEFAULT_AUDIENCE, SUGGEST_TOPICS,
};
pub use suggestions::{default_suggestions, parse_suggestions};

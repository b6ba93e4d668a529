//! Scripture references: recognition in prose and strict parsing.
//!
//! The recognizer is pure and performs no lookups. Its matches are re-parsed
//! with [`ScriptureReference::parse`] to build verse requests.

mod recognizer;
mod reference;

pub use recognizer::{find_references, ReferenceMatch, ScriptureRecognizer, Segment};
pub use reference::ScriptureReference;

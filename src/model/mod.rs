//! Document model types for generated content.
//!
//! This module defines the intermediate representation that bridges line
//! classification and rendering. Everything here is created fresh per
//! rendering pass and carries no state between passes.

mod document;
mod item;
mod node;
mod outline;

pub use document::{ContentDocument, ParsedContent};
pub use item::{ContentItem, ItemKind};
pub use node::{Block, GroupedNode};
pub use outline::{slugify, Heading, Outline};

//! Grouped render nodes.

use serde::{Deserialize, Serialize};

use super::ContentItem;

/// A node in the grouped render sequence.
///
/// Group markers open a run of list items; the run ends at the next node that
/// is not a list item of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum GroupedNode {
    /// Opens a run of plain and nested bullet items
    BulletGroupStart,

    /// Opens a run of numbered items
    NumberedGroupStart,

    /// A classified item
    Item(ContentItem),
}

impl GroupedNode {
    /// Check if this node is a group marker.
    pub fn is_marker(&self) -> bool {
        !matches!(self, GroupedNode::Item(_))
    }

    /// Get the wrapped item, if any.
    pub fn item(&self) -> Option<&ContentItem> {
        match self {
            GroupedNode::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// The grouped sequence folded into containers, for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "block", content = "items", rename_all = "camelCase")]
pub enum Block {
    /// A standalone item
    Item(ContentItem),

    /// A bullet list container
    BulletList(Vec<ContentItem>),

    /// A numbered list container
    NumberedList(Vec<ContentItem>),
}

impl Block {
    /// Items contained in the block.
    pub fn items(&self) -> &[ContentItem] {
        match self {
            Block::Item(item) => std::slice::from_ref(item),
            Block::BulletList(items) | Block::NumberedList(items) => items,
        }
    }
}

//! List grouping.

use crate::model::{Block, ContentItem, GroupedNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenGroup {
    None,
    Bullet,
    Numbered,
}

impl OpenGroup {
    fn of(item: &ContentItem) -> Self {
        if item.is_bullet() {
            OpenGroup::Bullet
        } else if item.is_numbered() {
            OpenGroup::Numbered
        } else {
            OpenGroup::None
        }
    }
}

/// Insert group markers before each maximal run of bullet or numbered items.
///
/// Any non-list item closes the open group. A bullet run directly followed by
/// a numbered run closes one group and opens the other.
pub fn group(items: &[ContentItem]) -> Vec<GroupedNode> {
    let mut nodes = Vec::with_capacity(items.len() + items.len() / 4);
    let mut open = OpenGroup::None;

    for item in items {
        let kind = OpenGroup::of(item);
        if kind != open {
            match kind {
                OpenGroup::Bullet => nodes.push(GroupedNode::BulletGroupStart),
                OpenGroup::Numbered => nodes.push(GroupedNode::NumberedGroupStart),
                OpenGroup::None => {}
            }
            open = kind;
        }
        nodes.push(GroupedNode::Item(item.clone()));
    }

    nodes
}

/// Fold a grouped node sequence into blocks.
pub fn blocks(nodes: &[GroupedNode]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<(OpenGroup, Vec<ContentItem>)> = None;

    for node in nodes {
        match node {
            GroupedNode::BulletGroupStart | GroupedNode::NumberedGroupStart => {
                if let Some(open) = current.take() {
                    blocks.push(close(open));
                }
                let kind = if matches!(node, GroupedNode::BulletGroupStart) {
                    OpenGroup::Bullet
                } else {
                    OpenGroup::Numbered
                };
                current = Some((kind, Vec::new()));
            }
            GroupedNode::Item(item) => {
                let kind = OpenGroup::of(item);
                match current.as_mut() {
                    Some((open, items)) if *open == kind => items.push(item.clone()),
                    _ => {
                        if let Some(open) = current.take() {
                            blocks.push(close(open));
                        }
                        blocks.push(Block::Item(item.clone()));
                    }
                }
            }
        }
    }

    if let Some(open) = current.take() {
        blocks.push(close(open));
    }
    blocks
}

fn close((kind, items): (OpenGroup, Vec<ContentItem>)) -> Block {
    match kind {
        OpenGroup::Numbered => Block::NumberedList(items),
        _ => Block::BulletList(items),
    }
}

//! Heading outline (table of contents).

use serde::{Deserialize, Serialize};

/// A heading extracted from content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Sequential anchor id (`h1`, `h2`, ...)
    pub id: String,

    /// Heading text as written
    pub text: String,

    /// Nesting level (1-3)
    pub level: u8,

    /// Text-derived slug; not guaranteed unique
    pub slug: String,
}

impl Heading {
    /// Create a heading for the `ordinal`-th heading of a document (1-indexed).
    pub fn new(ordinal: usize, text: impl Into<String>, level: u8) -> Self {
        let text = text.into();
        Self {
            id: format!("h{}", ordinal),
            slug: slugify(&text),
            text,
            level: level.clamp(1, 3),
        }
    }
}

/// Ordered list of headings in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    /// Headings in document order
    pub headings: Vec<Heading>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self {
            headings: Vec::new(),
        }
    }

    /// Append a heading, assigning the next sequential id.
    pub fn push(&mut self, text: impl Into<String>, level: u8) -> &Heading {
        let ordinal = self.headings.len() + 1;
        self.headings.push(Heading::new(ordinal, text, level));
        &self.headings[ordinal - 1]
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Iterate headings.
    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.headings.iter()
    }

    /// Headings at or above the given depth (1 = top level only).
    pub fn to_depth(&self, max_level: u8) -> Vec<&Heading> {
        self.headings
            .iter()
            .filter(|h| h.level <= max_level)
            .collect()
    }

    /// Find a heading by its anchor id.
    pub fn get(&self, id: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.id == id)
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

/// Lowercase text and collapse each run of non-alphanumerics into one `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Point 1: The Biblical Foundation"), "point-1-the-biblical-foundation");
        assert_eq!(slugify("  Welcome & Announcements!  "), "welcome-announcements");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_outline_ids_are_sequential() {
        let mut outline = Outline::new();
        outline.push("Sermon", 1);
        outline.push("Introduction", 2);
        outline.push("Detail", 3);
        outline.push("Conclusion", 2);

        let ids: Vec<&str> = outline.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2", "h3", "h4"]);
        assert_eq!(outline.to_depth(2).len(), 3);
        assert_eq!(outline.get("h3").map(|h| h.level), Some(3));
    }
}

//! Content types and generation status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of church content to generate.
///
/// Deserialization is lenient: unknown names become [`ContentType::Sermon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum ContentType {
    #[default]
    Sermon,
    Devotional,
    BibleStudy,
    Prayer,
    Announcement,
    Bulletin,
}

impl ContentType {
    /// All content types in menu order.
    pub const ALL: [ContentType; 6] = [
        ContentType::Sermon,
        ContentType::Devotional,
        ContentType::BibleStudy,
        ContentType::Prayer,
        ContentType::Announcement,
        ContentType::Bulletin,
    ];

    /// Wire name ("bibleStudy").
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Sermon => "sermon",
            ContentType::Devotional => "devotional",
            ContentType::BibleStudy => "bibleStudy",
            ContentType::Prayer => "prayer",
            ContentType::Announcement => "announcement",
            ContentType::Bulletin => "bulletin",
        }
    }

    /// Human label ("Bible Study").
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Sermon => "Sermon",
            ContentType::Devotional => "Devotional",
            ContentType::BibleStudy => "Bible Study",
            ContentType::Prayer => "Prayer",
            ContentType::Announcement => "Announcement",
            ContentType::Bulletin => "Bulletin",
        }
    }

    /// Parse a wire name, falling back to sermon for anything unknown.
    pub fn from_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown content type {:?}, using sermon", name);
            ContentType::Sermon
        })
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        ContentType::ALL
            .iter()
            .find(|t| t.as_str().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| Error::InvalidRequest(format!("unknown content type: {}", s)))
    }
}

impl From<String> for ContentType {
    fn from(name: String) -> Self {
        ContentType::from_lenient(&name)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where generated content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Produced by the completion backend
    Success,
    /// Produced from a fixed template
    Demo,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Success => "success",
            GenerationStatus::Demo => "demo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("bibleStudy".parse::<ContentType>().unwrap(), ContentType::BibleStudy);
        assert_eq!("bible-study".parse::<ContentType>().unwrap(), ContentType::BibleStudy);
        assert_eq!("Bulletin".parse::<ContentType>().unwrap(), ContentType::Bulletin);
        assert!("poem".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_lenient_deserialize() {
        let t: ContentType = serde_json::from_str("\"devotional\"").unwrap();
        assert_eq!(t, ContentType::Devotional);
        let t: ContentType = serde_json::from_str("\"limerick\"").unwrap();
        assert_eq!(t, ContentType::Sermon);
    }

    #[test]
    fn test_serialize_camel_case() {
        assert_eq!(serde_json::to_string(&ContentType::BibleStudy).unwrap(), "\"bibleStudy\"");
        assert_eq!(serde_json::to_string(&GenerationStatus::Demo).unwrap(), "\"demo\"");
    }
}

//! Topic suggestions: fallback lists and parsing of generated arrays.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ContentType;

/// First `[` through last `]`, across lines.
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[\s\S]*\]").unwrap());

/// Fixed suggestions for a content type.
pub fn default_suggestions(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Sermon => &[
            "Faith in Difficult Times",
            "The Power of Prayer",
            "Living for Christ",
            "God's Unconditional Love",
            "Walking by Faith",
            "Trusting God's Plan",
        ],
        ContentType::Devotional => &[
            "Morning Blessings",
            "Trusting God's Plan",
            "Daily Guidance",
            "Peace in Chaos",
            "God's Presence",
        ],
        ContentType::BibleStudy => &[
            "Exodus: Liberation",
            "Psalms of Praise",
            "Life of Christ",
            "Epistles: Living Faith",
            "Prophecy Today",
        ],
        ContentType::Prayer => &[
            "Church Unity",
            "Community Needs",
            "Missionaries",
            "Personal Growth",
            "Global Revival",
        ],
        ContentType::Announcement => &[
            "Special Events",
            "Youth Program",
            "Outreach Initiative",
            "Fellowship Gathering",
            "Worship Schedule",
        ],
        ContentType::Bulletin => &[
            "Weekly Highlights",
            "Sabbath Service",
            "Midweek Meeting",
            "Community Outreach",
            "Youth Fellowship",
        ],
    }
}

/// Owned copy of the fallback list.
pub fn fallback(content_type: ContentType) -> Vec<String> {
    default_suggestions(content_type)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Extract a JSON string array from generated text.
///
/// Returns None when no array is present, it does not parse as strings, or
/// it holds no non-blank entries.
pub fn parse_suggestions(text: &str) -> Option<Vec<String>> {
    let span = JSON_ARRAY.find(text)?;
    let parsed: Vec<String> = match serde_json::from_str(span.as_str()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("could not parse suggestions: {}", e);
            return None;
        }
    };

    let suggestions: Vec<String> = parsed
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if suggestions.is_empty() {
        None
    } else {
        Some(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sizes() {
        for content_type in ContentType::ALL {
            let n = default_suggestions(content_type).len();
            assert!((5..=6).contains(&n), "{}: {}", content_type, n);
        }
    }

    #[test]
    fn test_parse_wrapped_array() {
        let text = "Here you go:\n```json\n[\"Hope\", \"Rest\",\n \"Joy\"]\n```";
        assert_eq!(
            parse_suggestions(text),
            Some(vec!["Hope".to_string(), "Rest".to_string(), "Joy".to_string()])
        );
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_suggestions("no array here"), None);
        assert_eq!(parse_suggestions("[1, 2, 3]"), None);
        assert_eq!(parse_suggestions("[\"a\"] and [\"b\"]"), None);
        assert_eq!(parse_suggestions("[]"), None);
    }
}

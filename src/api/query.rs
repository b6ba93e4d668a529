//! Query string parsing.

/// Decoded query parameters, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parse `a=1&b=two%20words`. `+` decodes to a space; undecodable
    /// values are kept as given.
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// First non-empty value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Check if no parameters were given.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_decode() {
        let query = Query::parse("action=passage&ref=John%203:16-18&q=love+one+another");
        assert_eq!(query.get("action"), Some("passage"));
        assert_eq!(query.get("ref"), Some("John 3:16-18"));
        assert_eq!(query.get("q"), Some("love one another"));
    }

    #[test]
    fn test_empty_values_are_missing() {
        let query = Query::parse("book=&chapter=3&flag");
        assert_eq!(query.get("book"), None);
        assert_eq!(query.get("flag"), None);
        assert_eq!(query.get("chapter"), Some("3"));
    }

    #[test]
    fn test_empty_query() {
        assert!(Query::parse("").is_empty());
    }
}

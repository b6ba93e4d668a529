//! Section splitting on heading boundaries.

use serde::{Deserialize, Serialize};

/// Role of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    /// `#` heading text
    Title,
    /// `##` heading text
    Section,
    /// `###` heading text
    Subsection,
    /// Text between headings
    Body,
}

/// A run of text with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: String,
}

fn heading_of(line: &str) -> Option<(SectionKind, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let kind = match hashes {
        1 => SectionKind::Title,
        2 => SectionKind::Section,
        3 => SectionKind::Subsection,
        _ => return None,
    };
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) || rest.trim().is_empty() {
        return None;
    }
    Some((kind, rest.trim()))
}

/// Split text into heading and body sections.
///
/// Headings must start at column zero. Empty bodies are omitted. Text
/// without any heading yields one body section holding the input unchanged.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut body: Vec<&str> = Vec::new();

    let flush = |body: &mut Vec<&str>, sections: &mut Vec<Section>| {
        let joined = body.join("\n");
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            sections.push(Section {
                kind: SectionKind::Body,
                content: trimmed.to_string(),
            });
        }
        body.clear();
    };

    for line in text.lines() {
        match heading_of(line) {
            Some((kind, title)) => {
                flush(&mut body, &mut sections);
                sections.push(Section {
                    kind,
                    content: title.to_string(),
                });
            }
            None => body.push(line),
        }
    }
    flush(&mut body, &mut sections);

    if sections.is_empty() {
        sections.push(Section {
            kind: SectionKind::Body,
            content: text.to_string(),
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sections() {
        let text = "# Title\nIntro line\n\n## Part\nBody\n### Sub";
        let kinds: Vec<SectionKind> = split_sections(text).iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Title,
                SectionKind::Body,
                SectionKind::Section,
                SectionKind::Body,
                SectionKind::Subsection,
            ]
        );
    }

    #[test]
    fn test_no_headings() {
        let sections = split_sections("just text");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Body);
        assert_eq!(sections[0].content, "just text");
    }
}

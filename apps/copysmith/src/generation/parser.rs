//! Completion parser — splits raw model output into labeled copy fields.
//!
//! This is a best-effort line scanner, not a grammar: it looks for the four
//! section markers case-insensitively, assigns following text to the matched
//! field until the next marker, and discards anything before the first marker.
//! Malformed output degrades to empty fields; the parser never errors.

use serde::{Deserialize, Serialize};

/// Structured marketing copy produced from one completion.
/// Fields the parser could not locate stay empty rather than failing the
/// whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headline: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Headline,
    Description,
    Hashtags,
    Cta,
}

/// Recognized marker keywords, longest-first where prefixes overlap.
const MARKERS: &[(&str, Section)] = &[
    ("call to action", Section::Cta),
    ("call-to-action", Section::Cta),
    ("cta", Section::Cta),
    ("headline", Section::Headline),
    ("description", Section::Description),
    ("hashtags", Section::Hashtags),
    ("hashtag", Section::Hashtags),
];

/// Checks whether a line is a section marker. Returns the section and any
/// content that follows the marker on the same line.
fn match_marker(line: &str) -> Option<(Section, Option<&str>)> {
    // Skip leading decoration: numbering, bullets, emoji, markdown headers
    let start = line.find(|c: char| c.is_alphabetic())?;
    let rest = &line[start..];

    for (keyword, section) in MARKERS {
        let Some(prefix) = rest.get(..keyword.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(keyword) {
            continue;
        }
        let after = &rest[keyword.len()..];
        // Word boundary: "cta" must not match "octane", "headline" not "headliner"
        if after.starts_with(|c: char| c.is_alphanumeric()) {
            continue;
        }
        let inline = after.trim_start().trim_start_matches(':').trim();
        let inline = (!inline.is_empty()).then_some(inline);
        return Some((*section, inline));
    }

    None
}

/// Splits hashtag section text into normalized tags: `#` stripped, order kept.
fn split_hashtags(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| {
            token
                .replace('#', "")
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Parses raw completion text into a `GeneratedCopy`. Never errors.
pub fn parse_completion(raw: &str) -> GeneratedCopy {
    let mut current: Option<Section> = None;
    let mut headline: Vec<&str> = Vec::new();
    let mut description: Vec<&str> = Vec::new();
    let mut hashtags: Vec<&str> = Vec::new();
    let mut cta: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if let Some((section, inline)) = match_marker(line) {
            current = Some(section);
            if let Some(text) = inline {
                match section {
                    Section::Headline => headline.push(text),
                    Section::Description => description.push(text),
                    Section::Hashtags => hashtags.push(text),
                    Section::Cta => cta.push(text),
                }
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Text before the first marker is discarded
        match current {
            Some(Section::Headline) => headline.push(trimmed),
            Some(Section::Description) => description.push(trimmed),
            Some(Section::Hashtags) => hashtags.push(trimmed),
            Some(Section::Cta) => cta.push(trimmed),
            None => {}
        }
    }

    GeneratedCopy {
        headline: headline.join(" "),
        description: description.join(" "),
        hashtags: split_hashtags(&hashtags.join(" ")),
        cta: cta.join(" "),
    }
}

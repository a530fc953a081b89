//! Tone resolution — guesses a tone category from free text when the caller
//! does not pick one.
//!
//! Pure dictionary lookup over a static lexicon. Deterministic, no external
//! calls: the same input text always resolves to the same category.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylistic label used to steer generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ToneCategory {
    Exciting,
    #[default]
    Professional,
    Casual,
}

impl fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneCategory::Exciting => write!(f, "Exciting"),
            ToneCategory::Professional => write!(f, "Professional"),
            ToneCategory::Casual => write!(f, "Casual"),
        }
    }
}

/// Keyword lexicon per category. Matching is done on lowercased whole tokens.
const EXCITING_KEYWORDS: &[&str] = &[
    "amazing",
    "exciting",
    "thrilling",
    "bold",
    "adventure",
    "revolutionary",
    "epic",
    "unleash",
    "instant",
    "powerful",
    "extreme",
    "vibrant",
    "breakthrough",
    "wow",
];

const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "professional",
    "enterprise",
    "reliable",
    "trusted",
    "secure",
    "efficient",
    "proven",
    "compliance",
    "business",
    "quality",
    "expertise",
    "premium",
    "certified",
    "corporate",
];

const CASUAL_KEYWORDS: &[&str] = &[
    "fun",
    "easy",
    "chill",
    "everyday",
    "friendly",
    "simple",
    "cozy",
    "relaxed",
    "handy",
    "casual",
    "laid",
    "hangout",
];

/// Tie-break priority: earlier entries win when hit counts are equal.
const PRIORITY_ORDER: &[(ToneCategory, &[&str])] = &[
    (ToneCategory::Exciting, EXCITING_KEYWORDS),
    (ToneCategory::Professional, PROFESSIONAL_KEYWORDS),
    (ToneCategory::Casual, CASUAL_KEYWORDS),
];

/// Resolves a tone from free text by counting lexicon hits per category.
/// Returns the category with the most hits; ties go to the higher-priority
/// category; text with no lexicon hits at all falls back to the default
/// (`Professional`).
pub fn resolve_tone(text: &str) -> ToneCategory {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut best = ToneCategory::default();
    let mut best_hits = 0usize;

    for (category, keywords) in PRIORITY_ORDER {
        let hits = tokens.iter().filter(|t| keywords.contains(*t)).count();
        // Strictly greater, so earlier categories win ties
        if hits > best_hits {
            best = *category;
            best_hits = hits;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exciting_text_resolves_exciting() {
        let tone = resolve_tone("An epic, thrilling adventure with instant results");
        assert_eq!(tone, ToneCategory::Exciting);
    }

    #[test]
    fn test_professional_text_resolves_professional() {
        let tone = resolve_tone("Trusted enterprise software with proven compliance expertise");
        assert_eq!(tone, ToneCategory::Professional);
    }

    #[test]
    fn test_casual_text_resolves_casual() {
        let tone = resolve_tone("A fun, cozy and friendly spot for everyday hangout");
        assert_eq!(tone, ToneCategory::Casual);
    }

    #[test]
    fn test_no_keywords_returns_default() {
        // Matches the canonical fixture: brand "Acme", product "eco bottle",
        // audience "students" — nothing in the lexicon.
        let tone = resolve_tone("Acme eco bottle students");
        assert_eq!(tone, ToneCategory::Professional);
        assert_eq!(tone, ToneCategory::default());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let text = "bold new business for relaxed professionals";
        let first = resolve_tone(text);
        for _ in 0..10 {
            assert_eq!(resolve_tone(text), first);
        }
    }

    #[test]
    fn test_tie_broken_by_priority_order() {
        // One Exciting hit ("bold") and one Casual hit ("chill"):
        // Exciting outranks Casual in the priority order.
        let tone = resolve_tone("bold chill");
        assert_eq!(tone, ToneCategory::Exciting);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(resolve_tone("EPIC ADVENTURE"), ToneCategory::Exciting);
    }

    #[test]
    fn test_keywords_match_whole_tokens_only() {
        // "funnel" contains "fun" but is not a casual lexicon hit
        assert_eq!(resolve_tone("funnel optimization"), ToneCategory::default());
    }

    #[test]
    fn test_empty_text_returns_default() {
        assert_eq!(resolve_tone(""), ToneCategory::Professional);
    }
}

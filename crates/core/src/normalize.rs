//! Text normalisation of free-text symptom descriptions.
//!
//! Turns arbitrary caller text into a deduplicated list of lowercase symptom
//! phrases: split on separators, strip duration/context expressions, drop
//! stop-words and too-short fragments.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Fragment separators, applied in order.
const SEPARATORS: &[&str] = &[",", ";", " and ", " & ", "\n", " also ", " plus "];

/// Words stripped from fragments before rejoining: pronouns, articles,
/// auxiliary verbs, meta words and time nouns.
const STOP_WORDS: &[&str] = &[
    "i",
    "have",
    "am",
    "experiencing",
    "feeling",
    "symptoms",
    "symptom",
    "for",
    "days",
    "hours",
    "weeks",
    "since",
    "yesterday",
    "today",
    "the",
    "a",
    "an",
    "my",
    "me",
    "is",
    "are",
    "been",
    "being",
];

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\s*(day|days|hour|hours|week|weeks)\b").expect("valid duration pattern")
});

static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(since|for|about|around)\s+\w+\b").expect("valid context pattern")
});

/// Extract normalized symptom phrases from free text.
///
/// The result has set semantics (no duplicates) but keeps first-seen order so
/// repeated analyses of the same input are byte-identical. An input where
/// every fragment filters away yields an empty list; callers must handle zero
/// extracted symptoms.
pub fn extract_symptoms(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let text = text.trim();

    let mut fragments = vec![text.to_string()];
    for sep in SEPARATORS {
        fragments = fragments
            .iter()
            .flat_map(|fragment| fragment.split(sep))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    let mut seen = HashSet::new();
    let mut symptoms = Vec::new();

    for fragment in fragments {
        let fragment = DURATION_RE.replace_all(&fragment, "");
        let fragment = CONTEXT_RE.replace_all(&fragment, "");

        let kept: Vec<&str> = fragment
            .split_whitespace()
            .filter(|word| word.chars().count() > 1 && !STOP_WORDS.contains(word))
            .collect();

        let cleaned = kept.join(" ");
        if cleaned.chars().count() > 2 && seen.insert(cleaned.clone()) {
            symptoms.push(cleaned);
        }
    }

    symptoms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_commas() {
        let symptoms = extract_symptoms("fever, cough, sore throat");
        assert_eq!(symptoms, ["fever", "cough", "sore throat"]);
    }

    #[test]
    fn test_splits_on_word_separators() {
        let symptoms = extract_symptoms("headache and nausea also dizziness plus fatigue");
        assert_eq!(symptoms, ["headache", "nausea", "dizziness", "fatigue"]);
    }

    #[test]
    fn test_strips_duration_expressions() {
        let symptoms = extract_symptoms("cough for 3 days and runny nose since yesterday");
        assert_eq!(symptoms, ["cough", "runny nose"]);
    }

    #[test]
    fn test_strips_filler_words() {
        let symptoms = extract_symptoms("I have been experiencing severe headache");
        assert_eq!(symptoms, ["severe headache"]);
    }

    #[test]
    fn test_lowercases_and_deduplicates() {
        let symptoms = extract_symptoms("Fever, FEVER, fever");
        assert_eq!(symptoms, ["fever"]);
    }

    #[test]
    fn test_drops_short_fragments() {
        let symptoms = extract_symptoms("ab, cough");
        assert_eq!(symptoms, ["cough"]);
    }

    #[test]
    fn test_fully_filtered_input_yields_empty_list() {
        assert!(extract_symptoms("for 3 days").is_empty());
        assert!(extract_symptoms("i am the").is_empty());
    }

    #[test]
    fn test_extracted_symptoms_are_nonempty_and_lowercase() {
        let symptoms = extract_symptoms("Severe Chest Pain and Difficulty Breathing");
        assert!(!symptoms.is_empty());
        for symptom in &symptoms {
            assert!(!symptom.is_empty());
            assert_eq!(symptom, &symptom.to_lowercase());
        }
    }
}

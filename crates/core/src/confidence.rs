//! Heuristic confidence scoring for an analysis.

use crate::ReferenceData;

/// Confidence base value before adjustments.
const BASE_CONFIDENCE: f64 = 0.6;

/// Compute the confidence score for an analysis.
///
/// Starts from 0.6 and adjusts for symptom count, the top match probability
/// (post-boost, as presented to the caller) and the presence of highly
/// specific symptoms, then clamps to `[0.1, 0.9]`.
pub fn confidence_score(
    symptoms: &[String],
    top_probability: Option<f64>,
    reference: &ReferenceData,
) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if symptoms.len() >= 3 {
        confidence += 0.1;
    } else if symptoms.len() == 1 {
        confidence -= 0.1;
    }

    match top_probability {
        Some(probability) if probability > 0.7 => confidence += 0.2,
        Some(_) => {}
        None => confidence -= 0.2,
    }

    let specific = reference
        .specific_symptoms()
        .iter()
        .any(|phrase| symptoms.iter().any(|s| s.contains(phrase)));
    if specific {
        confidence += 0.1;
    }

    confidence.clamp(0.1, 0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::builtin()
    }

    fn symptoms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_symptoms_and_strong_match_raise_confidence() {
        let score = confidence_score(
            &symptoms(&["fever", "cough", "sore throat"]),
            Some(0.78),
            &reference(),
        );
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_single_symptom_lowers_confidence() {
        let score = confidence_score(&symptoms(&["cough"]), Some(0.5), &reference());
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_matches_penalty() {
        let score = confidence_score(&symptoms(&["xyzabc nonsense"]), None, &reference());
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_specific_symptom_bonus() {
        let with = confidence_score(&symptoms(&["chest pain", "nausea"]), Some(0.5), &reference());
        let without = confidence_score(&symptoms(&["cough", "nausea"]), Some(0.5), &reference());
        assert!((with - without - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_always_clamped() {
        // Everything favourable: 0.6 + 0.1 + 0.2 + 0.1 = 1.0 -> 0.9.
        let high = confidence_score(
            &symptoms(&["chest pain", "fever", "cough"]),
            Some(0.95),
            &reference(),
        );
        assert!((high - 0.9).abs() < 1e-9);

        // Everything unfavourable: 0.6 - 0.1 - 0.2 = 0.3, still above floor.
        let low = confidence_score(&symptoms(&["zzz"]), None, &reference());
        assert!((0.1..=0.9).contains(&low));
    }
}

//! Condition matching and scoring.
//!
//! Scores every condition in the reference table against the extracted
//! symptom set with substring containment plus a word-overlap fallback, then
//! ranks the survivors.

use std::collections::HashSet;

use crate::reference::Condition;
use crate::ReferenceData;

/// A scored association between the input and one condition.
#[derive(Clone, Debug)]
pub struct ConditionMatch<'a> {
    pub condition: &'a Condition,
    /// Clamped to `[0, 1]`.
    pub probability: f64,
    /// Number of extracted symptoms with a substring hit.
    pub exact_matches: u32,
    /// `exact_matches + 0.5 * partial word-overlap matches`.
    pub total_score: f64,
}

/// Score and rank all conditions against the extracted symptoms.
///
/// Per extracted symptom, condition symptoms are tried in order: a
/// case-insensitive substring hit in either direction counts as one exact
/// match and stops the scan; otherwise the first condition symptom sharing at
/// least one word contributes a half-point partial match. Conditions with a
/// zero score are dropped.
///
/// The result is sorted descending by `(probability, total_score,
/// exact_matches)`; ordering beyond that key is unspecified.
pub fn match_conditions<'a>(
    symptoms: &[String],
    reference: &'a ReferenceData,
) -> Vec<ConditionMatch<'a>> {
    let mut matches: Vec<ConditionMatch<'a>> = reference
        .conditions()
        .iter()
        .filter_map(|condition| score_condition(symptoms, condition))
        .collect();

    matches.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then(b.total_score.total_cmp(&a.total_score))
            .then(b.exact_matches.cmp(&a.exact_matches))
    });

    matches
}

fn score_condition<'a>(symptoms: &[String], condition: &'a Condition) -> Option<ConditionMatch<'a>> {
    let mut exact_matches = 0u32;
    let mut partial_matches = 0.0f64;

    for symptom in symptoms {
        let exact = condition
            .symptoms
            .iter()
            .any(|cs| cs.contains(symptom.as_str()) || symptom.contains(cs.as_str()));

        if exact {
            exact_matches += 1;
            continue;
        }

        let words: HashSet<&str> = symptom.split_whitespace().collect();
        let overlap = condition
            .symptoms
            .iter()
            .any(|cs| cs.split_whitespace().any(|word| words.contains(word)));

        if overlap {
            partial_matches += 0.5;
        }
    }

    let total_score = f64::from(exact_matches) + partial_matches;
    if total_score == 0.0 {
        return None;
    }

    let mut probability = (total_score / condition.symptoms.len() as f64).min(1.0);
    if exact_matches > 0 {
        probability = (probability * 1.3).min(1.0);
    }

    Some(ConditionMatch {
        condition,
        probability,
        exact_matches,
        total_score,
    })
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
    fn test_cold_and_flu_match_classic_input() {
        let reference = reference();
        let matches = match_conditions(&symptoms(&["fever", "cough", "sore throat"]), &reference);

        let names: Vec<&str> = matches.iter().map(|m| m.condition.name.as_str()).collect();
        assert!(names.contains(&"Common Cold"), "{names:?}");
        assert!(names.contains(&"Influenza (Flu)"), "{names:?}");
        for m in &matches {
            assert!(m.probability > 0.0);
        }
    }

    #[test]
    fn test_probability_is_clamped() {
        let reference = reference();
        let matches = match_conditions(
            &symptoms(&[
                "runny nose",
                "sneezing",
                "cough",
                "sore throat",
                "mild fever",
                "congestion",
            ]),
            &reference,
        );
        for m in &matches {
            assert!((0.0..=1.0).contains(&m.probability), "{}", m.condition.name);
        }
        // Six exact hits against Common Cold's six symptoms saturate at 1.0.
        let cold = matches
            .iter()
            .find(|m| m.condition.name == "Common Cold")
            .expect("cold should match");
        assert!((cold.probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(cold.exact_matches, 6);
    }

    #[test]
    fn test_exact_match_scores_and_boost() {
        let reference = reference();
        let matches = match_conditions(&symptoms(&["fever", "cough", "sore throat"]), &reference);
        let cold = matches
            .iter()
            .find(|m| m.condition.name == "Common Cold")
            .expect("cold should match");

        // "fever" hits "mild fever", "cough" and "sore throat" are direct:
        // 3 exact / 6 condition symptoms * 1.3 boost.
        assert_eq!(cold.exact_matches, 3);
        assert!((cold.total_score - 3.0).abs() < f64::EPSILON);
        assert!((cold.probability - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_word_overlap_counts_half() {
        let reference = reference();
        // "stomach issues" shares the word "stomach" with "stomach pain" but
        // is not a substring match in either direction.
        let matches = match_conditions(&symptoms(&["stomach issues"]), &reference);
        let gastritis = matches
            .iter()
            .find(|m| m.condition.name == "Gastritis")
            .expect("gastritis should match on word overlap");
        assert_eq!(gastritis.exact_matches, 0);
        assert!((gastritis.total_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_overlap_yields_empty_list() {
        let reference = reference();
        let matches = match_conditions(&symptoms(&["xyzabc nonsense"]), &reference);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_sorted_non_increasing_by_score_key() {
        let reference = reference();
        let matches = match_conditions(
            &symptoms(&["fever", "cough", "headache", "fatigue"]),
            &reference,
        );
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.probability, a.total_score, a.exact_matches);
            let key_b = (b.probability, b.total_score, b.exact_matches);
            assert!(key_a >= key_b, "{key_a:?} then {key_b:?}");
        }
    }
}

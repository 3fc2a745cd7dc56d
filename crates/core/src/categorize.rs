//! Body-system categorisation of extracted symptoms.

use std::collections::BTreeMap;

use crate::ReferenceData;

/// Map each symptom to exactly one body-system category.
///
/// Categories are tried in the fixed reference order and keywords are matched
/// by substring containment in either direction; the first hit wins. Symptoms
/// matching no keyword land in `general`. Empty categories are omitted from
/// the result.
pub fn categorize_symptoms(
    symptoms: &[String],
    reference: &ReferenceData,
) -> BTreeMap<String, Vec<String>> {
    let mut categorized: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for symptom in symptoms {
        let mut placed = false;

        for (category, keywords) in reference.categories() {
            if keywords
                .iter()
                .any(|keyword| symptom.contains(keyword.as_str()) || keyword.contains(symptom))
            {
                categorized
                    .entry(category.clone())
                    .or_default()
                    .push(symptom.clone());
                placed = true;
                break;
            }
        }

        if !placed {
            categorized
                .entry("general".to_string())
                .or_default()
                .push(symptom.clone());
        }
    }

    categorized
}

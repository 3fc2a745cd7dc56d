//! Severity assessment and risk factor identification.

use api_shared::Severity;

use crate::ReferenceData;

/// Assess the overall severity of the extracted symptoms.
///
/// Rules are evaluated in strict priority order, first match wins:
/// 1. critical — any symptom contains an emergency phrase
/// 2. high — any symptom contains a high-severity lexical marker
/// 3. medium — four or more symptoms, or any symptom mentions fever
/// 4. low — otherwise
///
/// Age and gender never influence severity, only risk factors.
pub fn assess_severity(symptoms: &[String], reference: &ReferenceData) -> Severity {
    for symptom in symptoms {
        if reference
            .emergency_symptoms()
            .iter()
            .any(|phrase| symptom.contains(phrase))
        {
            return Severity::Critical;
        }
    }

    for symptom in symptoms {
        if reference
            .high_severity_markers()
            .iter()
            .any(|marker| symptom.contains(marker))
        {
            return Severity::High;
        }
    }

    if symptoms.len() >= 4 || symptoms.iter().any(|s| s.contains("fever")) {
        return Severity::Medium;
    }

    Severity::Low
}

/// Derive human-readable risk factor strings from age and symptoms.
///
/// Multiple factors may co-occur; each rule contributes at most one entry.
pub fn identify_risk_factors(age: Option<u32>, symptoms: &[String]) -> Vec<String> {
    let mut risk_factors = Vec::new();

    match age {
        Some(age) if age > 65 => {
            risk_factors.push("Advanced age (increased risk for complications)".to_string());
        }
        Some(age) if age < 5 => {
            risk_factors.push("Young age (requires careful monitoring)".to_string());
        }
        _ => {}
    }

    if symptoms.len() > 5 {
        risk_factors.push("Multiple concurrent symptoms".to_string());
    }

    if symptoms.iter().any(|s| s.contains("fever")) {
        risk_factors.push("Presence of fever (indicates possible infection)".to_string());
    }

    if symptoms.iter().any(|s| s.contains("chest pain")) {
        risk_factors.push("Chest pain (requires cardiac evaluation)".to_string());
    }

    risk_factors
}

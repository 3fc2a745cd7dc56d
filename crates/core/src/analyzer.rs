//! The analysis pipeline entry point.
//!
//! [`SymptomAnalyzer`] wires the pipeline stages together: normalisation,
//! categorisation, severity, risk factors, condition matching, recommendation
//! generation and confidence scoring. One call per request, no shared mutable
//! state.

use std::sync::Arc;

use api_shared::{AnalysisReport, AnalyzeReq, DetailedCondition, SymptomAnalysis};

use crate::{
    categorize, confidence, matcher, normalize, recommend, severity, AnalysisError,
    AnalysisResult, ReferenceData,
};

/// Number of ranked matches presented to the caller.
const MAX_PRESENTED_CONDITIONS: usize = 4;

/// Probability boost applied to the presented top matches.
const PRESENTATION_BOOST: f64 = 1.2;

/// Stateless analyzer over the immutable reference tables.
///
/// Cloning is cheap (shared `Arc`); a single instance can serve arbitrarily
/// many requests in parallel.
#[derive(Clone)]
pub struct SymptomAnalyzer {
    reference: Arc<ReferenceData>,
}

impl SymptomAnalyzer {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Run the full pipeline over one request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] when the symptom text is empty or
    /// whitespace-only; no other failure modes exist in the pure pipeline.
    pub fn analyze(&self, req: &AnalyzeReq) -> AnalysisResult<AnalysisReport> {
        if req.symptoms.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let extracted = normalize::extract_symptoms(&req.symptoms);
        let symptom_categories = categorize::categorize_symptoms(&extracted, &self.reference);
        let severity_assessment = severity::assess_severity(&extracted, &self.reference);
        let risk_factors = severity::identify_risk_factors(req.age, &extracted);

        let symptom_analysis = SymptomAnalysis {
            extracted_symptoms: extracted.clone(),
            symptom_categories,
            severity_assessment,
            risk_factors,
        };

        let possible_conditions = self.detailed_conditions(&extracted);
        let priority_recommendations = recommend::build_recommendations(&symptom_analysis);
        let general_advice = recommend::general_advice(severity_assessment);
        let red_flags = recommend::red_flags(&extracted);
        let follow_up_questions = recommend::follow_up_questions(&symptom_analysis);
        let confidence_score = confidence::confidence_score(
            &extracted,
            possible_conditions.first().map(|c| c.probability),
            &self.reference,
        );

        Ok(AnalysisReport {
            input_text: req.symptoms.clone(),
            symptom_analysis,
            possible_conditions,
            priority_recommendations,
            general_advice,
            red_flags,
            follow_up_questions,
            confidence_score,
            disclaimer: self.reference.disclaimer().to_string(),
        })
    }

    /// Take the top ranked matches and enrich them with supplemental text.
    fn detailed_conditions(&self, symptoms: &[String]) -> Vec<DetailedCondition> {
        matcher::match_conditions(symptoms, &self.reference)
            .into_iter()
            .take(MAX_PRESENTED_CONDITIONS)
            .map(|m| {
                let details = self.reference.condition_details(&m.condition.name);
                DetailedCondition {
                    name: m.condition.name.clone(),
                    probability: (m.probability * PRESENTATION_BOOST).min(1.0),
                    description: m.condition.description.clone(),
                    severity: m.condition.severity,
                    common_symptoms: m.condition.symptoms.clone(),
                    typical_duration: details.typical_duration,
                    when_to_see_doctor: details.when_to_see_doctor,
                    self_care_tips: details.self_care_tips,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use api_shared::{RecommendationType, Severity};

    use super::*;

    fn analyzer() -> SymptomAnalyzer {
        SymptomAnalyzer::new(Arc::new(ReferenceData::builtin()))
    }

    fn request(symptoms: &str) -> AnalyzeReq {
        AnalyzeReq {
            symptoms: symptoms.to_string(),
            age: None,
            gender: None,
            additional_info: None,
        }
    }

    #[test]
    fn test_classic_cold_scenario() {
        let report = analyzer()
            .analyze(&request("fever, cough, sore throat"))
            .expect("analysis should succeed");

        assert_eq!(
            report.symptom_analysis.extracted_symptoms,
            ["fever", "cough", "sore throat"]
        );
        assert_eq!(report.symptom_analysis.severity_assessment, Severity::Medium);

        let names: Vec<&str> = report
            .possible_conditions
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert!(names.contains(&"Common Cold"), "{names:?}");
        assert!(names.contains(&"Influenza (Flu)"), "{names:?}");
        for condition in &report.possible_conditions {
            assert!(condition.probability > 0.0);
        }

        let consult = report
            .priority_recommendations
            .iter()
            .find(|r| r.kind == RecommendationType::ConsultDoctor)
            .expect("medium severity should include a consultation");
        assert_eq!(consult.timeframe, "Within 2-3 days");
    }

    #[test]
    fn test_emergency_scenario_short_circuits() {
        let report = analyzer()
            .analyze(&request("severe chest pain and difficulty breathing"))
            .expect("analysis should succeed");

        assert_eq!(
            report.symptom_analysis.severity_assessment,
            Severity::Critical
        );
        assert_eq!(report.priority_recommendations.len(), 1);
        assert_eq!(
            report.priority_recommendations[0].kind,
            RecommendationType::Emergency
        );
    }

    #[test]
    fn test_empty_input_rejected_before_pipeline() {
        let err = analyzer().analyze(&request("")).expect_err("should reject");
        assert!(matches!(err, AnalysisError::EmptyInput));

        let err = analyzer()
            .analyze(&request("   "))
            .expect_err("should reject whitespace");
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn test_no_overlap_input() {
        let report = analyzer()
            .analyze(&request("xyzabc nonsense"))
            .expect("analysis should succeed");

        assert!(report.possible_conditions.is_empty());
        assert_eq!(report.symptom_analysis.severity_assessment, Severity::Low);
        // Base 0.6, minus 0.1 for the single symptom and 0.2 for no matches.
        assert!((report.confidence_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_at_most_four_conditions_presented() {
        let report = analyzer()
            .analyze(&request("fever, headache, fatigue, nausea, cough, dizziness"))
            .expect("analysis should succeed");
        assert!(report.possible_conditions.len() <= 4);
    }

    #[test]
    fn test_presented_probabilities_are_boosted_and_clamped() {
        let report = analyzer()
            .analyze(&request("fever, cough, sore throat"))
            .expect("analysis should succeed");

        let cold = report
            .possible_conditions
            .iter()
            .find(|c| c.name == "Common Cold")
            .expect("cold should be presented");
        // Raw 0.65 from the matcher, times the 1.2 presentation boost.
        assert!((cold.probability - 0.78).abs() < 1e-9);
        for condition in &report.possible_conditions {
            assert!((0.0..=1.0).contains(&condition.probability));
        }
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let analyzer = analyzer();
        let req = request("I have been feeling tired and have a runny nose for 3 days");
        let first = analyzer.analyze(&req).expect("first run");
        let second = analyzer.analyze(&req).expect("second run");

        let a = serde_json::to_string(&first).expect("serialize first");
        let b = serde_json::to_string(&second).expect("serialize second");
        assert_eq!(a, b);
    }

    #[test]
    fn test_age_feeds_risk_factors_not_severity() {
        let analyzer = analyzer();
        let mut req = request("runny nose");
        req.age = Some(80);
        let report = analyzer.analyze(&req).expect("analysis should succeed");

        assert_eq!(report.symptom_analysis.severity_assessment, Severity::Low);
        assert!(report
            .symptom_analysis
            .risk_factors
            .iter()
            .any(|r| r.contains("Advanced age")));
    }

    #[test]
    fn test_report_always_carries_disclaimer_and_advice() {
        let report = analyzer()
            .analyze(&request("rash"))
            .expect("analysis should succeed");
        assert!(!report.disclaimer.is_empty());
        assert_eq!(report.general_advice.len(), 4);
        assert_eq!(report.red_flags.len(), 4);
        assert!(!report.follow_up_questions.is_empty());
    }
}

//! Wire types for the symptom analysis API.
//!
//! These types form the request/response contract of the REST surface and are
//! also what the core pipeline produces, so a single definition serves both
//! serialisation and OpenAPI documentation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity tier of an analysis or a condition.
///
/// Ordering matters: `Critical > High > Medium > Low` drives recommendation
/// urgency and the priority of the severity assessor's rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Stable string form, matching the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parse from the wire representation.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a prioritized recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Emergency,
    ConsultDoctor,
    SelfCare,
    Monitoring,
}

/// Symptom analysis request body.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReq {
    /// Free-text symptom description, e.g. `"fever, cough, sore throat"`.
    pub symptoms: String,
    /// Optional age in years; only influences risk factors, not severity.
    #[serde(default)]
    pub age: Option<u32>,
    /// Optional gender string; carried through to the audit log only.
    #[serde(default)]
    pub gender: Option<String>,
    /// Optional free-text additional context.
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Structured breakdown of the caller's input.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SymptomAnalysis {
    /// Normalized symptom phrases, deduplicated, first-seen order.
    pub extracted_symptoms: Vec<String>,
    /// Body-system category to the symptoms placed there; empty categories omitted.
    pub symptom_categories: BTreeMap<String, Vec<String>>,
    /// Overall severity tier.
    pub severity_assessment: Severity,
    /// Human-readable risk factor strings.
    pub risk_factors: Vec<String>,
}

/// A matched condition enriched with supplemental guidance text.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailedCondition {
    pub name: String,
    /// Match probability, clamped to `[0, 1]`.
    pub probability: f64,
    pub description: String,
    pub severity: Severity,
    /// Canonical symptom set of the condition.
    pub common_symptoms: Vec<String>,
    pub typical_duration: String,
    pub when_to_see_doctor: String,
    pub self_care_tips: Vec<String>,
}

/// A prioritized recommendation with concrete action steps.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailedRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub message: String,
    pub urgency: Severity,
    pub action_steps: Vec<String>,
    pub timeframe: String,
    pub warning_signs: Vec<String>,
}

/// Full analysis response. All fields are always present.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    /// The caller's original input text.
    pub input_text: String,
    pub symptom_analysis: SymptomAnalysis,
    /// Ranked condition matches, at most four.
    pub possible_conditions: Vec<DetailedCondition>,
    /// Recommendations ordered by urgency; a critical assessment yields a
    /// single emergency entry and nothing else.
    pub priority_recommendations: Vec<DetailedRecommendation>,
    pub general_advice: Vec<String>,
    pub red_flags: Vec<String>,
    pub follow_up_questions: Vec<String>,
    /// Heuristic certainty scalar, clamped to `[0.1, 0.9]`.
    pub confidence_score: f64,
    pub disclaimer: String,
}

/// Summary row for the condition reference listing.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ConditionInfo {
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListConditionsRes {
    pub conditions: Vec<ConditionInfo>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListSymptomsRes {
    /// Known symptom names, sorted alphabetically.
    pub symptoms: Vec<String>,
}

/// A static health tip from the reference data.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthTip {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthTipsRes {
    pub tips: Vec<HealthTip>,
}

/// Aggregate statistics over the audit log.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsRes {
    pub total_analyses: i64,
    /// Severity tier to number of analyses recorded with it.
    pub severity_distribution: BTreeMap<String, i64>,
    /// Mean confidence score rounded to two decimals; zero when empty.
    pub average_confidence: f64,
}

/// Service information returned by the root endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoRes {
    pub name: String,
    pub version: String,
    pub description: String,
    pub features: Vec<String>,
    pub main_endpoint: String,
    pub documentation: String,
    pub health_check: String,
}

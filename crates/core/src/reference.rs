//! Immutable reference tables.
//!
//! All static data the pipeline consults lives here: the condition table, the
//! body-system category keyword lists, the emergency and high-severity phrase
//! sets, and the supplemental reference lists (health tips, common symptoms).
//!
//! The tables are built once at startup by [`ReferenceData::builtin`] and then
//! shared read-only behind an `Arc`; nothing mutates them at runtime, so no
//! synchronisation is needed for parallel request handling.
//!
//! The declaration order of the category lists and their keywords is part of
//! the behaviour: categorisation and scoring use first-match-wins iteration,
//! so reordering entries changes outcomes.

use api_shared::{HealthTip, Severity};

/// A named reference entry with description, canonical symptom set and
/// severity tag. Seeded once, immutable at runtime.
#[derive(Clone, Debug)]
pub struct Condition {
    pub name: String,
    pub description: String,
    /// Lowercased, trimmed canonical symptom phrases.
    pub symptoms: Vec<String>,
    pub severity: Severity,
}

/// Supplemental guidance text for a condition.
#[derive(Clone, Debug)]
pub struct ConditionDetails {
    pub typical_duration: String,
    pub when_to_see_doctor: String,
    pub self_care_tips: Vec<String>,
}

/// Seeded condition table: (name, description, comma-joined symptoms, severity tag).
const CONDITION_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Common Cold",
        "A viral infection of the upper respiratory tract causing mild to moderate symptoms",
        "runny nose,sneezing,cough,sore throat,mild fever,congestion",
        "low",
    ),
    (
        "Influenza (Flu)",
        "Influenza viral infection affecting respiratory system with systemic symptoms",
        "fever,body aches,fatigue,cough,headache,chills,sore throat",
        "medium",
    ),
    (
        "Migraine Headache",
        "Severe headache often with nausea, light sensitivity, and visual disturbances",
        "severe headache,nausea,light sensitivity,visual disturbances,throbbing pain",
        "medium",
    ),
    (
        "Food Poisoning",
        "Illness caused by consuming contaminated food or water",
        "nausea,vomiting,diarrhea,stomach pain,fever,abdominal cramps",
        "medium",
    ),
    (
        "Allergic Reaction",
        "Immune system response to allergens ranging from mild to severe",
        "rash,itching,swelling,difficulty breathing,hives,runny nose",
        "high",
    ),
    (
        "Dehydration",
        "Insufficient fluid levels in the body affecting normal function",
        "thirst,dry mouth,fatigue,dizziness,dark urine,weakness",
        "medium",
    ),
    (
        "Anxiety Disorder",
        "Mental health condition causing excessive worry and physical symptoms",
        "restlessness,rapid heartbeat,sweating,difficulty concentrating,muscle tension",
        "low",
    ),
    (
        "Gastritis",
        "Inflammation of the stomach lining causing digestive symptoms",
        "stomach pain,nausea,bloating,loss of appetite,heartburn",
        "low",
    ),
    (
        "Hypertension",
        "High blood pressure condition that may cause various symptoms",
        "headache,dizziness,chest pain,shortness of breath,fatigue",
        "high",
    ),
    (
        "Type 2 Diabetes",
        "Blood sugar regulation disorder with multiple systemic effects",
        "excessive thirst,frequent urination,fatigue,blurred vision,slow healing",
        "high",
    ),
    (
        "Bronchitis",
        "Inflammation of the bronchial tubes causing respiratory symptoms",
        "persistent cough,mucus production,chest discomfort,fatigue,mild fever",
        "medium",
    ),
    (
        "Sinusitis",
        "Inflammation of the sinus cavities causing facial pain and congestion",
        "facial pain,nasal congestion,headache,thick nasal discharge,reduced smell",
        "low",
    ),
    (
        "Urinary Tract Infection",
        "Bacterial infection of the urinary system",
        "burning urination,frequent urination,pelvic pain,cloudy urine,strong urine odor",
        "medium",
    ),
    (
        "Tension Headache",
        "Most common type of headache caused by muscle tension",
        "dull headache,head pressure,neck stiffness,scalp tenderness",
        "low",
    ),
    (
        "Viral Gastroenteritis",
        "Stomach flu causing gastrointestinal symptoms",
        "nausea,vomiting,diarrhea,stomach cramps,low-grade fever,fatigue",
        "medium",
    ),
];

/// Body-system categories with their keyword lists, in the fixed iteration
/// order the categorizer uses. First keyword hit wins.
const CATEGORY_ROWS: &[(&str, &[&str])] = &[
    (
        "respiratory",
        &[
            "cough",
            "shortness of breath",
            "chest pain",
            "wheezing",
            "sore throat",
            "runny nose",
            "congestion",
        ],
    ),
    (
        "gastrointestinal",
        &[
            "nausea",
            "vomiting",
            "diarrhea",
            "stomach pain",
            "abdominal pain",
            "loss of appetite",
            "bloating",
        ],
    ),
    (
        "neurological",
        &[
            "headache",
            "dizziness",
            "confusion",
            "memory loss",
            "seizure",
            "numbness",
            "tingling",
        ],
    ),
    (
        "musculoskeletal",
        &[
            "muscle aches",
            "joint pain",
            "back pain",
            "stiffness",
            "weakness",
            "swelling",
        ],
    ),
    (
        "cardiovascular",
        &[
            "chest pain",
            "rapid heartbeat",
            "palpitations",
            "high blood pressure",
            "shortness of breath",
        ],
    ),
    (
        "dermatological",
        &["rash", "itching", "swelling", "hives", "skin changes", "bruising"],
    ),
    (
        "general",
        &["fever", "fatigue", "weight loss", "weight gain", "night sweats", "chills"],
    ),
    (
        "mental_health",
        &[
            "anxiety",
            "depression",
            "mood changes",
            "sleep problems",
            "stress",
            "panic",
        ],
    ),
];

/// Symptoms whose presence forces a critical assessment.
const EMERGENCY_SYMPTOMS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe headache",
    "loss of consciousness",
    "severe allergic reaction",
    "stroke symptoms",
    "heart attack symptoms",
    "severe abdominal pain",
    "high fever",
    "seizure",
    "severe bleeding",
];

/// Lexical markers escalating a non-emergency symptom to high severity.
const HIGH_SEVERITY_MARKERS: &[&str] = &[
    "severe",
    "intense",
    "unbearable",
    "excruciating",
    "sharp",
    "stabbing",
    "difficulty breathing",
    "chest pain",
    "high fever",
];

/// Symptoms that raise the confidence score when present.
const SPECIFIC_SYMPTOMS: &[&str] = &["chest pain", "difficulty breathing", "severe headache"];

/// Static health tips: (title, description, category).
const HEALTH_TIP_ROWS: &[(&str, &str, &str)] = &[
    (
        "Stay Hydrated",
        "Drink at least 8 glasses of water daily to maintain proper hydration",
        "general",
    ),
    (
        "Regular Exercise",
        "Engage in at least 30 minutes of physical activity daily",
        "fitness",
    ),
    (
        "Balanced Diet",
        "Eat a variety of fruits, vegetables, whole grains, and lean proteins",
        "nutrition",
    ),
    (
        "Adequate Sleep",
        "Get 7-9 hours of quality sleep each night for optimal health",
        "sleep",
    ),
    (
        "Stress Management",
        "Practice relaxation techniques like meditation or deep breathing",
        "mental_health",
    ),
    (
        "Hand Hygiene",
        "Wash hands frequently with soap and water for at least 20 seconds",
        "hygiene",
    ),
    (
        "Regular Checkups",
        "Schedule annual health checkups with your healthcare provider",
        "preventive",
    ),
    (
        "Limit Alcohol",
        "Consume alcohol in moderation or avoid it completely",
        "lifestyle",
    ),
    (
        "Don't Smoke",
        "Avoid smoking and exposure to secondhand smoke",
        "lifestyle",
    ),
    (
        "Sun Protection",
        "Use sunscreen and protective clothing when outdoors",
        "skin_care",
    ),
];

/// Common symptom reference list: (name, category).
const COMMON_SYMPTOM_ROWS: &[(&str, &str)] = &[
    ("fever", "general"),
    ("headache", "neurological"),
    ("cough", "respiratory"),
    ("sore throat", "respiratory"),
    ("runny nose", "respiratory"),
    ("nasal congestion", "respiratory"),
    ("shortness of breath", "respiratory"),
    ("chest pain", "cardiovascular"),
    ("nausea", "gastrointestinal"),
    ("vomiting", "gastrointestinal"),
    ("diarrhea", "gastrointestinal"),
    ("stomach pain", "gastrointestinal"),
    ("abdominal pain", "gastrointestinal"),
    ("loss of appetite", "gastrointestinal"),
    ("fatigue", "general"),
    ("weakness", "general"),
    ("dizziness", "neurological"),
    ("muscle aches", "musculoskeletal"),
    ("joint pain", "musculoskeletal"),
    ("back pain", "musculoskeletal"),
    ("rash", "dermatological"),
    ("itching", "dermatological"),
    ("swelling", "general"),
    ("difficulty sleeping", "sleep"),
    ("anxiety", "mental_health"),
    ("rapid heartbeat", "cardiovascular"),
    ("sweating", "general"),
    ("chills", "general"),
    ("body aches", "musculoskeletal"),
    ("sneezing", "respiratory"),
];

const DISCLAIMER: &str = "This AI symptom analysis is for informational purposes only and should \
    not replace professional medical advice. Always consult with a qualified healthcare provider \
    for accurate diagnosis and treatment. If you're experiencing a medical emergency, call \
    emergency services immediately.";

/// The full set of immutable reference tables.
pub struct ReferenceData {
    conditions: Vec<Condition>,
    categories: Vec<(String, Vec<String>)>,
}

impl ReferenceData {
    /// Build the built-in reference tables.
    pub fn builtin() -> Self {
        let conditions = CONDITION_ROWS
            .iter()
            .map(|(name, description, symptoms, severity)| Condition {
                name: (*name).to_string(),
                description: (*description).to_string(),
                symptoms: symptoms
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect(),
                // Seed rows carry a known tag; fall back to low rather than
                // poisoning the whole table over one bad row.
                severity: Severity::from_str_opt(severity).unwrap_or(Severity::Low),
            })
            .collect();

        let categories = CATEGORY_ROWS
            .iter()
            .map(|(name, keywords)| {
                (
                    (*name).to_string(),
                    keywords.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();

        Self {
            conditions,
            categories,
        }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Categories in fixed iteration order with their keyword lists.
    pub fn categories(&self) -> &[(String, Vec<String>)] {
        &self.categories
    }

    pub fn emergency_symptoms(&self) -> &'static [&'static str] {
        EMERGENCY_SYMPTOMS
    }

    pub fn high_severity_markers(&self) -> &'static [&'static str] {
        HIGH_SEVERITY_MARKERS
    }

    pub fn specific_symptoms(&self) -> &'static [&'static str] {
        SPECIFIC_SYMPTOMS
    }

    pub fn disclaimer(&self) -> &'static str {
        DISCLAIMER
    }

    /// Supplemental guidance for a condition, with generic fallback text for
    /// conditions without a dedicated entry.
    pub fn condition_details(&self, name: &str) -> ConditionDetails {
        let (duration, see_doctor, tips): (&str, &str, &[&str]) = match name {
            "Common Cold" => (
                "7-10 days",
                "If symptoms worsen after 3 days or persist beyond 10 days",
                &[
                    "Rest and stay hydrated",
                    "Use saline nasal rinses",
                    "Consider honey for cough relief",
                    "Maintain good hygiene",
                ],
            ),
            "Influenza (Flu)" => (
                "1-2 weeks",
                "If you have difficulty breathing, persistent fever over 3 days, or severe symptoms",
                &[
                    "Get plenty of rest",
                    "Stay well hydrated",
                    "Consider antiviral medication if within 48 hours",
                    "Monitor temperature regularly",
                ],
            ),
            "Migraine Headache" => (
                "4-72 hours",
                "If headaches become more frequent, severe, or are accompanied by neurological symptoms",
                &[
                    "Rest in dark, quiet room",
                    "Apply cold or warm compress",
                    "Stay hydrated",
                    "Avoid known triggers",
                ],
            ),
            "Food Poisoning" => (
                "1-5 days",
                "If you have severe dehydration, blood in stool, or high fever",
                &[
                    "Stay hydrated with clear fluids",
                    "Follow BRAT diet",
                    "Avoid dairy and fatty foods",
                    "Rest and recover gradually",
                ],
            ),
            _ => (
                "Variable",
                "If symptoms persist or worsen",
                &[
                    "Monitor symptoms",
                    "Stay hydrated",
                    "Get adequate rest",
                    "Seek medical advice if concerned",
                ],
            ),
        };

        ConditionDetails {
            typical_duration: duration.to_string(),
            when_to_see_doctor: see_doctor.to_string(),
            self_care_tips: tips.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    pub fn health_tips(&self) -> Vec<HealthTip> {
        HEALTH_TIP_ROWS
            .iter()
            .map(|(title, description, category)| HealthTip {
                title: (*title).to_string(),
                description: (*description).to_string(),
                category: (*category).to_string(),
            })
            .collect()
    }

    /// Health tips filtered by category.
    pub fn health_tips_by_category(&self, category: &str) -> Vec<HealthTip> {
        self.health_tips()
            .into_iter()
            .filter(|tip| tip.category == category)
            .collect()
    }

    /// Common symptom names, sorted alphabetically.
    pub fn common_symptom_names(&self) -> Vec<String> {
        let mut names: Vec<String> = COMMON_SYMPTOM_ROWS
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_conditions_are_seeded_and_normalized() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.conditions().len(), 15);

        for condition in reference.conditions() {
            assert!(!condition.symptoms.is_empty(), "{}", condition.name);
            for symptom in &condition.symptoms {
                assert_eq!(symptom, &symptom.trim().to_lowercase());
            }
        }
    }

    #[test]
    fn test_category_order_is_fixed() {
        let reference = ReferenceData::builtin();
        let names: Vec<&str> = reference
            .categories()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "respiratory",
                "gastrointestinal",
                "neurological",
                "musculoskeletal",
                "cardiovascular",
                "dermatological",
                "general",
                "mental_health",
            ]
        );
    }

    #[test]
    fn test_condition_details_fallback() {
        let reference = ReferenceData::builtin();
        let details = reference.condition_details("Hypertension");
        assert_eq!(details.typical_duration, "Variable");

        let known = reference.condition_details("Common Cold");
        assert_eq!(known.typical_duration, "7-10 days");
    }

    #[test]
    fn test_health_tips_filter_by_category() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.health_tips().len(), 10);
        let lifestyle = reference.health_tips_by_category("lifestyle");
        assert_eq!(lifestyle.len(), 2);
    }

    #[test]
    fn test_common_symptom_names_sorted() {
        let reference = ReferenceData::builtin();
        let names = reference.common_symptom_names();
        assert_eq!(names.len(), 30);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

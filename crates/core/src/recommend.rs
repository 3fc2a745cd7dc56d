//! Recommendation, advice, red-flag and follow-up generation.
//!
//! Everything here is driven by the severity tier and the categorized symptom
//! mapping; the text blocks themselves are fixed.

use api_shared::{DetailedRecommendation, RecommendationType, Severity, SymptomAnalysis};

/// Red-flag patterns with their warning text, in trigger-check order.
const RED_FLAG_PATTERNS: &[(&str, &str)] = &[
    (
        "chest pain",
        "Severe or crushing chest pain, especially with shortness of breath",
    ),
    (
        "difficulty breathing",
        "Severe difficulty breathing or inability to catch your breath",
    ),
    (
        "high fever",
        "Fever over 103\u{b0}F (39.4\u{b0}C) or fever with severe symptoms",
    ),
    (
        "severe headache",
        "Sudden, severe headache unlike any you've had before",
    ),
    (
        "confusion",
        "Sudden confusion, disorientation, or difficulty speaking",
    ),
    (
        "severe pain",
        "Pain that is unbearable or prevents normal activities",
    ),
];

/// Warnings appended to every red-flag list.
const GENERAL_RED_FLAGS: &[&str] = &[
    "Symptoms that rapidly worsen",
    "Signs of severe dehydration (dizziness, dry mouth, little/no urination)",
    "Persistent vomiting that prevents keeping fluids down",
    "Any symptom that causes you significant concern",
];

/// Build the prioritized recommendation list for an analysis.
///
/// A critical assessment short-circuits into a single emergency entry. High
/// and medium assessments lead with a consult-doctor entry (24 hours vs 2-3
/// days); self-care and monitoring blocks are appended for every
/// non-critical tier.
pub fn build_recommendations(analysis: &SymptomAnalysis) -> Vec<DetailedRecommendation> {
    let mut recommendations = Vec::new();

    if analysis.severity_assessment == Severity::Critical {
        recommendations.push(DetailedRecommendation {
            kind: RecommendationType::Emergency,
            title: "Seek Immediate Emergency Care".to_string(),
            message: "Your symptoms indicate a potentially serious condition that requires \
                      immediate medical attention."
                .to_string(),
            urgency: Severity::Critical,
            action_steps: vec![
                "Call emergency services (911) immediately".to_string(),
                "Do not drive yourself to the hospital".to_string(),
                "Have someone stay with you".to_string(),
                "Bring a list of current medications".to_string(),
            ],
            timeframe: "Immediately".to_string(),
            warning_signs: vec![
                "Worsening symptoms".to_string(),
                "Loss of consciousness".to_string(),
                "Severe difficulty breathing".to_string(),
            ],
        });
        return recommendations;
    }

    match analysis.severity_assessment {
        Severity::High => recommendations.push(DetailedRecommendation {
            kind: RecommendationType::ConsultDoctor,
            title: "Schedule Urgent Medical Consultation".to_string(),
            message: "Your symptoms require prompt medical evaluation to rule out serious \
                      conditions."
                .to_string(),
            urgency: Severity::High,
            action_steps: vec![
                "Contact your healthcare provider today".to_string(),
                "If unavailable, visit urgent care center".to_string(),
                "Prepare a detailed symptom timeline".to_string(),
                "List all current medications and allergies".to_string(),
            ],
            timeframe: "Within 24 hours".to_string(),
            warning_signs: vec![
                "Symptoms getting worse".to_string(),
                "New symptoms developing".to_string(),
                "Difficulty performing daily activities".to_string(),
            ],
        }),
        Severity::Medium => recommendations.push(DetailedRecommendation {
            kind: RecommendationType::ConsultDoctor,
            title: "Schedule Medical Consultation".to_string(),
            message: "Your symptoms warrant medical evaluation to ensure proper diagnosis and \
                      treatment."
                .to_string(),
            urgency: Severity::Medium,
            action_steps: vec![
                "Schedule appointment with your healthcare provider".to_string(),
                "Monitor symptoms and note any changes".to_string(),
                "Keep a symptom diary".to_string(),
                "Prepare questions for your doctor".to_string(),
            ],
            timeframe: "Within 2-3 days".to_string(),
            warning_signs: vec![
                "Symptoms persist beyond expected timeframe".to_string(),
                "New symptoms appear".to_string(),
                "Symptoms interfere with daily life".to_string(),
            ],
        }),
        _ => {}
    }

    recommendations.push(self_care_recommendation(analysis));
    recommendations.push(monitoring_recommendation());

    recommendations
}

/// Self-care block: a fixed base plus category-conditional additions.
fn self_care_recommendation(analysis: &SymptomAnalysis) -> DetailedRecommendation {
    let mut action_steps = vec![
        "Get adequate rest (7-9 hours of sleep)".to_string(),
        "Stay well hydrated (8-10 glasses of water daily)".to_string(),
        "Eat nutritious, easily digestible foods".to_string(),
    ];

    if analysis.symptom_categories.contains_key("respiratory") {
        action_steps.extend([
            "Use a humidifier or breathe steam from hot shower".to_string(),
            "Avoid irritants like smoke and strong odors".to_string(),
            "Consider honey for cough relief (if over 1 year old)".to_string(),
        ]);
    }

    if analysis.symptom_categories.contains_key("gastrointestinal") {
        action_steps.extend([
            "Follow BRAT diet (bananas, rice, applesauce, toast)".to_string(),
            "Avoid dairy, fatty, and spicy foods temporarily".to_string(),
            "Consider probiotics to restore gut health".to_string(),
        ]);
    }

    let feverish = analysis.symptom_categories.contains_key("general")
        && analysis
            .extracted_symptoms
            .iter()
            .any(|s| s.contains("fever"));
    if feverish {
        action_steps.extend([
            "Monitor temperature regularly".to_string(),
            "Use fever-reducing medication as directed".to_string(),
            "Wear light, breathable clothing".to_string(),
        ]);
    }

    DetailedRecommendation {
        kind: RecommendationType::SelfCare,
        title: "Self-Care and Home Management".to_string(),
        message: "These self-care measures can help manage your symptoms and support recovery."
            .to_string(),
        urgency: Severity::Low,
        action_steps,
        timeframe: "Start immediately and continue as needed".to_string(),
        warning_signs: vec![
            "Symptoms worsen despite self-care".to_string(),
            "New concerning symptoms develop".to_string(),
        ],
    }
}

fn monitoring_recommendation() -> DetailedRecommendation {
    DetailedRecommendation {
        kind: RecommendationType::Monitoring,
        title: "Symptom Monitoring and Tracking".to_string(),
        message: "Careful monitoring of your symptoms will help track progress and identify any \
                  concerning changes."
            .to_string(),
        urgency: Severity::Low,
        action_steps: vec![
            "Keep a daily symptom diary with severity ratings".to_string(),
            "Note any triggers or patterns you observe".to_string(),
            "Track temperature if fever is present".to_string(),
            "Record any new symptoms that develop".to_string(),
            "Note response to any treatments or medications".to_string(),
        ],
        timeframe: "Daily until symptoms resolve".to_string(),
        warning_signs: vec![
            "Symptoms suddenly worsen".to_string(),
            "High fever (over 103\u{b0}F/39.4\u{b0}C)".to_string(),
            "Difficulty breathing or chest pain".to_string(),
            "Severe dehydration signs".to_string(),
        ],
    }
}

/// General health advice: four fixed items, plus two more at medium/high
/// severity.
pub fn general_advice(severity: Severity) -> Vec<String> {
    let mut advice = vec![
        "Maintain good hygiene by washing hands frequently".to_string(),
        "Avoid close contact with others if you feel unwell".to_string(),
        "Listen to your body and rest when needed".to_string(),
        "Stay connected with family or friends for support".to_string(),
    ];

    if matches!(severity, Severity::Medium | Severity::High) {
        advice.push("Consider having someone check on you regularly".to_string());
        advice.push("Keep emergency contact numbers easily accessible".to_string());
    }

    advice
}

/// Pattern-triggered warning signs plus the fixed general warnings,
/// deduplicated preserving first-trigger order.
pub fn red_flags(symptoms: &[String]) -> Vec<String> {
    let mut flags = Vec::new();

    for symptom in symptoms {
        for (pattern, warning) in RED_FLAG_PATTERNS {
            if symptom.contains(pattern) {
                flags.push((*warning).to_string());
            }
        }
    }

    flags.extend(GENERAL_RED_FLAGS.iter().map(|w| (*w).to_string()));

    let mut seen = std::collections::HashSet::new();
    flags.retain(|flag| seen.insert(flag.clone()));
    flags
}

/// Follow-up questions: four fixed base questions plus category- and
/// symptom-conditional extras.
pub fn follow_up_questions(analysis: &SymptomAnalysis) -> Vec<String> {
    let mut questions = vec![
        "How long have you been experiencing these symptoms?".to_string(),
        "Have the symptoms been getting better, worse, or staying the same?".to_string(),
        "Are there any activities or times of day when symptoms are worse?".to_string(),
        "Have you taken any medications or treatments for these symptoms?".to_string(),
    ];

    if analysis.symptom_categories.contains_key("respiratory") {
        questions.push("Do you have any known allergies or asthma?".to_string());
        questions.push("Have you been exposed to anyone who was sick recently?".to_string());
    }

    if analysis.symptom_categories.contains_key("gastrointestinal") {
        questions
            .push("Have you eaten anything unusual or from a new source recently?".to_string());
        questions.push("Are you able to keep fluids down?".to_string());
    }

    if analysis
        .extracted_symptoms
        .iter()
        .any(|s| s.contains("headache"))
    {
        questions
            .push("Is this headache different from headaches you normally get?".to_string());
        questions
            .push("Are you experiencing any vision changes or sensitivity to light?".to_string());
    }

    questions
}

//! # API REST
//!
//! REST API implementation for the triage symptom service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! The analysis itself lives in `triage-core`; audit persistence in
//! `triage-store`. Handlers here validate, delegate and translate errors.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AnalysisReport, AnalyzeReq, ConditionInfo, HealthRes, HealthService, HealthTipsRes,
    ListConditionsRes, ListSymptomsRes, ServiceInfoRes, StatsRes,
};
use triage_core::{AnalysisError, SymptomAnalyzer};
use triage_store::AuditStore;

/// Application state shared across REST API handlers.
///
/// The analyzer carries the immutable reference tables behind an `Arc`, so
/// cloning the state per request is cheap and requires no synchronisation.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: SymptomAnalyzer,
    pub store: AuditStore,
    pub audit_enabled: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        service_info,
        health,
        analyze_symptoms,
        list_conditions,
        list_symptoms,
        health_tips,
        statistics,
    ),
    components(schemas(
        api_shared::Severity,
        api_shared::RecommendationType,
        AnalyzeReq,
        api_shared::SymptomAnalysis,
        api_shared::DetailedCondition,
        api_shared::DetailedRecommendation,
        AnalysisReport,
        ConditionInfo,
        ListConditionsRes,
        ListSymptomsRes,
        api_shared::HealthTip,
        HealthTipsRes,
        StatsRes,
        ServiceInfoRes,
        HealthRes,
    ))
)]
struct ApiDoc;

/// Build the REST router over the given state.
///
/// Mounts all endpoints, the Swagger UI and a permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/analyze", post(analyze_symptoms))
        .route("/conditions", get(list_conditions))
        .route("/symptoms", get(list_symptoms))
        .route("/health-tips", get(health_tips))
        .route("/stats", get(statistics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfoRes)
    )
)]
/// Root endpoint with service information
///
/// # Returns
/// * `Json<ServiceInfoRes>` - Service name, version, features and pointers to
///   the main endpoints.
#[axum::debug_handler]
async fn service_info(State(_state): State<AppState>) -> Json<ServiceInfoRes> {
    Json(ServiceInfoRes {
        name: "Triage Symptom API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Rule-based symptom analysis with detailed recommendations".to_string(),
        features: vec![
            "Flexible symptom input (single or multiple symptoms)".to_string(),
            "Condition matching against a static reference table".to_string(),
            "Prioritized recommendations with action steps".to_string(),
            "Risk assessment and severity evaluation".to_string(),
            "Follow-up questions for better triage".to_string(),
            "Emergency warning system".to_string(),
        ],
        main_endpoint: "/analyze".to_string(),
        documentation: "/swagger-ui".to_string(),
        health_check: "/health".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthRes),
        (status = 503, description = "Service degraded", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Pings the audit database; the analyzer itself is stateless and cannot be
/// unhealthy. Used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Healthy status
/// * `(StatusCode, Json<HealthRes>)` - 503 with a degraded message when the
///   database is unreachable
#[axum::debug_handler]
async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthRes>, (StatusCode, Json<HealthRes>)> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(HealthService::check_health())),
        Err(e) => {
            tracing::warn!("health check database ping failed: {:?}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthService::degraded("database unreachable")),
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Analysis result", body = AnalysisReport),
        (status = 400, description = "Empty symptom description"),
        (status = 500, description = "Internal server error")
    )
)]
/// Comprehensive symptom analysis endpoint
///
/// Accepts flexible symptom input and returns extracted symptoms, severity,
/// ranked condition matches, prioritized recommendations, red flags,
/// follow-up questions and a confidence score.
///
/// Input examples:
/// - Single symptom: `"headache"`
/// - Multiple symptoms: `"fever, cough, sore throat"`
/// - Descriptive input: `"I have been feeling tired and have a runny nose for 3 days"`
///
/// # Errors
/// Returns `400 Bad Request` when the symptom text is empty or
/// whitespace-only. Any unexpected failure surfaces as a generic
/// `500 Internal Server Error`, never as a partial clinical result.
#[axum::debug_handler]
async fn analyze_symptoms(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeReq>,
) -> Result<Json<AnalysisReport>, (StatusCode, &'static str)> {
    let report = match state.analyzer.analyze(&req) {
        Ok(report) => report,
        Err(AnalysisError::EmptyInput) => {
            return Err((
                StatusCode::BAD_REQUEST,
                "Symptom description is required. Please describe your symptoms.",
            ));
        }
        Err(e) => {
            tracing::error!("analysis error: {:?}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };

    if state.audit_enabled {
        // Fire-and-forget: the response never waits on, or fails with, the
        // audit write.
        let store = state.store.clone();
        let audit_req = req.clone();
        let audit_report = report.clone();
        tokio::spawn(async move {
            if let Err(e) = store.record_analysis(&audit_req, &audit_report).await {
                tracing::warn!("could not store analysis event: {:?}", e);
            }
        });
    }

    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/conditions",
    responses(
        (status = 200, description = "Known conditions", body = ListConditionsRes)
    )
)]
/// List the known conditions from the reference table
#[axum::debug_handler]
async fn list_conditions(State(state): State<AppState>) -> Json<ListConditionsRes> {
    let conditions = state
        .analyzer
        .reference()
        .conditions()
        .iter()
        .map(|condition| ConditionInfo {
            name: condition.name.clone(),
            description: condition.description.clone(),
            severity: condition.severity,
        })
        .collect();

    Json(ListConditionsRes { conditions })
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Common symptom names", body = ListSymptomsRes)
    )
)]
/// List the common symptom reference names, sorted alphabetically
#[axum::debug_handler]
async fn list_symptoms(State(state): State<AppState>) -> Json<ListSymptomsRes> {
    Json(ListSymptomsRes {
        symptoms: state.analyzer.reference().common_symptom_names(),
    })
}

#[derive(Debug, Deserialize)]
struct HealthTipsQuery {
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health-tips",
    params(
        ("category" = Option<String>, Query, description = "Filter tips by category")
    ),
    responses(
        (status = 200, description = "Health tips", body = HealthTipsRes)
    )
)]
/// Health tips, optionally filtered by category
#[axum::debug_handler]
async fn health_tips(
    State(state): State<AppState>,
    Query(query): Query<HealthTipsQuery>,
) -> Json<HealthTipsRes> {
    let reference = state.analyzer.reference();
    let tips = match query.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => reference.health_tips_by_category(category),
        _ => reference.health_tips(),
    };

    Json(HealthTipsRes { tips })
}

#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Audit statistics", body = StatsRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Aggregate statistics over the recorded analyses
///
/// # Errors
/// Returns `500 Internal Server Error` if the statistics query fails.
#[axum::debug_handler]
async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<StatsRes>, (StatusCode, &'static str)> {
    match state.store.statistics().await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            tracing::error!("statistics error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

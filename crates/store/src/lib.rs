//! # Triage Store
//!
//! Append-only audit log of past analyses over SQLite.
//!
//! Each successful analysis becomes one event row: timestamp, the caller's
//! input, the computed severity and confidence, and the full report payload.
//! Writes are best-effort by contract — callers fire them on a detached task
//! and a failed insert must never affect the response.
//!
//! The store also answers aggregate statistics over the recorded events.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use api_shared::{AnalysisReport, AnalyzeReq, StatsRes};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to serialize report payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// One recorded analysis event, as read back from the log.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct AnalysisEvent {
    pub id: i64,
    pub created_at: String,
    pub input_text: String,
    pub extracted_symptoms: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub additional_info: Option<String>,
    pub severity: String,
    pub confidence: f64,
    pub report_json: String,
}

/// Open a SQLite pool for the audit log, creating the file if needed.
pub async fn connect_pool(db_path: &Path) -> StoreResult<SqlitePool> {
    let connect_options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    Ok(pool)
}

/// Apply the schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Handle over the audit log. Cheap to clone; the pool is shared.
#[derive(Clone)]
pub struct AuditStore {
    pool: SqlitePool,
}

impl AuditStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that the database is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Append one analysis event to the log.
    ///
    /// Callers spawn this on a detached task; a failure here is logged by the
    /// caller and never fails the originating request.
    pub async fn record_analysis(
        &self,
        req: &AnalyzeReq,
        report: &AnalysisReport,
    ) -> StoreResult<()> {
        let extracted =
            serde_json::to_string(&report.symptom_analysis.extracted_symptoms)?;
        let report_json = serde_json::to_string(report)?;

        sqlx::query(
            r#"
            INSERT INTO analysis_events (
                created_at, input_text, extracted_symptoms, age, gender,
                additional_info, severity, confidence, report_json
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Utc::now().to_rfc3339())
        .bind(&req.symptoms)
        .bind(extracted)
        .bind(req.age.map(i64::from))
        .bind(&req.gender)
        .bind(&req.additional_info)
        .bind(report.symptom_analysis.severity_assessment.as_str())
        .bind(report.confidence_score)
        .bind(report_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The most recent events, newest first.
    pub async fn recent_events(&self, limit: u32) -> StoreResult<Vec<AnalysisEvent>> {
        let limit = i64::from(limit.clamp(1, 500));
        let events = sqlx::query_as::<_, AnalysisEvent>(
            r#"
            SELECT id, created_at, input_text, extracted_symptoms, age, gender,
                   additional_info, severity, confidence, report_json
            FROM analysis_events
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Aggregate statistics over the recorded analyses.
    pub async fn statistics(&self) -> StoreResult<StatsRes> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analysis_events")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(
            "SELECT severity, COUNT(*) AS n FROM analysis_events GROUP BY severity",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut severity_distribution = BTreeMap::new();
        for row in rows {
            let severity: String = row.try_get("severity")?;
            let count: i64 = row.try_get("n")?;
            severity_distribution.insert(severity, count);
        }

        let average: Option<f64> =
            sqlx::query_scalar("SELECT AVG(confidence) FROM analysis_events")
                .fetch_one(&self.pool)
                .await?;

        Ok(StatsRes {
            total_analyses: total,
            severity_distribution,
            average_confidence: (average.unwrap_or(0.0) * 100.0).round() / 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use api_shared::Severity;

    use super::*;

    async fn setup_store() -> AuditStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should initialize");

        run_migrations(&pool)
            .await
            .expect("migrations should run in tests");

        AuditStore::new(pool)
    }

    fn sample(severity: Severity, confidence: f64) -> (AnalyzeReq, AnalysisReport) {
        let req = AnalyzeReq {
            symptoms: "fever, cough".to_string(),
            age: Some(30),
            gender: None,
            additional_info: None,
        };
        let report = AnalysisReport {
            input_text: req.symptoms.clone(),
            symptom_analysis: api_shared::SymptomAnalysis {
                extracted_symptoms: vec!["fever".to_string(), "cough".to_string()],
                symptom_categories: Default::default(),
                severity_assessment: severity,
                risk_factors: Vec::new(),
            },
            possible_conditions: Vec::new(),
            priority_recommendations: Vec::new(),
            general_advice: Vec::new(),
            red_flags: Vec::new(),
            follow_up_questions: Vec::new(),
            confidence_score: confidence,
            disclaimer: "test".to_string(),
        };
        (req, report)
    }

    #[tokio::test]
    async fn test_records_and_lists_events() {
        let store = setup_store().await;
        let (req, report) = sample(Severity::Medium, 0.8);

        store
            .record_analysis(&req, &report)
            .await
            .expect("event should be recorded");

        let events = store.recent_events(10).await.expect("events should list");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].input_text, "fever, cough");
        assert_eq!(events[0].severity, "medium");
        assert_eq!(events[0].age, Some(30));
        assert!(events[0].report_json.contains("\"confidence_score\":0.8"));
    }

    #[tokio::test]
    async fn test_statistics_aggregate_by_severity() {
        let store = setup_store().await;
        for (severity, confidence) in [
            (Severity::Medium, 0.8),
            (Severity::Medium, 0.6),
            (Severity::Critical, 0.9),
        ] {
            let (req, report) = sample(severity, confidence);
            store
                .record_analysis(&req, &report)
                .await
                .expect("event should be recorded");
        }

        let stats = store.statistics().await.expect("statistics should compute");
        assert_eq!(stats.total_analyses, 3);
        assert_eq!(stats.severity_distribution["medium"], 2);
        assert_eq!(stats.severity_distribution["critical"], 1);
        assert!((stats.average_confidence - 0.77).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_statistics_on_empty_log() {
        let store = setup_store().await;
        let stats = store.statistics().await.expect("statistics should compute");
        assert_eq!(stats.total_analyses, 0);
        assert!(stats.severity_distribution.is_empty());
        assert_eq!(stats.average_confidence, 0.0);
    }

    #[tokio::test]
    async fn test_ping_succeeds_on_open_pool() {
        let store = setup_store().await;
        store.ping().await.expect("ping should succeed");
    }
}

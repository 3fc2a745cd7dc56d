//! Main runner binary for the triage symptom service.
//!
//! Resolves configuration from the environment (a `.env` file is honoured),
//! opens the audit database, builds the immutable reference tables and serves
//! the REST API.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use triage_core::{
    config::{audit_enabled_from_env_value, DEFAULT_DB_PATH},
    CoreConfig, ReferenceData, SymptomAnalyzer,
};
use triage_store::AuditStore;

/// Main entry point for the triage service
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `TRIAGE_DB_PATH`: SQLite file for the audit log (default: "triage.db")
/// - `TRIAGE_AUDIT`: Set to `0`/`false`/`off` to disable audit writes
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or the HTTP server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting triage REST on {}", addr);

    let db_path = std::env::var("TRIAGE_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.into());
    let audit_enabled = audit_enabled_from_env_value(std::env::var("TRIAGE_AUDIT").ok());
    let cfg = CoreConfig::new(PathBuf::from(db_path), audit_enabled)?;

    let pool = triage_store::connect_pool(cfg.db_path()).await?;
    triage_store::run_migrations(&pool).await?;

    let state = AppState {
        analyzer: SymptomAnalyzer::new(Arc::new(ReferenceData::builtin())),
        store: AuditStore::new(pool),
        audit_enabled: cfg.audit_enabled(),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service shared by the REST handlers and the runner binary.
///
/// Provides a standardised way to report the health status of the triage
/// service. The database reachability check lives in the REST layer; this
/// only shapes the response.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "triage API is alive".into(),
        }
    }

    /// Response shape for a degraded service (e.g. unreachable database).
    pub fn degraded(reason: &str) -> HealthRes {
        HealthRes {
            ok: false,
            message: format!("triage API degraded: {reason}"),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

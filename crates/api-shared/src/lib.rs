//! # API Shared
//!
//! Shared wire types and definitions for the triage APIs.
//!
//! Contains:
//! - Request/response types for the analysis endpoints (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `triage-core`, `triage-store` and `api-rest` so that the core
//! pipeline can produce response objects directly, without a separate
//! translation layer per API surface.

pub mod health;
pub mod types;

pub use health::{HealthRes, HealthService};
pub use types::*;

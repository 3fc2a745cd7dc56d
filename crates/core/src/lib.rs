//! # Triage Core
//!
//! Core analysis pipeline for the triage symptom service.
//!
//! This crate contains the pure, request-scoped computation:
//! - Text normalisation of free-text symptom descriptions
//! - Categorisation of symptoms by body system
//! - Severity assessment and risk factor identification
//! - Condition matching and scoring against the static reference table
//! - Recommendation, red-flag and follow-up generation
//! - Confidence scoring
//!
//! Everything here is a function of the request plus the immutable
//! [`ReferenceData`] tables loaded once at startup; there is no shared mutable
//! state, so the pipeline is safe to run on arbitrarily many requests in
//! parallel.
//!
//! **No API concerns**: HTTP servers, persistence and service interfaces
//! belong in `api-rest` and `triage-store`.

pub mod analyzer;
pub mod categorize;
pub mod config;
pub mod confidence;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod recommend;
pub mod reference;
pub mod severity;

pub use analyzer::SymptomAnalyzer;
pub use config::CoreConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use reference::{Condition, ReferenceData};

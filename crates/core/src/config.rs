//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! components. The intent is to avoid reading process-wide environment
//! variables during request handling, which can lead to inconsistent
//! behaviour in multi-threaded runtimes and test harnesses.

use std::path::{Path, PathBuf};

use crate::{AnalysisError, AnalysisResult};

/// Default SQLite file used for the audit log.
pub const DEFAULT_DB_PATH: &str = "triage.db";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    db_path: PathBuf,
    audit_enabled: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(db_path: PathBuf, audit_enabled: bool) -> AnalysisResult<Self> {
        if db_path.as_os_str().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "database path cannot be empty".into(),
            ));
        }

        Ok(Self {
            db_path,
            audit_enabled,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether successful analyses are appended to the audit log.
    pub fn audit_enabled(&self) -> bool {
        self.audit_enabled
    }
}

/// Parse the audit toggle from an optional environment value.
///
/// Absent, empty or unrecognised values enable auditing; only explicit
/// `0`/`false`/`off`/`no` disable it.
pub fn audit_enabled_from_env_value(value: Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => !matches!(
            v.to_ascii_lowercase().as_str(),
            "0" | "false" | "off" | "no"
        ),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_empty_db_path() {
        let err = CoreConfig::new(PathBuf::new(), true).expect_err("should reject empty path");
        assert!(matches!(err, AnalysisError::InvalidInput(msg) if msg.contains("database path")));
    }

    #[test]
    fn test_audit_toggle_defaults_on() {
        assert!(audit_enabled_from_env_value(None));
        assert!(audit_enabled_from_env_value(Some("".into())));
        assert!(audit_enabled_from_env_value(Some("yes".into())));
    }

    #[test]
    fn test_audit_toggle_explicit_off_values() {
        for v in ["0", "false", "off", "no", " OFF "] {
            assert!(!audit_enabled_from_env_value(Some(v.into())), "{v}");
        }
    }
}

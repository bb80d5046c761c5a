//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A blueprint file failed structural validation; carries every message.
    #[error("blueprint is structurally invalid ({} error(s))", errors.len())]
    InvalidBlueprint { errors: Vec<String> },

    /// The persistence collaborator failed to load or store a blueprint.
    #[error("repository error at {path}: {reason}")]
    RepositoryError { path: PathBuf, reason: String },

    /// A blueprint could not be (de)serialized.
    #[error("serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Shared repository state was poisoned.
    #[error("blueprint store lock error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlueprint { errors } => {
                let mut suggestions = vec![
                    "The blueprint file was rejected before any mutation:".into(),
                ];
                suggestions.extend(errors.iter().map(|e| format!("  • {e}")));
                suggestions.push("Fix the file and re-run: onionforge validate <file>".into());
                suggestions
            }
            Self::RepositoryError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and you have read/write permissions".into(),
            ],
            Self::SerializationFailed { .. } => vec![
                "The blueprint JSON is malformed".into(),
                "Check for trailing commas, unquoted keys, or wrong value types".into(),
            ],
            Self::StoreLockError => vec![
                "The blueprint store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBlueprint { .. } => ErrorCategory::Validation,
            Self::RepositoryError { .. } => ErrorCategory::Configuration,
            Self::SerializationFailed { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

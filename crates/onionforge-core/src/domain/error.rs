// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use std::fmt;

use crate::domain::rings::Ring;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry after correcting input)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Soft connection failures (`SelfReference`, `UnrecognisedEndpoint`,
/// `RingsNotAdjacent`, `ConnectionNotFound`) are expected during interactive
/// editing and carry the Validation/NotFound categories. `UnknownNode` is
/// the one programmer-error kind: the node-view factory was invoked on a
/// name the caller never validated as a member.
// Display and Error are implemented by hand rather than via `thiserror`:
// the derive unconditionally treats any field named `source` as the error's
// cause, but here `source` is a connection endpoint name (a String), which
// does not implement `std::error::Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    SelfReference { name: String },

    UnrecognisedEndpoint { name: String },

    RingsNotAdjacent {
        source: String,
        source_ring: Ring,
        target: String,
        target_ring: Ring,
    },

    DuplicateNode { name: String, ring: Ring },

    UnknownSelector {
        field: &'static str,
        value: String,
    },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    ConnectionNotFound { source: String, target: String },

    // ========================================================================
    // Contract Violations (programmer errors)
    // ========================================================================
    UnknownNode { name: String },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfReference { name } => {
                write!(f, "a node cannot connect to itself: '{name}'")
            }
            Self::UnrecognisedEndpoint { name } => {
                write!(f, "'{name}' is not a member of this blueprint")
            }
            Self::RingsNotAdjacent {
                source,
                source_ring,
                target,
                target_ring,
            } => {
                write!(
                    f,
                    "{source_ring} '{source}' cannot connect to {target_ring} '{target}'"
                )
            }
            Self::DuplicateNode { name, ring } => {
                write!(f, "'{name}' already exists in this blueprint as {ring}")
            }
            Self::UnknownSelector { field, value } => {
                write!(f, "unknown {field} value: '{value}'")
            }
            Self::ConnectionNotFound { source, target } => {
                write!(f, "no connection exists between '{source}' and '{target}'")
            }
            Self::UnknownNode { name } => {
                write!(
                    f,
                    "node '{name}' classifies to no ring. This is a usage bug: validate membership before requesting a view."
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SelfReference { name } => vec![
                format!("'{name}' was given as both ends of the connection"),
                "Pick two different nodes".into(),
            ],
            Self::UnrecognisedEndpoint { name } => vec![
                format!("'{name}' is not an entity, service, or derived repository"),
                "Add the node first, or check the spelling (names are case-sensitive)".into(),
            ],
            Self::RingsNotAdjacent {
                source_ring,
                target_ring,
                ..
            } => vec![
                format!("{source_ring} and {target_ring} are not adjacent rings"),
                "Legal pairs: entity↔domain-service, domain-service↔application-service, \
                 application-service↔repository"
                    .into(),
            ],
            Self::DuplicateNode { name, ring } => vec![
                format!("'{name}' is already a {ring}"),
                "Node names must be unique across all rings, including derived \
                 I{Entity}Repository names"
                    .into(),
            ],
            Self::UnknownSelector { field, .. } => vec![
                format!("Check the '{field}' value against the supported set"),
                "Run: onionforge validate <file> for the full report".into(),
            ],
            Self::ConnectionNotFound { source, target } => vec![
                format!("'{source}' and '{target}' are not connected"),
                "Nothing was removed".into(),
            ],
            Self::UnknownNode { .. } => vec![
                "This appears to be a bug in the calling code".into(),
                "Views may only be built for names that classify to a ring".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SelfReference { .. }
            | Self::UnrecognisedEndpoint { .. }
            | Self::RingsNotAdjacent { .. }
            | Self::DuplicateNode { .. }
            | Self::UnknownSelector { .. } => ErrorCategory::Validation,
            Self::ConnectionNotFound { .. } => ErrorCategory::NotFound,
            Self::UnknownNode { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

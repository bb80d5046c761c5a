//! Ring model: the four onion layers and their adjacency rule.
//!
//! # Design Rationale
//!
//! The source of truth for "which node kinds may be linked" is the single
//! [`Ring::is_adjacent`] predicate. Both the pre-flight connection check and
//! the toggle itself call it, so the two can never disagree. Everything else
//! in the engine pattern-matches on [`NodeKind`], which is produced exactly
//! once per name by the classifier — no string probing outside
//! `classifier.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Ring ─────────────────────────────────────────────────────────────────────

/// One of the four onion-architecture layers.
///
/// Legal connections form a chain:
/// Entity ↔ DomainService ↔ ApplicationService ↔ Repository.
/// Entities never connect directly to application services or repositories;
/// the entity↔repository relationship is implicit through naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ring {
    Entity,
    DomainService,
    ApplicationService,
    Repository,
}

impl Ring {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::DomainService => "domain-service",
            Self::ApplicationService => "application-service",
            Self::Repository => "repository",
        }
    }

    /// Position along the chain, innermost first.
    const fn step(self) -> u8 {
        match self {
            Self::Entity => 0,
            Self::DomainService => 1,
            Self::ApplicationService => 2,
            Self::Repository => 3,
        }
    }

    /// Whether two rings are exactly one step apart on the chain.
    ///
    /// Undirected: `is_adjacent(a, b) == is_adjacent(b, a)`. A ring is never
    /// adjacent to itself.
    pub const fn is_adjacent(self, other: Ring) -> bool {
        self.step().abs_diff(other.step()) == 1
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NodeKind ─────────────────────────────────────────────────────────────────

/// A classified node: its ring plus the identifying name.
///
/// Produced by [`crate::domain::classifier::classify`] and consumed by
/// pattern match everywhere else. For repositories the captured entity name
/// is carried instead of the full `I{Entity}Repository` identifier; use
/// [`NodeKind::name`] to get the display/storage form back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Entity(String),
    DomainService(String),
    ApplicationService(String),
    Repository { entity: String },
}

impl NodeKind {
    /// The ring this node belongs to.
    pub const fn ring(&self) -> Ring {
        match self {
            Self::Entity(_) => Ring::Entity,
            Self::DomainService(_) => Ring::DomainService,
            Self::ApplicationService(_) => Ring::ApplicationService,
            Self::Repository { .. } => Ring::Repository,
        }
    }

    /// The node's identifier as stored in the blueprint.
    ///
    /// Repository nodes reconstruct the derived `I{Entity}Repository` form.
    pub fn name(&self) -> String {
        match self {
            Self::Entity(n) | Self::DomainService(n) | Self::ApplicationService(n) => n.clone(),
            Self::Repository { entity } => repository_name(entity),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.ring(), self.name())
    }
}

/// Derived repository identifier for an entity.
///
/// The inverse of this mapping (name → entity) lives in `classifier.rs`.
pub fn repository_name(entity: &str) -> String {
    format!("I{entity}Repository")
}

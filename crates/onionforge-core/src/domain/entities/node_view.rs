//! Read-only node descriptors for presentation consumers.

use serde::Serialize;

use crate::domain::classifier::classify;
use crate::domain::entities::Blueprint;
use crate::domain::error::DomainError;
use crate::domain::rings::{NodeKind, Ring};

/// Polymorphic, read-only description of one node: its ring and the nodes
/// it is connected to, resolved for display.
///
/// A DTO for diagram editors and the CLI — it holds no behavior and goes
/// stale the moment the blueprint is mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub name: String,
    pub ring: Ring,
    /// Entities this node depends on (domain services only).
    pub entities: Vec<String>,
    /// Domain services this node depends on (application services only).
    pub domain_services: Vec<String>,
    /// Repository identifiers, passed through as raw name strings
    /// (application services only; may include stale references).
    pub repositories: Vec<String>,
}

impl NodeView {
    /// Build the view for a node already known to be a blueprint member.
    ///
    /// Entity and repository views expose no outgoing data. A domain
    /// service's entity list silently drops names no longer in the entity
    /// set (stale references left by node removal). An unrecognised name is
    /// a contract violation and fails with [`DomainError::UnknownNode`].
    pub fn build(name: &str, blueprint: &Blueprint) -> Result<Self, DomainError> {
        let kind = classify(name, blueprint).ok_or_else(|| DomainError::UnknownNode {
            name: name.to_string(),
        })?;

        let view = match kind {
            NodeKind::Entity(name) => Self::leaf(name, Ring::Entity),
            NodeKind::Repository { .. } => Self::leaf(name.to_string(), Ring::Repository),
            NodeKind::DomainService(name) => {
                let entities = blueprint
                    .domain_service_connections()
                    .get(&name)
                    .map(|targets| {
                        targets
                            .iter()
                            .filter(|e| blueprint.entities().contains(e))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                Self {
                    name,
                    ring: Ring::DomainService,
                    entities,
                    domain_services: Vec::new(),
                    repositories: Vec::new(),
                }
            }
            NodeKind::ApplicationService(name) => {
                let deps = blueprint
                    .application_service_dependencies()
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
                Self {
                    name,
                    ring: Ring::ApplicationService,
                    entities: Vec::new(),
                    domain_services: deps.domain_services,
                    repositories: deps.repositories,
                }
            }
        };

        Ok(view)
    }

    fn leaf(name: String, ring: Ring) -> Self {
        Self {
            name,
            ring,
            entities: Vec::new(),
            domain_services: Vec::new(),
            repositories: Vec::new(),
        }
    }
}

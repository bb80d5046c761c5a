//! Connection engine: validating and toggling edges between rings.
//!
//! A connection is an undirected edge between two ring-adjacent nodes,
//! physically stored in exactly one collection depending on the ring pair:
//!
//! | Pair                                  | Stored in                                        |
//! |---------------------------------------|--------------------------------------------------|
//! | Entity ↔ DomainService                | `domain_service_connections[service]`            |
//! | DomainService ↔ ApplicationService    | `application_service_dependencies[..].domain_services` |
//! | ApplicationService ↔ Repository       | `application_service_dependencies[..].repositories`    |
//!
//! Never duplicated in both directions. [`validate_pair`] and [`toggle`]
//! share one code path ([`classify_pair`]), so the pre-flight predicate and
//! the mutation accept exactly the same pairs.

use crate::domain::classifier::classify;
use crate::domain::entities::Blueprint;
use crate::domain::error::DomainError;
use crate::domain::rings::{NodeKind, repository_name};

/// A legal, classified, unordered connection pair.
///
/// Normalised so the inner-ring end comes first; repositories keep their
/// owning application service explicit.
enum ConnectionPair {
    EntityDomain {
        entity: String,
        domain_service: String,
    },
    DomainApplication {
        domain_service: String,
        application_service: String,
    },
    ApplicationRepository {
        application_service: String,
        repository: String,
    },
}

/// Classify both endpoints and check the pair against the adjacency chain.
///
/// This is the single acceptance rule for connections. Failures:
/// - `SelfReference` when `source == target`
/// - `UnrecognisedEndpoint` when either name classifies to no ring
/// - `RingsNotAdjacent` for any pair other than the three legal ones
fn classify_pair(
    blueprint: &Blueprint,
    source: &str,
    target: &str,
) -> Result<ConnectionPair, DomainError> {
    if source == target {
        return Err(DomainError::SelfReference {
            name: source.to_string(),
        });
    }

    let source_kind = classify(source, blueprint).ok_or_else(|| {
        DomainError::UnrecognisedEndpoint {
            name: source.to_string(),
        }
    })?;
    let target_kind = classify(target, blueprint).ok_or_else(|| {
        DomainError::UnrecognisedEndpoint {
            name: target.to_string(),
        }
    })?;

    use NodeKind::*;
    match (&source_kind, &target_kind) {
        (Entity(e), DomainService(d)) | (DomainService(d), Entity(e)) => {
            Ok(ConnectionPair::EntityDomain {
                entity: e.clone(),
                domain_service: d.clone(),
            })
        }
        (DomainService(d), ApplicationService(a)) | (ApplicationService(a), DomainService(d)) => {
            Ok(ConnectionPair::DomainApplication {
                domain_service: d.clone(),
                application_service: a.clone(),
            })
        }
        (ApplicationService(a), Repository { entity })
        | (Repository { entity }, ApplicationService(a)) => {
            Ok(ConnectionPair::ApplicationRepository {
                application_service: a.clone(),
                repository: repository_name(entity),
            })
        }
        _ => Err(DomainError::RingsNotAdjacent {
            source: source.to_string(),
            source_ring: source_kind.ring(),
            target: target.to_string(),
            target_ring: target_kind.ring(),
        }),
    }
}

/// Pre-flight check: would `toggle` accept this pair?
///
/// Shares the acceptance rule with [`toggle`] by construction.
pub fn validate_pair(blueprint: &Blueprint, source: &str, target: &str) -> Result<(), DomainError> {
    classify_pair(blueprint, source, target).map(|_| ())
}

/// Toggle the undirected edge between two ring-adjacent nodes.
///
/// If the edge is absent it is added; if present it is removed. Illegal
/// pairs fail with no mutation.
pub fn toggle(blueprint: &mut Blueprint, source: &str, target: &str) -> Result<(), DomainError> {
    let pair = classify_pair(blueprint, source, target)?;

    let (list, member): (&mut Vec<String>, String) = match pair {
        ConnectionPair::EntityDomain {
            entity,
            domain_service,
        } => (blueprint.connection_list_mut(&domain_service), entity),
        ConnectionPair::DomainApplication {
            domain_service,
            application_service,
        } => (
            &mut blueprint.dependencies_mut(&application_service).domain_services,
            domain_service,
        ),
        ConnectionPair::ApplicationRepository {
            application_service,
            repository,
        } => (
            &mut blueprint.dependencies_mut(&application_service).repositories,
            repository,
        ),
    };

    if let Some(pos) = list.iter().position(|n| n == &member) {
        list.remove(pos);
    } else {
        list.push(member);
    }
    Ok(())
}

/// Remove the edge between two nodes.
///
/// Not a toggle: removing an absent edge fails with `ConnectionNotFound`
/// and no mutation. Accepts either direction, including Repository-as-source.
pub fn remove(blueprint: &mut Blueprint, source: &str, target: &str) -> Result<(), DomainError> {
    let not_found = || DomainError::ConnectionNotFound {
        source: source.to_string(),
        target: target.to_string(),
    };

    let pair = classify_pair(blueprint, source, target)?;

    let (list, member): (&mut Vec<String>, String) = match pair {
        ConnectionPair::EntityDomain {
            entity,
            domain_service,
        } => (blueprint.connection_list_mut(&domain_service), entity),
        ConnectionPair::DomainApplication {
            domain_service,
            application_service,
        } => (
            &mut blueprint.dependencies_mut(&application_service).domain_services,
            domain_service,
        ),
        ConnectionPair::ApplicationRepository {
            application_service,
            repository,
        } => (
            &mut blueprint.dependencies_mut(&application_service).repositories,
            repository,
        ),
    };

    match list.iter().position(|n| n == &member) {
        Some(pos) => {
            list.remove(pos);
            Ok(())
        }
        None => Err(not_found()),
    }
}

/// Pure membership query mirroring the storage rule.
///
/// `false` for illegal or unrecognised pairs — a pair that could never be
/// connected is trivially not connected.
pub fn is_connected(blueprint: &Blueprint, source: &str, target: &str) -> bool {
    match classify_pair(blueprint, source, target) {
        Ok(ConnectionPair::EntityDomain {
            entity,
            domain_service,
        }) => blueprint
            .domain_service_connections()
            .get(&domain_service)
            .is_some_and(|targets| targets.contains(&entity)),
        Ok(ConnectionPair::DomainApplication {
            domain_service,
            application_service,
        }) => blueprint
            .application_service_dependencies()
            .get(&application_service)
            .is_some_and(|deps| deps.domain_services.contains(&domain_service)),
        Ok(ConnectionPair::ApplicationRepository {
            application_service,
            repository,
        }) => blueprint
            .application_service_dependencies()
            .get(&application_service)
            .is_some_and(|deps| deps.repositories.contains(&repository)),
        Err(_) => false,
    }
}

/// Every node the given node *could* connect to: the entire candidate list
/// for the adjacent ring(s), connected or not.
///
/// Empty for unrecognised names — the editor uses this to disable
/// connection-initiation on unknown nodes.
pub fn possible_targets(blueprint: &Blueprint, source: &str) -> Vec<String> {
    let Some(kind) = classify(source, blueprint) else {
        return Vec::new();
    };

    match kind {
        NodeKind::Entity(_) => blueprint.domain_services().to_vec(),
        NodeKind::DomainService(_) => {
            let mut targets = blueprint.entities().to_vec();
            targets.extend(blueprint.application_services().iter().cloned());
            targets
        }
        NodeKind::ApplicationService(_) => {
            let mut targets = blueprint.domain_services().to_vec();
            targets.extend(blueprint.entities().iter().map(|e| repository_name(e)));
            targets
        }
        NodeKind::Repository { .. } => blueprint.application_services().to_vec(),
    }
}

/// Every node the given node is *currently* connected to, looked up from
/// both stored directions.
///
/// An entity reports the domain services whose connection lists contain it;
/// a repository reports the application services that depend on it.
pub fn current_targets(blueprint: &Blueprint, source: &str) -> Vec<String> {
    let Some(kind) = classify(source, blueprint) else {
        return Vec::new();
    };

    match kind {
        NodeKind::Entity(name) => blueprint
            .domain_service_connections()
            .iter()
            .filter(|(_, targets)| targets.contains(&name))
            .map(|(service, _)| service.clone())
            .collect(),
        NodeKind::DomainService(name) => {
            let mut targets = blueprint
                .domain_service_connections()
                .get(&name)
                .cloned()
                .unwrap_or_default();
            targets.extend(
                blueprint
                    .application_service_dependencies()
                    .iter()
                    .filter(|(_, deps)| deps.domain_services.contains(&name))
                    .map(|(service, _)| service.clone()),
            );
            targets
        }
        NodeKind::ApplicationService(name) => blueprint
            .application_service_dependencies()
            .get(&name)
            .map(|deps| {
                let mut targets = deps.domain_services.clone();
                targets.extend(deps.repositories.iter().cloned());
                targets
            })
            .unwrap_or_default(),
        NodeKind::Repository { entity } => {
            let repository = repository_name(&entity);
            blueprint
                .application_service_dependencies()
                .iter()
                .filter(|(_, deps)| deps.repositories.contains(&repository))
                .map(|(service, _)| service.clone())
                .collect()
        }
    }
}

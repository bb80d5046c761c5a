//! Ring classification: name → [`NodeKind`].
//!
//! Membership is checked in a fixed order (entities, domain services,
//! application services, then repository derivation), so a name can only
//! ever classify to one ring. The repository-derivation regex is confined
//! to this module; nothing else in the crate inspects name shapes.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Blueprint;
use crate::domain::rings::NodeKind;

/// `I{Entity}Repository`, capturing the entity name.
static REPOSITORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^I([A-Z][a-zA-Z0-9]*)Repository$").expect("pattern is literal"));

/// Classify a name against a blueprint.
///
/// Returns `None` for unrecognized names. Pure and total — never panics,
/// no side effects. Names are case-sensitive.
pub fn classify(name: &str, blueprint: &Blueprint) -> Option<NodeKind> {
    if blueprint.entities().iter().any(|e| e == name) {
        return Some(NodeKind::Entity(name.to_string()));
    }
    if blueprint.domain_services().iter().any(|s| s == name) {
        return Some(NodeKind::DomainService(name.to_string()));
    }
    if blueprint.application_services().iter().any(|s| s == name) {
        return Some(NodeKind::ApplicationService(name.to_string()));
    }
    derive_repository(name, blueprint)
}

/// Repository derivation: `I{E}Repository` is a valid repository identifier
/// iff `E` is currently a member of the entity list.
fn derive_repository(name: &str, blueprint: &Blueprint) -> Option<NodeKind> {
    let captures = REPOSITORY_PATTERN.captures(name)?;
    let entity = captures.get(1)?.as_str();

    if blueprint.entities().iter().any(|e| e == entity) {
        Some(NodeKind::Repository {
            entity: entity.to_string(),
        })
    } else {
        None
    }
}

/// Whether `name` *looks like* a derived repository identifier, regardless
/// of whether the captured entity exists.
///
/// The structural validator uses this to distinguish "malformed repository
/// reference" from "well-formed but pointing at a missing entity".
pub fn repository_entity(name: &str) -> Option<&str> {
    REPOSITORY_PATTERN
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

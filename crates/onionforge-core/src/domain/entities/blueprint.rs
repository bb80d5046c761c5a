//! The blueprint aggregate: the single mutable configuration of a session.
//!
//! # Design
//!
//! [`Blueprint`] is the rich domain type: typed selectors, behavior-bearing
//! mutation methods, and the guarantee that its side tables stay in sync
//! with the membership lists. [`BlueprintFile`] is the permissive serde
//! shape of the on-disk JSON — everything is a plain string so the
//! structural validator can report *all* problems in a hand-edited file
//! instead of failing on the first one. A `BlueprintFile` becomes a
//! `Blueprint` only after it validates cleanly.
//!
//! Repositories are derived, not stored: there is no repository list
//! anywhere in this type. `I{Entity}Repository` names appear only as
//! values inside application-service dependency records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::classifier::classify;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{DiFramework, UiFramework, UiLibrary};

// ── ServiceDependencies ──────────────────────────────────────────────────────

/// Outgoing dependencies of one application service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDependencies {
    /// Domain services this application service orchestrates.
    pub domain_services: Vec<String>,
    /// Derived `I{Entity}Repository` identifiers this service persists through.
    pub repositories: Vec<String>,
}

// ── Blueprint ────────────────────────────────────────────────────────────────

/// The configuration aggregate: membership lists, connection tables, and
/// codegen selectors.
///
/// Created empty ([`Blueprint::default`]) or loaded through the persistence
/// port; mutated in place for the lifetime of a session; replaced wholesale
/// on load. Field access goes through accessors — the connection tables must
/// only be touched by the mutation methods and the connection engine so the
/// membership invariants survive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Blueprint {
    folder_path: String,
    entities: Vec<String>,
    domain_services: Vec<String>,
    application_services: Vec<String>,
    domain_service_connections: BTreeMap<String, Vec<String>>,
    application_service_dependencies: BTreeMap<String, ServiceDependencies>,
    ui_framework: UiFramework,
    di_framework: DiFramework,
    ui_library: UiLibrary,
}

impl Blueprint {
    /// Empty blueprint with the given output folder and selectors.
    pub fn new(
        folder_path: impl Into<String>,
        ui_framework: UiFramework,
        di_framework: DiFramework,
        ui_library: UiLibrary,
    ) -> Self {
        Self {
            folder_path: folder_path.into(),
            ui_framework,
            di_framework,
            ui_library,
            ..Self::default()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn domain_services(&self) -> &[String] {
        &self.domain_services
    }

    pub fn application_services(&self) -> &[String] {
        &self.application_services
    }

    pub fn domain_service_connections(&self) -> &BTreeMap<String, Vec<String>> {
        &self.domain_service_connections
    }

    pub fn application_service_dependencies(&self) -> &BTreeMap<String, ServiceDependencies> {
        &self.application_service_dependencies
    }

    pub fn ui_framework(&self) -> UiFramework {
        self.ui_framework
    }

    pub fn di_framework(&self) -> DiFramework {
        self.di_framework
    }

    pub fn ui_library(&self) -> UiLibrary {
        self.ui_library
    }

    /// Total number of declared (non-derived) nodes.
    pub fn node_count(&self) -> usize {
        self.entities.len() + self.domain_services.len() + self.application_services.len()
    }

    // ── Node mutation ─────────────────────────────────────────────────────

    /// Add an entity.
    ///
    /// Rejects names that already classify to any ring — including derived
    /// repository names — since a duplicate would make classification
    /// order-dependent.
    pub fn add_entity(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        self.reject_duplicate(&name)?;
        self.entities.push(name);
        Ok(())
    }

    /// Add a domain service and initialise its (empty) connection record.
    pub fn add_domain_service(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        self.reject_duplicate(&name)?;
        self.domain_service_connections
            .insert(name.clone(), Vec::new());
        self.domain_services.push(name);
        Ok(())
    }

    /// Add an application service and initialise its (empty) dependency record.
    pub fn add_application_service(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        self.reject_duplicate(&name)?;
        self.application_service_dependencies
            .insert(name.clone(), ServiceDependencies::default());
        self.application_services.push(name);
        Ok(())
    }

    /// Remove a node from whichever membership list contains it, with
    /// cascade cleanup of dangling references.
    ///
    /// Cascades: the node's own connection/dependency record is deleted, and
    /// the name is scrubbed out of every remaining connection list and every
    /// remaining `domain_services` dependency array. `repositories` arrays
    /// are deliberately left untouched — a removed entity leaves its derived
    /// `I{Entity}Repository` references dangling (they surface as stale in
    /// views and as errors on structural validation).
    ///
    /// Unknown names are a no-op.
    pub fn remove_node(&mut self, name: &str) {
        self.entities.retain(|n| n != name);
        self.domain_services.retain(|n| n != name);
        self.application_services.retain(|n| n != name);

        self.domain_service_connections.remove(name);
        for targets in self.domain_service_connections.values_mut() {
            targets.retain(|n| n != name);
        }

        self.application_service_dependencies.remove(name);
        for deps in self.application_service_dependencies.values_mut() {
            deps.domain_services.retain(|n| n != name);
        }
    }

    fn reject_duplicate(&self, name: &str) -> Result<(), DomainError> {
        match classify(name, self) {
            Some(kind) => Err(DomainError::DuplicateNode {
                name: name.to_string(),
                ring: kind.ring(),
            }),
            None => Ok(()),
        }
    }

    // ── Internal access for the connection engine ─────────────────────────

    pub(crate) fn connection_list_mut(&mut self, domain_service: &str) -> &mut Vec<String> {
        // Records are initialised on add; entry() covers blueprints loaded
        // from files where a record was never written.
        self.domain_service_connections
            .entry(domain_service.to_string())
            .or_default()
    }

    pub(crate) fn dependencies_mut(&mut self, application_service: &str) -> &mut ServiceDependencies {
        self.application_service_dependencies
            .entry(application_service.to_string())
            .or_default()
    }
}

// ── BlueprintFile ────────────────────────────────────────────────────────────

/// Raw, permissive shape of a blueprint JSON file.
///
/// All selectors are plain strings and all collections default to empty, so
/// an arbitrary uploaded/CLI-supplied file parses as long as the JSON types
/// line up. Cross-reference and enum-membership problems are then reported
/// exhaustively by [`crate::domain::StructuralValidator::validate_file`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlueprintFile {
    pub folder_path: String,
    pub entities: Vec<String>,
    pub domain_services: Vec<String>,
    pub application_services: Vec<String>,
    pub domain_service_connections: BTreeMap<String, Vec<String>>,
    pub application_service_dependencies: BTreeMap<String, ServiceDependencies>,
    pub ui_framework: String,
    pub di_framework: String,
    pub ui_library: String,
}

impl TryFrom<BlueprintFile> for Blueprint {
    type Error = DomainError;

    /// Convert a raw file into the typed aggregate.
    ///
    /// Only the selector parses can fail here; run the structural validator
    /// first if you want the full report rather than the first failure.
    fn try_from(file: BlueprintFile) -> Result<Self, Self::Error> {
        Ok(Self {
            folder_path: file.folder_path,
            entities: file.entities,
            domain_services: file.domain_services,
            application_services: file.application_services,
            domain_service_connections: file.domain_service_connections,
            application_service_dependencies: file.application_service_dependencies,
            ui_framework: file.ui_framework.parse()?,
            di_framework: file.di_framework.parse()?,
            ui_library: file.ui_library.parse()?,
        })
    }
}

impl From<&Blueprint> for BlueprintFile {
    fn from(bp: &Blueprint) -> Self {
        Self {
            folder_path: bp.folder_path.clone(),
            entities: bp.entities.clone(),
            domain_services: bp.domain_services.clone(),
            application_services: bp.application_services.clone(),
            domain_service_connections: bp.domain_service_connections.clone(),
            application_service_dependencies: bp.application_service_dependencies.clone(),
            ui_framework: bp.ui_framework.to_string(),
            di_framework: bp.di_framework.to_string(),
            ui_library: bp.ui_library.to_string(),
        }
    }
}

//! Blueprint session - the one mutable configuration of a logical session.
//!
//! There is deliberately no process-wide singleton: every embedder (CLI run,
//! editor connection) constructs its own [`BlueprintSession`], so
//! multi-session hosts get isolation for free. The session exposes the
//! complete editor API surface — node mutation, connection toggling, views,
//! targets — by delegating to the domain, and is the only place that talks
//! to the persistence port.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::BlueprintRepository,
    domain::{Blueprint, NodeView, StructuralValidator, ValidationReport, connections},
    error::{ForgeError, ForgeResult},
};

/// One editing session over one blueprint.
pub struct BlueprintSession {
    blueprint: Blueprint,
    repository: Box<dyn BlueprintRepository>,
}

impl BlueprintSession {
    /// Start a session with an empty blueprint.
    pub fn new(repository: Box<dyn BlueprintRepository>) -> Self {
        Self {
            blueprint: Blueprint::default(),
            repository,
        }
    }

    /// Start a session from whatever the repository holds.
    pub fn load(repository: Box<dyn BlueprintRepository>) -> ForgeResult<Self> {
        let blueprint = repository.load_initial()?;
        info!(
            entities = blueprint.entities().len(),
            domain_services = blueprint.domain_services().len(),
            application_services = blueprint.application_services().len(),
            "Blueprint loaded"
        );
        Ok(Self {
            blueprint,
            repository,
        })
    }

    // ── Store access ──────────────────────────────────────────────────────

    /// The current configuration snapshot.
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Replace the configuration wholesale (e.g. after an external load).
    pub fn replace(&mut self, blueprint: Blueprint) -> &Blueprint {
        self.blueprint = blueprint;
        &self.blueprint
    }

    /// Persist the current blueprint through the repository port.
    #[instrument(skip_all, fields(filename = ?filename))]
    pub fn save(&self, filename: Option<&Path>) -> ForgeResult<()> {
        self.repository.save(&self.blueprint, filename)?;
        info!("Blueprint saved");
        Ok(())
    }

    // ── Node mutation ─────────────────────────────────────────────────────

    /// Add an entity; returns the new snapshot.
    #[instrument(skip(self))]
    pub fn add_entity(&mut self, name: &str) -> ForgeResult<&Blueprint> {
        self.blueprint.add_entity(name).map_err(ForgeError::Domain)?;
        debug!("Entity added");
        Ok(&self.blueprint)
    }

    /// Add a domain service; returns the new snapshot.
    #[instrument(skip(self))]
    pub fn add_domain_service(&mut self, name: &str) -> ForgeResult<&Blueprint> {
        self.blueprint
            .add_domain_service(name)
            .map_err(ForgeError::Domain)?;
        debug!("Domain service added");
        Ok(&self.blueprint)
    }

    /// Add an application service; returns the new snapshot.
    #[instrument(skip(self))]
    pub fn add_application_service(&mut self, name: &str) -> ForgeResult<&Blueprint> {
        self.blueprint
            .add_application_service(name)
            .map_err(ForgeError::Domain)?;
        debug!("Application service added");
        Ok(&self.blueprint)
    }

    /// Remove a node with cascade cleanup; unknown names are a no-op.
    #[instrument(skip(self))]
    pub fn remove_node(&mut self, name: &str) -> &Blueprint {
        self.blueprint.remove_node(name);
        debug!("Node removed");
        &self.blueprint
    }

    // ── Connection engine ─────────────────────────────────────────────────

    /// Toggle the connection between two ring-adjacent nodes.
    #[instrument(skip(self))]
    pub fn add_connection(&mut self, source: &str, target: &str) -> ForgeResult<&Blueprint> {
        connections::toggle(&mut self.blueprint, source, target).map_err(ForgeError::Domain)?;
        debug!("Connection toggled");
        Ok(&self.blueprint)
    }

    /// Remove the connection between two nodes (not a toggle).
    #[instrument(skip(self))]
    pub fn remove_connection(&mut self, source: &str, target: &str) -> ForgeResult<&Blueprint> {
        connections::remove(&mut self.blueprint, source, target).map_err(ForgeError::Domain)?;
        debug!("Connection removed");
        Ok(&self.blueprint)
    }

    /// Whether two nodes are currently connected.
    pub fn has_connection(&self, source: &str, target: &str) -> bool {
        connections::is_connected(&self.blueprint, source, target)
    }

    /// Pre-flight adjacency check; same rule `add_connection` applies.
    pub fn validate_connection(&self, source: &str, target: &str) -> ForgeResult<()> {
        connections::validate_pair(&self.blueprint, source, target).map_err(ForgeError::Domain)
    }

    /// All candidates one ring step from `source` (connected or not).
    pub fn possible_targets(&self, source: &str) -> Vec<String> {
        connections::possible_targets(&self.blueprint, source)
    }

    /// All nodes currently connected to `source`.
    pub fn current_targets(&self, source: &str) -> Vec<String> {
        connections::current_targets(&self.blueprint, source)
    }

    // ── Read-mostly consumers ─────────────────────────────────────────────

    /// Build the presentation view of a member node.
    pub fn node_view(&self, name: &str) -> ForgeResult<NodeView> {
        NodeView::build(name, &self.blueprint).map_err(ForgeError::Domain)
    }

    /// Run the structural validator over the current blueprint.
    pub fn validate(&self) -> ValidationReport {
        StructuralValidator::validate(&self.blueprint)
    }
}

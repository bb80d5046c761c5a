//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `onionforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Blueprint;
use crate::error::ForgeResult;

/// Port for blueprint persistence.
///
/// Implemented by:
/// - `onionforge_adapters::repository::JsonFileRepository` (production)
/// - `onionforge_adapters::repository::InMemoryRepository` (testing)
///
/// ## Design Notes
///
/// - The core treats both operations as opaque; it never performs I/O itself
/// - `load_initial` must refuse structurally invalid data wholesale — a
///   blueprint handed to the session is assumed consistent
/// - Callers embedding the core in an async host may await around these
///   synchronous calls; the core itself never blocks on anything but them
pub trait BlueprintRepository: Send + Sync {
    /// Persist the blueprint, optionally to an alternate destination.
    fn save(&self, blueprint: &Blueprint, filename: Option<&Path>) -> ForgeResult<()>;

    /// Load the session's starting blueprint.
    ///
    /// Sources with nothing persisted yet return the empty default.
    fn load_initial(&self) -> ForgeResult<Blueprint>;
}

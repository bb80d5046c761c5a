//! In-memory blueprint repository for tests and ephemeral sessions.

use std::path::Path;
use std::sync::{Arc, RwLock};

use onionforge_core::{
    application::{ApplicationError, ports::BlueprintRepository},
    domain::Blueprint,
    error::ForgeResult,
};

/// Thread-safe in-memory repository.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<Option<Blueprint>>>,
}

impl InMemoryRepository {
    /// Create an empty repository (loads as the default blueprint).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with a blueprint.
    pub fn with_blueprint(blueprint: Blueprint) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(blueprint))),
        }
    }

    /// Whether anything has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|b| b.is_none()).unwrap_or(true)
    }

    /// Drop any stored blueprint.
    pub fn clear(&self) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = None;
        Ok(())
    }
}

impl BlueprintRepository for InMemoryRepository {
    fn save(&self, blueprint: &Blueprint, _filename: Option<&Path>) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = Some(blueprint.clone());
        Ok(())
    }

    fn load_initial(&self) -> ForgeResult<Blueprint> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_repository_loads_default() {
        let repo = InMemoryRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.load_initial().unwrap(), Blueprint::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let mut bp = Blueprint::default();
        bp.add_entity("User").unwrap();

        repo.save(&bp, None).unwrap();
        assert_eq!(repo.load_initial().unwrap(), bp);
    }

    #[test]
    fn clear_resets_to_default() {
        let mut bp = Blueprint::default();
        bp.add_entity("User").unwrap();
        let repo = InMemoryRepository::with_blueprint(bp);

        repo.clear().unwrap();
        assert_eq!(repo.load_initial().unwrap(), Blueprint::default());
    }
}

//! File-backed blueprint repository (pretty-printed JSON).

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use onionforge_core::{
    application::{ApplicationError, ports::BlueprintRepository},
    domain::{Blueprint, BlueprintFile, StructuralValidator},
    error::{ForgeError, ForgeResult},
};

/// Persists one blueprint as a JSON file at a fixed path.
///
/// Loading is strict: the file is parsed into its raw form, run through the
/// structural validator, and rejected wholesale on any error — a session
/// never starts from an inconsistent blueprint. A missing file is not an
/// error; it yields the empty default so `onionforge` works in a fresh
/// directory.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a blueprint file without building a session.
    ///
    /// Used by `onionforge validate` and by `load_initial`.
    pub fn read_blueprint(path: &Path) -> ForgeResult<Blueprint> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::Application(ApplicationError::RepositoryError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;

        let file: BlueprintFile = serde_json::from_str(&raw).map_err(|e| {
            ForgeError::Application(ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })
        })?;

        let report = StructuralValidator::validate_file(&file);
        if !report.is_valid() {
            warn!(errors = report.errors().len(), "Rejecting invalid blueprint file");
            return Err(ForgeError::Application(ApplicationError::InvalidBlueprint {
                errors: report.messages(),
            }));
        }

        Blueprint::try_from(file).map_err(ForgeError::Domain)
    }
}

impl BlueprintRepository for JsonFileRepository {
    fn save(&self, blueprint: &Blueprint, filename: Option<&Path>) -> ForgeResult<()> {
        let destination = filename.unwrap_or(&self.path);

        let json = serde_json::to_string_pretty(&BlueprintFile::from(blueprint)).map_err(|e| {
            ForgeError::Application(ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })
        })?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ForgeError::Application(ApplicationError::RepositoryError {
                        path: parent.to_path_buf(),
                        reason: e.to_string(),
                    })
                })?;
            }
        }

        std::fs::write(destination, json).map_err(|e| {
            ForgeError::Application(ApplicationError::RepositoryError {
                path: destination.to_path_buf(),
                reason: e.to_string(),
            })
        })?;

        info!(path = %destination.display(), "Blueprint written");
        Ok(())
    }

    fn load_initial(&self) -> ForgeResult<Blueprint> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No blueprint file, starting empty");
            return Ok(Blueprint::default());
        }
        Self::read_blueprint(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onionforge_core::domain::connections;

    fn wired_blueprint() -> Blueprint {
        let mut bp = Blueprint::default();
        bp.add_entity("User").unwrap();
        bp.add_domain_service("UserService").unwrap();
        bp.add_application_service("UserAppService").unwrap();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "UserAppService", "IUserRepository").unwrap();
        bp
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blueprint.json");
        let repo = JsonFileRepository::new(&path);

        let bp = wired_blueprint();
        repo.save(&bp, None).unwrap();
        let loaded = repo.load_initial().unwrap();
        assert_eq!(loaded, bp);
    }

    #[test]
    fn missing_file_yields_empty_default() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert_eq!(repo.load_initial().unwrap(), Blueprint::default());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).load_initial().unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::SerializationFailed { .. })
        ));
    }

    #[test]
    fn structurally_invalid_file_is_rejected_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(
            &path,
            r#"{
                "folderPath": "./out",
                "entities": [],
                "domainServices": ["A"],
                "applicationServices": [],
                "domainServiceConnections": { "A": ["X"] },
                "applicationServiceDependencies": {},
                "uiFramework": "react",
                "diFramework": "awilix",
                "uiLibrary": "bootstrap"
            }"#,
        )
        .unwrap();

        let err = JsonFileRepository::new(&path).load_initial().unwrap_err();
        match err {
            ForgeError::Application(ApplicationError::InvalidBlueprint { errors }) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("unknown entity 'X'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn save_honors_alternate_filename() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.json");
        let alternate = dir.path().join("nested").join("alt.json");
        let repo = JsonFileRepository::new(&default_path);

        repo.save(&wired_blueprint(), Some(&alternate)).unwrap();
        assert!(alternate.exists());
        assert!(!default_path.exists());
    }
}

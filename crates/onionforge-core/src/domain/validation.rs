//! Structural validation: exhaustive cross-reference checking of a whole
//! blueprint.
//!
//! Never fail-fast — every check runs and every violation lands in the
//! report, so a hand-edited file can be fixed in one pass. Callers that
//! source a blueprint externally (file upload, CLI flag) must reject the
//! entire file on any error rather than attempting partial acceptance.

use std::fmt;

use thiserror::Error;

use crate::domain::classifier::repository_entity;
use crate::domain::entities::{Blueprint, BlueprintFile};
use crate::domain::value_objects::{DiFramework, UiFramework, UiLibrary};

/// One structural violation, human-readable via `Display`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("domain service '{service}' references unknown entity '{entity}'")]
    UnknownEntityInConnection { service: String, entity: String },

    #[error("connection record for '{key}' has no matching domain service")]
    OrphanConnectionKey { key: String },

    #[error("application service '{service}' has no dependency record")]
    MissingDependencyRecord { service: String },

    #[error("dependency record for '{key}' has no matching application service")]
    OrphanDependencyKey { key: String },

    #[error("application service '{service}' references unknown domain service '{dependency}'")]
    UnknownDomainServiceDependency { service: String, dependency: String },

    #[error(
        "application service '{service}' references repository '{repository}' which does not derive from a live entity"
    )]
    InvalidRepositoryReference { service: String, repository: String },

    #[error("'{value}' is not a supported {field} (expected one of: {expected})")]
    UnknownSelector {
        field: &'static str,
        value: String,
        expected: String,
    },
}

/// Outcome of a validation run: valid iff the error list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// All violations as display strings, for callers that surface them raw.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "blueprint is structurally valid");
        }
        writeln!(f, "{} structural error(s):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}

/// Centralized structural validation.
///
/// All cross-reference rules live here, not scattered across entities.
pub struct StructuralValidator;

impl StructuralValidator {
    /// Validate a raw blueprint file (selectors still strings).
    ///
    /// Runs every cross-reference check plus closed-set membership for the
    /// three codegen selectors.
    pub fn validate_file(file: &BlueprintFile) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::check_cross_references(
            &mut report,
            &file.entities,
            &file.domain_services,
            &file.application_services,
            &file.domain_service_connections,
            &file.application_service_dependencies,
        );
        Self::check_selectors(&mut report, file);

        report
    }

    /// Validate an in-memory blueprint.
    ///
    /// Selectors are already typed so only the cross-reference rules apply.
    /// A blueprint built purely through the mutation and connection APIs
    /// always passes with zero errors.
    pub fn validate(blueprint: &Blueprint) -> ValidationReport {
        let mut report = ValidationReport::default();

        Self::check_cross_references(
            &mut report,
            blueprint.entities(),
            blueprint.domain_services(),
            blueprint.application_services(),
            blueprint.domain_service_connections(),
            blueprint.application_service_dependencies(),
        );

        report
    }

    fn check_cross_references(
        report: &mut ValidationReport,
        entities: &[String],
        domain_services: &[String],
        application_services: &[String],
        connections: &std::collections::BTreeMap<String, Vec<String>>,
        dependencies: &std::collections::BTreeMap<
            String,
            crate::domain::entities::ServiceDependencies,
        >,
    ) {
        // Domain-service connections: every key declared, every target a
        // known entity.
        for (service, targets) in connections {
            if !domain_services.contains(service) {
                report.push(ValidationError::OrphanConnectionKey {
                    key: service.clone(),
                });
            }
            for entity in targets {
                if !entities.contains(entity) {
                    report.push(ValidationError::UnknownEntityInConnection {
                        service: service.clone(),
                        entity: entity.clone(),
                    });
                }
            }
        }

        // Application-service dependencies: every declared service has a
        // record, every record belongs to a declared service, every value
        // resolves.
        for service in application_services {
            if !dependencies.contains_key(service) {
                report.push(ValidationError::MissingDependencyRecord {
                    service: service.clone(),
                });
            }
        }
        for (service, deps) in dependencies {
            if !application_services.contains(service) {
                report.push(ValidationError::OrphanDependencyKey {
                    key: service.clone(),
                });
            }
            for dependency in &deps.domain_services {
                if !domain_services.contains(dependency) {
                    report.push(ValidationError::UnknownDomainServiceDependency {
                        service: service.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
            for repository in &deps.repositories {
                let derives = repository_entity(repository)
                    .is_some_and(|entity| entities.iter().any(|e| e == entity));
                if !derives {
                    report.push(ValidationError::InvalidRepositoryReference {
                        service: service.clone(),
                        repository: repository.clone(),
                    });
                }
            }
        }
    }

    fn check_selectors(report: &mut ValidationReport, file: &BlueprintFile) {
        if file.ui_framework.parse::<UiFramework>().is_err() {
            report.push(ValidationError::UnknownSelector {
                field: "uiFramework",
                value: file.ui_framework.clone(),
                expected: expected_list(UiFramework::ALL.iter().map(|v| v.as_str())),
            });
        }
        if file.di_framework.parse::<DiFramework>().is_err() {
            report.push(ValidationError::UnknownSelector {
                field: "diFramework",
                value: file.di_framework.clone(),
                expected: expected_list(DiFramework::ALL.iter().map(|v| v.as_str())),
            });
        }
        if file.ui_library.parse::<UiLibrary>().is_err() {
            report.push(ValidationError::UnknownSelector {
                field: "uiLibrary",
                value: file.ui_library.clone(),
                expected: expected_list(UiLibrary::ALL.iter().map(|v| v.as_str())),
            });
        }
    }
}

fn expected_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

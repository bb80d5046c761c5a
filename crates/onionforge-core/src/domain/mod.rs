// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Onionforge.
//!
//! This module contains pure business logic with ZERO I/O:
//!
//! - **Ring model** (`rings`): the four onion layers and the one canonical
//!   adjacency rule.
//! - **Classifier** (`classifier`): name → [`NodeKind`], including the
//!   `I{Entity}Repository` derivation. The derivation regex lives only there.
//! - **Blueprint aggregate** (`entities`): membership lists, connection
//!   tables, selectors, and the node-mutation behavior with cascade cleanup.
//! - **Connection engine** (`connections`): validate/toggle/remove/query
//!   edges between ring-adjacent nodes.
//! - **Structural validator** (`validation`): exhaustive, collect-all
//!   cross-reference checking of whole blueprints and raw blueprint files.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Total classification**: `classify` never panics; unknown names are
//!   `None`, not errors
//! - **Soft failures**: connection and mutation failures are `Result`s,
//!   never panics

pub mod classifier;
pub mod connections;
pub mod entities;
pub mod error;
pub mod rings;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use classifier::classify;
pub use entities::{Blueprint, BlueprintFile, NodeView, ServiceDependencies};
pub use error::{DomainError, ErrorCategory};
pub use rings::{NodeKind, Ring, repository_name};
pub use validation::{StructuralValidator, ValidationError, ValidationReport};
pub use value_objects::{DiFramework, UiFramework, UiLibrary};

#[cfg(test)]
mod tests {
    use super::*;

    /// User / UserService / UserAppService, unconnected.
    fn sample_blueprint() -> Blueprint {
        let mut bp = Blueprint::default();
        bp.add_entity("User").unwrap();
        bp.add_domain_service("UserService").unwrap();
        bp.add_application_service("UserAppService").unwrap();
        bp
    }

    // ========================================================================
    // Ring & Classifier Tests
    // ========================================================================

    #[test]
    fn adjacency_is_the_chain() {
        use Ring::*;
        assert!(Entity.is_adjacent(DomainService));
        assert!(DomainService.is_adjacent(Entity));
        assert!(DomainService.is_adjacent(ApplicationService));
        assert!(ApplicationService.is_adjacent(Repository));

        assert!(!Entity.is_adjacent(ApplicationService));
        assert!(!Entity.is_adjacent(Repository));
        assert!(!DomainService.is_adjacent(Repository));
        assert!(!Entity.is_adjacent(Entity));
        assert!(!Repository.is_adjacent(Repository));
    }

    #[test]
    fn classify_checks_membership_in_order() {
        let bp = sample_blueprint();
        assert_eq!(
            classify("User", &bp),
            Some(NodeKind::Entity("User".into()))
        );
        assert_eq!(
            classify("UserService", &bp),
            Some(NodeKind::DomainService("UserService".into()))
        );
        assert_eq!(
            classify("UserAppService", &bp),
            Some(NodeKind::ApplicationService("UserAppService".into()))
        );
    }

    #[test]
    fn classify_derives_repository_from_live_entity() {
        let bp = sample_blueprint();
        assert_eq!(
            classify("IUserRepository", &bp),
            Some(NodeKind::Repository {
                entity: "User".into()
            })
        );
    }

    #[test]
    fn classify_rejects_repository_without_entity() {
        let bp = sample_blueprint();
        assert_eq!(classify("IGhostRepository", &bp), None);
    }

    #[test]
    fn classify_is_case_sensitive_and_total() {
        let bp = sample_blueprint();
        assert_eq!(classify("user", &bp), None);
        assert_eq!(classify("", &bp), None);
        assert_eq!(classify("iUserRepository", &bp), None);
        assert_eq!(classify("IuserRepository", &bp), None);
    }

    #[test]
    fn repository_name_round_trips_through_classifier() {
        let bp = sample_blueprint();
        let name = repository_name("User");
        assert_eq!(name, "IUserRepository");
        let kind = classify(&name, &bp).unwrap();
        assert_eq!(kind.name(), name);
    }

    // ========================================================================
    // Node Mutation Tests
    // ========================================================================

    #[test]
    fn add_domain_service_initialises_connection_record() {
        let bp = sample_blueprint();
        assert_eq!(
            bp.domain_service_connections().get("UserService"),
            Some(&Vec::new())
        );
    }

    #[test]
    fn add_application_service_initialises_dependency_record() {
        let bp = sample_blueprint();
        let deps = bp
            .application_service_dependencies()
            .get("UserAppService")
            .unwrap();
        assert!(deps.domain_services.is_empty());
        assert!(deps.repositories.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected_across_rings() {
        let mut bp = sample_blueprint();
        assert!(matches!(
            bp.add_entity("User"),
            Err(DomainError::DuplicateNode { .. })
        ));
        assert!(matches!(
            bp.add_domain_service("User"),
            Err(DomainError::DuplicateNode { .. })
        ));
        // Derived repository names are taken too.
        assert!(matches!(
            bp.add_application_service("IUserRepository"),
            Err(DomainError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn remove_unknown_node_is_a_noop() {
        let mut bp = sample_blueprint();
        let before = bp.clone();
        bp.remove_node("Ghost");
        assert_eq!(bp, before);
    }

    #[test]
    fn remove_domain_service_deletes_its_record() {
        let mut bp = sample_blueprint();
        bp.remove_node("UserService");
        assert!(bp.domain_services().is_empty());
        assert!(!bp.domain_service_connections().contains_key("UserService"));
    }

    #[test]
    fn remove_domain_service_scrubs_dependency_arrays() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserAppService", "UserService").unwrap();
        bp.remove_node("UserService");
        let deps = bp
            .application_service_dependencies()
            .get("UserAppService")
            .unwrap();
        assert!(deps.domain_services.is_empty());
    }

    #[test]
    fn remove_entity_scrubs_connection_lists_but_not_repositories() {
        // The documented asymmetry: entity removal empties connection lists
        // but leaves derived repository references dangling.
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "UserAppService", "IUserRepository").unwrap();

        bp.remove_node("User");

        assert_eq!(
            bp.domain_service_connections().get("UserService"),
            Some(&Vec::new())
        );
        let deps = bp
            .application_service_dependencies()
            .get("UserAppService")
            .unwrap();
        assert_eq!(deps.repositories, vec!["IUserRepository".to_string()]);
        // And the dangling reference is what the validator flags.
        assert!(!StructuralValidator::validate(&bp).is_valid());
    }

    // ========================================================================
    // Connection Engine Tests
    // ========================================================================

    #[test]
    fn toggle_entity_domain_service_stores_in_connection_list() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        assert_eq!(
            bp.domain_service_connections().get("UserService").unwrap(),
            &vec!["User".to_string()]
        );
        // Direction does not matter.
        assert!(connections::is_connected(&bp, "User", "UserService"));
    }

    #[test]
    fn toggle_twice_restores_disconnected_state() {
        let mut bp = sample_blueprint();
        let before = bp.clone();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "User", "UserService").unwrap();
        assert_eq!(bp, before);
    }

    #[test]
    fn self_loop_always_fails_without_mutation() {
        let mut bp = sample_blueprint();
        let before = bp.clone();
        for name in ["User", "UserService", "UserAppService", "IUserRepository"] {
            assert!(matches!(
                connections::toggle(&mut bp, name, name),
                Err(DomainError::SelfReference { .. })
            ));
        }
        assert_eq!(bp, before);
    }

    #[test]
    fn non_adjacent_pairs_fail_without_mutation() {
        let mut bp = sample_blueprint();
        let before = bp.clone();
        assert!(matches!(
            connections::toggle(&mut bp, "User", "UserAppService"),
            Err(DomainError::RingsNotAdjacent { .. })
        ));
        assert!(matches!(
            connections::toggle(&mut bp, "User", "IUserRepository"),
            Err(DomainError::RingsNotAdjacent { .. })
        ));
        assert!(matches!(
            connections::toggle(&mut bp, "UserService", "IUserRepository"),
            Err(DomainError::RingsNotAdjacent { .. })
        ));
        assert_eq!(bp, before);
    }

    #[test]
    fn unrecognised_endpoint_is_a_soft_failure() {
        let mut bp = sample_blueprint();
        assert!(matches!(
            connections::toggle(&mut bp, "Ghost", "UserService"),
            Err(DomainError::UnrecognisedEndpoint { .. })
        ));
        assert!(matches!(
            connections::toggle(&mut bp, "UserService", "IGhostRepository"),
            Err(DomainError::UnrecognisedEndpoint { .. })
        ));
    }

    #[test]
    fn validate_pair_agrees_with_toggle() {
        let bp = sample_blueprint();
        let names = ["User", "UserService", "UserAppService", "IUserRepository", "Ghost"];
        for source in names {
            for target in names {
                let mut scratch = bp.clone();
                assert_eq!(
                    connections::validate_pair(&bp, source, target).is_ok(),
                    connections::toggle(&mut scratch, source, target).is_ok(),
                    "divergence for ({source}, {target})"
                );
            }
        }
    }

    #[test]
    fn remove_is_not_a_toggle() {
        let mut bp = sample_blueprint();
        assert!(matches!(
            connections::remove(&mut bp, "UserService", "User"),
            Err(DomainError::ConnectionNotFound { .. })
        ));
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::remove(&mut bp, "UserService", "User").unwrap();
        assert!(!connections::is_connected(&bp, "UserService", "User"));
    }

    #[test]
    fn remove_supports_repository_as_source() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserAppService", "IUserRepository").unwrap();
        connections::remove(&mut bp, "IUserRepository", "UserAppService").unwrap();
        assert!(!connections::is_connected(&bp, "UserAppService", "IUserRepository"));
    }

    #[test]
    fn possible_targets_cover_adjacent_rings_only() {
        let bp = sample_blueprint();
        assert_eq!(
            connections::possible_targets(&bp, "User"),
            vec!["UserService".to_string()]
        );
        assert_eq!(
            connections::possible_targets(&bp, "UserService"),
            vec!["User".to_string(), "UserAppService".to_string()]
        );
        assert_eq!(
            connections::possible_targets(&bp, "UserAppService"),
            vec!["UserService".to_string(), "IUserRepository".to_string()]
        );
        assert_eq!(
            connections::possible_targets(&bp, "IUserRepository"),
            vec!["UserAppService".to_string()]
        );
        assert!(connections::possible_targets(&bp, "Ghost").is_empty());
    }

    #[test]
    fn possible_targets_are_one_ring_step_away() {
        // Adjacency closure: every candidate classifies exactly one step
        // from the source, per the classifier itself.
        let mut bp = sample_blueprint();
        bp.add_entity("Order").unwrap();
        bp.add_domain_service("OrderService").unwrap();

        for source in ["User", "Order", "UserService", "OrderService", "UserAppService"] {
            let source_ring = classify(source, &bp).unwrap().ring();
            for target in connections::possible_targets(&bp, source) {
                let target_ring = classify(&target, &bp).unwrap().ring();
                assert!(
                    source_ring.is_adjacent(target_ring),
                    "{source} -> {target} is not one ring step"
                );
            }
        }
    }

    #[test]
    fn current_targets_report_both_stored_directions() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "UserAppService", "UserService").unwrap();
        connections::toggle(&mut bp, "UserAppService", "IUserRepository").unwrap();

        assert_eq!(
            connections::current_targets(&bp, "User"),
            vec!["UserService".to_string()]
        );
        assert_eq!(
            connections::current_targets(&bp, "UserService"),
            vec!["User".to_string(), "UserAppService".to_string()]
        );
        assert_eq!(
            connections::current_targets(&bp, "UserAppService"),
            vec!["UserService".to_string(), "IUserRepository".to_string()]
        );
        assert_eq!(
            connections::current_targets(&bp, "IUserRepository"),
            vec!["UserAppService".to_string()]
        );
    }

    // ========================================================================
    // Node View Tests
    // ========================================================================

    #[test]
    fn entity_and_repository_views_are_leaves() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserService", "User").unwrap();

        let entity = NodeView::build("User", &bp).unwrap();
        assert_eq!(entity.ring, Ring::Entity);
        assert!(entity.entities.is_empty());
        assert!(entity.domain_services.is_empty());
        assert!(entity.repositories.is_empty());

        let repo = NodeView::build("IUserRepository", &bp).unwrap();
        assert_eq!(repo.ring, Ring::Repository);
        assert!(repo.repositories.is_empty());
    }

    #[test]
    fn domain_service_view_drops_stale_entities() {
        let mut bp = sample_blueprint();
        bp.add_entity("Order").unwrap();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "UserService", "Order").unwrap();

        // Simulate a stale reference by replacing the blueprint with one
        // whose entity list no longer holds "Order" but whose connection
        // list still does.
        let mut file = BlueprintFile::from(&bp);
        file.entities.retain(|e| e != "Order");
        let stale: Blueprint = file.try_into().unwrap();

        let view = NodeView::build("UserService", &stale).unwrap();
        assert_eq!(view.entities, vec!["User".to_string()]);
    }

    #[test]
    fn application_service_view_passes_repositories_through() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserAppService", "UserService").unwrap();
        connections::toggle(&mut bp, "UserAppService", "IUserRepository").unwrap();

        let view = NodeView::build("UserAppService", &bp).unwrap();
        assert_eq!(view.ring, Ring::ApplicationService);
        assert_eq!(view.domain_services, vec!["UserService".to_string()]);
        assert_eq!(view.repositories, vec!["IUserRepository".to_string()]);
    }

    #[test]
    fn view_of_unknown_node_is_a_contract_violation() {
        let bp = sample_blueprint();
        let err = NodeView::build("Ghost", &bp).unwrap_err();
        assert!(matches!(err, DomainError::UnknownNode { .. }));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    // ========================================================================
    // Structural Validator Tests
    // ========================================================================

    #[test]
    fn mutation_api_output_always_validates_clean() {
        // Round trip: any sequence of adds + toggles yields zero errors.
        let mut bp = Blueprint::default();
        bp.add_entity("User").unwrap();
        bp.add_entity("Order").unwrap();
        bp.add_domain_service("UserService").unwrap();
        bp.add_domain_service("OrderService").unwrap();
        bp.add_application_service("UserAppService").unwrap();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        connections::toggle(&mut bp, "OrderService", "Order").unwrap();
        connections::toggle(&mut bp, "UserAppService", "UserService").unwrap();
        connections::toggle(&mut bp, "UserAppService", "IOrderRepository").unwrap();

        let report = StructuralValidator::validate(&bp);
        assert!(report.is_valid(), "unexpected errors: {report}");
    }

    #[test]
    fn unknown_entity_in_connection_yields_exactly_one_error() {
        let file = BlueprintFile {
            domain_services: vec!["A".into()],
            domain_service_connections: [("A".to_string(), vec!["X".to_string()])].into(),
            ui_framework: "react".into(),
            di_framework: "awilix".into(),
            ui_library: "bootstrap".into(),
            ..BlueprintFile::default()
        };

        let report = StructuralValidator::validate_file(&file);
        assert_eq!(report.errors().len(), 1);
        assert!(report.messages()[0].contains("unknown entity 'X'"));
    }

    #[test]
    fn validator_collects_all_errors_without_short_circuiting() {
        let file = BlueprintFile {
            entities: vec!["User".into()],
            domain_services: vec!["UserService".into()],
            application_services: vec!["AppA".into(), "AppB".into()],
            domain_service_connections: [
                ("UserService".to_string(), vec!["Ghost".to_string()]),
                ("Orphan".to_string(), vec![]),
            ]
            .into(),
            application_service_dependencies: [(
                "AppA".to_string(),
                ServiceDependencies {
                    domain_services: vec!["NoSuchService".into()],
                    repositories: vec!["IGhostRepository".into(), "NotARepo".into()],
                },
            )]
            .into(),
            ui_framework: "flutter".into(),
            di_framework: "awilix".into(),
            ui_library: "bootstrap".into(),
            ..BlueprintFile::default()
        };

        let report = StructuralValidator::validate_file(&file);
        let messages = report.messages();
        // Ghost entity, orphan connection key, missing record for AppB,
        // unknown domain-service dep, two bad repositories, bad uiFramework.
        assert_eq!(messages.len(), 7, "got: {messages:#?}");
        assert!(messages.iter().any(|m| m.contains("Orphan")));
        assert!(messages.iter().any(|m| m.contains("AppB")));
        assert!(messages.iter().any(|m| m.contains("flutter")));
        assert!(messages.iter().any(|m| m.contains("NotARepo")));
    }

    #[test]
    fn orphan_dependency_record_is_flagged() {
        let file = BlueprintFile {
            application_service_dependencies: [(
                "Stray".to_string(),
                ServiceDependencies::default(),
            )]
            .into(),
            ui_framework: "vue".into(),
            di_framework: "tsyringe".into(),
            ui_library: "tailwind".into(),
            ..BlueprintFile::default()
        };

        let report = StructuralValidator::validate_file(&file);
        assert_eq!(
            report.errors(),
            &[ValidationError::OrphanDependencyKey {
                key: "Stray".into()
            }]
        );
    }

    // ========================================================================
    // Selector Value Object Tests
    // ========================================================================

    #[test]
    fn selectors_parse_their_spellings() {
        assert_eq!("react".parse::<UiFramework>().unwrap(), UiFramework::React);
        assert_eq!("VueJS".parse::<UiFramework>().unwrap(), UiFramework::Vue);
        assert!("flutter".parse::<UiFramework>().is_err());

        assert_eq!(
            "inversify".parse::<DiFramework>().unwrap(),
            DiFramework::Inversify
        );
        assert!("spring".parse::<DiFramework>().is_err());

        assert_eq!("mui".parse::<UiLibrary>().unwrap(), UiLibrary::MaterialUi);
        assert_eq!(UiLibrary::MaterialUi.as_str(), "material-ui");
    }

    #[test]
    fn blueprint_file_serde_uses_camel_case() {
        let bp = sample_blueprint();
        let json = serde_json::to_string(&BlueprintFile::from(&bp)).unwrap();
        assert!(json.contains("\"domainServiceConnections\""));
        assert!(json.contains("\"applicationServiceDependencies\""));
        assert!(json.contains("\"uiFramework\""));
        assert!(json.contains("\"folderPath\""));
    }

    #[test]
    fn blueprint_round_trips_through_its_file_form() {
        let mut bp = sample_blueprint();
        connections::toggle(&mut bp, "UserService", "User").unwrap();
        let file = BlueprintFile::from(&bp);
        let back: Blueprint = file.try_into().unwrap();
        assert_eq!(back, bp);
    }
}

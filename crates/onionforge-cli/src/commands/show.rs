//! `onionforge show` — inspect a blueprint or a single node.

use std::path::Path;

use serde::Serialize;

use onionforge_adapters::JsonFileRepository;
use onionforge_core::application::ApplicationError;
use onionforge_core::domain::{Blueprint, NodeView, classify, connections, repository_name};
use onionforge_core::error::ForgeError;

use crate::{
    cli::{GlobalArgs, ShowArgs, ShowFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ShowArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let blueprint = load(&args.file)?;

    match &args.node {
        Some(node) => show_node(&blueprint, node, args.format, &output),
        None => show_summary(&blueprint, args.format, &output),
    }
}

/// Load a blueprint for read-only inspection.
///
/// Invalid files are rejected the same way `validate` rejects them; `show`
/// never works on an inconsistent graph.
fn load(file: &Path) -> CliResult<Blueprint> {
    JsonFileRepository::read_blueprint(file).map_err(|e| match e {
        ForgeError::Application(ApplicationError::InvalidBlueprint { errors }) => {
            CliError::BlueprintInvalid {
                path: file.to_path_buf(),
                count: errors.len(),
            }
        }
        other => CliError::Core(other),
    })
}

// ── whole-blueprint summary ───────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    folder_path: &'a str,
    entities: &'a [String],
    domain_services: &'a [String],
    application_services: &'a [String],
    repositories: Vec<String>,
}

fn show_summary(blueprint: &Blueprint, format: ShowFormat, output: &OutputManager) -> CliResult<()> {
    let repositories: Vec<String> = blueprint
        .entities()
        .iter()
        .map(|e| repository_name(e))
        .collect();

    match format {
        ShowFormat::Table => {
            output.header(&format!("Blueprint → {}", blueprint.folder_path()))?;
            output.print(&format!(
                "  selectors: ui={} di={} library={}",
                blueprint.ui_framework(),
                blueprint.di_framework(),
                blueprint.ui_library()
            ))?;

            output.header("Entities:")?;
            for entity in blueprint.entities() {
                output.print(&format!("  {entity}"))?;
            }

            output.header("Domain services:")?;
            for service in blueprint.domain_services() {
                let targets = connections::current_targets(blueprint, service);
                output.print(&format!("  {service} → [{}]", targets.join(", ")))?;
            }

            output.header("Application services:")?;
            for service in blueprint.application_services() {
                let targets = connections::current_targets(blueprint, service);
                output.print(&format!("  {service} → [{}]", targets.join(", ")))?;
            }

            output.header("Derived repositories:")?;
            for repository in &repositories {
                output.print(&format!("  {repository}"))?;
            }
        }

        ShowFormat::List => {
            for name in blueprint
                .entities()
                .iter()
                .chain(blueprint.domain_services())
                .chain(blueprint.application_services())
            {
                println!("{name}");
            }
            for repository in &repositories {
                println!("{repository}");
            }
        }

        ShowFormat::Json => {
            // JSON goes straight to stdout (bypasses OutputManager because
            // it must be parseable even in non-TTY pipes).
            let summary = Summary {
                folder_path: blueprint.folder_path(),
                entities: blueprint.entities(),
                domain_services: blueprint.domain_services(),
                application_services: blueprint.application_services(),
                repositories,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

// ── single node ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeReport {
    #[serde(flatten)]
    view: NodeView,
    possible_targets: Vec<String>,
    current_targets: Vec<String>,
}

fn show_node(
    blueprint: &Blueprint,
    node: &str,
    format: ShowFormat,
    output: &OutputManager,
) -> CliResult<()> {
    // Membership check first: an unknown name is a user error here, not the
    // core's contract violation.
    if classify(node, blueprint).is_none() {
        return Err(CliError::NodeNotFound {
            name: node.to_string(),
        });
    }

    let view = NodeView::build(node, blueprint).map_err(ForgeError::Domain)?;
    let possible = connections::possible_targets(blueprint, node);
    let current = connections::current_targets(blueprint, node);

    match format {
        ShowFormat::Table => {
            output.header(&format!("{} ({})", view.name, view.ring))?;
            if !view.entities.is_empty() {
                output.print(&format!("  entities:        [{}]", view.entities.join(", ")))?;
            }
            if !view.domain_services.is_empty() {
                output.print(&format!(
                    "  domain services: [{}]",
                    view.domain_services.join(", ")
                ))?;
            }
            if !view.repositories.is_empty() {
                output.print(&format!(
                    "  repositories:    [{}]",
                    view.repositories.join(", ")
                ))?;
            }
            output.print(&format!("  connected to:    [{}]", current.join(", ")))?;
            output.print(&format!("  can connect to:  [{}]", possible.join(", ")))?;
        }

        ShowFormat::List => {
            for target in &current {
                println!("{target}");
            }
        }

        ShowFormat::Json => {
            let report = NodeReport {
                view,
                possible_targets: possible,
                current_targets: current,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

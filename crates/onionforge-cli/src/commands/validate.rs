//! `onionforge validate` — structural validation of a blueprint file.
//!
//! Batch mode refuses to proceed on any error: the full violation list is
//! printed and the process exits non-zero, so generator pipelines can gate
//! on the exit code.

use onionforge_adapters::JsonFileRepository;
use onionforge_core::application::ApplicationError;
use onionforge_core::error::ForgeError;

use crate::{
    cli::{GlobalArgs, ValidateArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ValidateArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match JsonFileRepository::read_blueprint(&args.file) {
        Ok(blueprint) => {
            output.success(&format!(
                "'{}' is structurally valid ({} node(s), {} entity/entities)",
                args.file.display(),
                blueprint.node_count(),
                blueprint.entities().len(),
            ))?;
            Ok(())
        }
        Err(ForgeError::Application(ApplicationError::InvalidBlueprint { errors })) => {
            output.header(&format!(
                "'{}': {} structural error(s)",
                args.file.display(),
                errors.len()
            ))?;
            for error in &errors {
                output.error(error)?;
            }
            Err(CliError::BlueprintInvalid {
                path: args.file,
                count: errors.len(),
            })
        }
        Err(other) => Err(CliError::Core(other)),
    }
}

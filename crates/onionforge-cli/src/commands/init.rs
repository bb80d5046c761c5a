//! `onionforge init` — write a starter blueprint file.

use onionforge_adapters::{JsonFileRepository, starter_blueprint};
use onionforge_core::application::BlueprintRepository as _;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create a starter blueprint at the requested path.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Creating starter blueprint...")?;

    // Bail early if the file already exists and --force was not given.
    if args.path.exists() && !args.force {
        return Err(CliError::BlueprintExists { path: args.path });
    }

    let blueprint = starter_blueprint().map_err(CliError::Core)?;

    let repository = JsonFileRepository::new(&args.path);
    repository.save(&blueprint, None).map_err(CliError::Core)?;

    output.success(&format!("Starter blueprint created at {}", args.path.display()))?;
    output.print("  Edit it, then run: onionforge validate <file>")?;

    Ok(())
}

//! Starter blueprint shipped with the CLI.
//!
//! A minimal but fully wired example (one entity, one service per ring) so
//! `onionforge init` produces a file that validates clean and demonstrates
//! every connection kind.

use onionforge_core::domain::{
    Blueprint, DiFramework, UiFramework, UiLibrary, connections, repository_name,
};
use onionforge_core::error::{ForgeError, ForgeResult};

/// Build the starter blueprint.
///
/// Errors here would indicate a bug in the starter definition itself; they
/// are propagated rather than unwrapped so the CLI can report them.
pub fn starter_blueprint() -> ForgeResult<Blueprint> {
    let mut bp = Blueprint::new(
        "./generated",
        UiFramework::React,
        DiFramework::Awilix,
        UiLibrary::MaterialUi,
    );

    bp.add_entity("User").map_err(ForgeError::Domain)?;
    bp.add_domain_service("UserService").map_err(ForgeError::Domain)?;
    bp.add_application_service("UserAppService")
        .map_err(ForgeError::Domain)?;

    connections::toggle(&mut bp, "UserService", "User").map_err(ForgeError::Domain)?;
    connections::toggle(&mut bp, "UserAppService", "UserService").map_err(ForgeError::Domain)?;
    connections::toggle(&mut bp, "UserAppService", &repository_name("User"))
        .map_err(ForgeError::Domain)?;

    Ok(bp)
}

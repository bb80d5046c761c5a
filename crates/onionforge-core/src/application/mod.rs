//! Application layer for Onionforge.
//!
//! This layer contains:
//! - **Session store**: the caller-owned configuration aggregate plus the
//!   persistence port ([`BlueprintSession`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All ring, connection, and validation rules live
//! in `crate::domain`.

pub mod error;
pub mod ports;
pub mod store;

pub use error::ApplicationError;
pub use ports::BlueprintRepository;
pub use store::BlueprintSession;

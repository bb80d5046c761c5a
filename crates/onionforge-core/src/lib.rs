//! Onionforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Onionforge
//! blueprint engine: an onion-architecture configuration graph with a
//! connection/validation engine, consumed by code generators and diagram
//! editors.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        onionforge-cli (batch CLI)       │
//! │       or an interactive editor host     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           BlueprintSession              │
//! │   (one mutable blueprint per session)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: BlueprintRepository)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   onionforge-adapters (Infrastructure)  │
//! │   (JsonFileRepository, InMemory, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Blueprint, Rings, Classifier,         │
//! │   Connections, StructuralValidator)     │
//! │        No I/O, no async, no panics      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onionforge_core::application::BlueprintSession;
//!
//! # fn demo(repository: Box<dyn onionforge_core::application::BlueprintRepository>) -> onionforge_core::error::ForgeResult<()> {
//! // 1. One session per editor connection / CLI run
//! let mut session = BlueprintSession::load(repository)?;
//!
//! // 2. Edit the graph
//! session.add_entity("User")?;
//! session.add_domain_service("UserService")?;
//! session.add_connection("UserService", "User")?;
//!
//! // 3. Validate and hand off to the generator
//! assert!(session.validate().is_valid());
//! session.save(None)?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (session + ports)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{BlueprintRepository, BlueprintSession};
    pub use crate::domain::{
        Blueprint, BlueprintFile, DiFramework, NodeKind, NodeView, Ring, ServiceDependencies,
        StructuralValidator, UiFramework, UiLibrary, ValidationError, ValidationReport, classify,
        repository_name,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Infrastructure adapters for Onionforge.
//!
//! This crate implements the ports defined in
//! `onionforge_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod repository;
pub mod starter;

// Re-export commonly used adapters
pub use repository::{InMemoryRepository, JsonFileRepository};
pub use starter::starter_blueprint;

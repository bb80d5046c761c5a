//! Application ports (hexagonal architecture interfaces).

pub mod output;

pub use output::BlueprintRepository;

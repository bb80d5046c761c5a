//! Domain entities: the blueprint aggregate and its read-only views.

pub mod blueprint;
pub mod node_view;

pub use blueprint::{Blueprint, BlueprintFile, ServiceDependencies};
pub use node_view::NodeView;

//! Blueprint repository adapters.

pub mod local;
pub mod memory;

pub use local::JsonFileRepository;
pub use memory::InMemoryRepository;

//! Adapter implementations for the definition source port.

pub mod file;
pub mod memory;

pub use file::JsonFileDefinitionSource;
pub use memory::InMemoryDefinitionSource;

//! Port contracts for task definition loading.

pub mod source;

pub use source::{DefinitionLoadError, DefinitionLoadResult, DefinitionSource};

//! In-memory definition source for tests and embedding.

use crate::definition::{
    domain::TaskDefinition,
    ports::{DefinitionLoadResult, DefinitionSource},
};

/// Definition source backed by a fixed list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDefinitionSource {
    definitions: Vec<TaskDefinition>,
}

impl InMemoryDefinitionSource {
    /// Creates a source returning `definitions` in order.
    #[must_use]
    pub const fn new(definitions: Vec<TaskDefinition>) -> Self {
        Self { definitions }
    }
}

impl DefinitionSource for InMemoryDefinitionSource {
    fn load_definitions(&self) -> DefinitionLoadResult<Vec<TaskDefinition>> {
        Ok(self.definitions.clone())
    }
}

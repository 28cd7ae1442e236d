//! Domain model for recurring task definitions.

mod definition;
mod document;
mod error;
mod ids;

pub use definition::{IssueFields, TaskDefinition};
pub use document::{DefinitionDocument, duplicate_identities};
pub use error::DefinitionDomainError;
pub use ids::{AutoTaskName, TeamId};

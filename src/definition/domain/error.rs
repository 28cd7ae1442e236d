//! Error types for task definition validation.

use thiserror::Error;

/// Errors returned while constructing task definition values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionDomainError {
    /// The team identifier is empty after trimming.
    #[error("team id must not be empty")]
    EmptyTeamId,

    /// The auto task name is empty after trimming.
    #[error("auto task name must not be empty")]
    EmptyAutoTaskName,
}

//! Run-level errors.

use crate::definition::ports::DefinitionLoadError;
use thiserror::Error;

/// Reasons a whole run is reported as failed.
#[derive(Debug, Clone, Error)]
pub enum RunError {
    /// Definitions could not be loaded; no tracker call was made.
    #[error(transparent)]
    Definitions(#[from] DefinitionLoadError),

    /// At least one definition failed or was not attempted.
    #[error(
        "{failed} of {total} task definitions failed, {not_attempted} not attempted: {}",
        details.join("; ")
    )]
    Incomplete {
        /// Number of failed definitions.
        failed: usize,
        /// Number of definitions in the run.
        total: usize,
        /// Number of definitions skipped after an abort.
        not_attempted: usize,
        /// One line per failed definition.
        details: Vec<String>,
    },
}

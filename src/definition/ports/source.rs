//! Source port supplying the task definitions for a run.

use crate::definition::domain::TaskDefinition;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for definition source operations.
pub type DefinitionLoadResult<T> = Result<T, DefinitionLoadError>;

/// Supplies the ordered task definitions for a single run.
pub trait DefinitionSource: Send + Sync {
    /// Loads every definition in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionLoadError`] when the source is missing, unreadable
    /// or malformed. A load failure is fatal to the run.
    fn load_definitions(&self) -> DefinitionLoadResult<Vec<TaskDefinition>>;
}

/// Errors returned by definition sources.
#[derive(Debug, Clone, Error)]
pub enum DefinitionLoadError {
    /// The directory expected to hold the definitions does not exist.
    #[error("unable to find task definition directory '{0}'")]
    MissingDirectory(Utf8PathBuf),

    /// The definition file does not exist.
    #[error("unable to find task definition file '{0}'")]
    MissingFile(Utf8PathBuf),

    /// The definition file exists but could not be read.
    #[error("failed to read task definitions from '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The definition file is not a valid definition document.
    #[error("malformed task definitions in '{path}': {source}")]
    Malformed {
        /// Path of the malformed document.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl DefinitionLoadError {
    /// Wraps an I/O failure for `path`.
    pub fn read(path: impl Into<Utf8PathBuf>, err: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a parse failure for `path`.
    pub fn malformed(path: impl Into<Utf8PathBuf>, err: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}

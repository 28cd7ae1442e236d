//! JSON file definition source.

use crate::definition::{
    domain::{DefinitionDocument, TaskDefinition, duplicate_identities},
    ports::{DefinitionLoadError, DefinitionLoadResult, DefinitionSource},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::{debug, warn};

/// Default location of the definition document, relative to the working
/// directory.
pub const DEFAULT_DEFINITIONS_PATH: &str = "tasks/index.json";

/// Loads task definitions from a JSON document on disk.
///
/// The containing directory is opened with ambient authority and the file
/// is read relative to it, so a missing directory and a missing file are
/// reported separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileDefinitionSource {
    path: Utf8PathBuf,
}

impl JsonFileDefinitionSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn directory(&self) -> &Utf8Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."))
    }

    fn read_document(&self) -> DefinitionLoadResult<String> {
        let directory = self.directory();
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| DefinitionLoadError::MissingFile(self.path.clone()))?;

        let dir = Dir::open_ambient_dir(directory, ambient_authority()).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                DefinitionLoadError::MissingDirectory(directory.to_owned())
            } else {
                DefinitionLoadError::read(directory, err)
            }
        })?;

        dir.read_to_string(file_name).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                DefinitionLoadError::MissingFile(self.path.clone())
            } else {
                DefinitionLoadError::read(self.path.clone(), err)
            }
        })
    }
}

impl Default for JsonFileDefinitionSource {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITIONS_PATH)
    }
}

impl DefinitionSource for JsonFileDefinitionSource {
    fn load_definitions(&self) -> DefinitionLoadResult<Vec<TaskDefinition>> {
        let contents = self.read_document()?;
        let document: DefinitionDocument = serde_json::from_str(&contents)
            .map_err(|err| DefinitionLoadError::malformed(self.path.clone(), err))?;

        for (team_id, auto_task_name) in duplicate_identities(&document.issues) {
            warn!(
                %team_id,
                %auto_task_name,
                "task definition declared more than once; occurrences will be shared"
            );
        }
        debug!(
            path = %self.path,
            count = document.issues.len(),
            "loaded task definitions"
        );
        Ok(document.issues)
    }
}

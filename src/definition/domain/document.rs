//! Interchange document holding a list of task definitions.

use super::{AutoTaskName, TaskDefinition, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level task definition document: `{"issues": [ ... ]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    /// Definitions in declaration order.
    pub issues: Vec<TaskDefinition>,
}

/// Returns the `(team, name)` pairs declared more than once.
///
/// Names are compared case-insensitively because the tracker lookup matches
/// titles without regard to case. Each duplicate pair is reported once, in
/// the order its second declaration appears.
#[must_use]
pub fn duplicate_identities(definitions: &[TaskDefinition]) -> Vec<(TeamId, AutoTaskName)> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for definition in definitions {
        let key = (
            definition.team_id().clone(),
            definition.auto_task_name().folded(),
        );
        if !seen.insert(key.clone()) && reported.insert(key) {
            duplicates.push((
                definition.team_id().clone(),
                definition.auto_task_name().clone(),
            ));
        }
    }
    duplicates
}

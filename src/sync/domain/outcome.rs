//! Per-definition results.

use crate::definition::domain::{AutoTaskName, TaskDefinition, TeamId};
use crate::tracker::{domain::IssueRecord, ports::TrackerError};
use thiserror::Error;

/// Why a single definition failed.
#[derive(Debug, Clone, Error)]
pub enum SyncFailure {
    /// The previous occurrence could not be located.
    #[error("failed to look up previous occurrence: {0}")]
    Lookup(#[source] TrackerError),

    /// The new occurrence could not be created.
    #[error("failed to create issue: {0}")]
    Creation(#[source] TrackerError),
}

/// Result of processing one definition.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// A new occurrence was created.
    Created(IssueRecord),
    /// Nothing was due today.
    SkippedNotDue,
    /// Lookup or creation failed.
    Failed(SyncFailure),
}

impl SyncOutcome {
    /// Returns `true` for [`SyncOutcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of one definition, tagged with its identity.
#[derive(Debug, Clone)]
pub struct DefinitionReport {
    team_id: TeamId,
    auto_task_name: AutoTaskName,
    outcome: SyncOutcome,
}

impl DefinitionReport {
    /// Pairs an outcome with the definition it belongs to.
    #[must_use]
    pub fn new(definition: &TaskDefinition, outcome: SyncOutcome) -> Self {
        Self {
            team_id: definition.team_id().clone(),
            auto_task_name: definition.auto_task_name().clone(),
            outcome,
        }
    }

    /// Returns the definition's team.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns the definition's series name.
    #[must_use]
    pub const fn auto_task_name(&self) -> &AutoTaskName {
        &self.auto_task_name
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> &SyncOutcome {
        &self.outcome
    }
}

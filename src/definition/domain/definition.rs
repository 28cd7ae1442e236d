//! Recurring task definition.

use super::{AutoTaskName, TeamId};
use crate::schedule::domain::RecurrenceRule;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque issue attributes forwarded verbatim to the tracker on creation
/// (e.g. `description`, `priority`, `labelIds`).
pub type IssueFields = serde_json::Map<String, Value>;

/// A user-declared recurring task.
///
/// The interchange form is a flat JSON object: `teamId`, `autoTaskName` and
/// `repeatOptions` are recognised, every other key is kept in
/// [`TaskDefinition::issue_fields`].
///
/// ```json
/// {
///   "teamId": "9cfb482a-81e3-4154-b5b9-2c805e70a02d",
///   "autoTaskName": "Weekly dependency review",
///   "repeatOptions": { "type": "weekly", "day": "monday" },
///   "description": "Check Dependabot PRs",
///   "priority": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    team_id: TeamId,
    auto_task_name: AutoTaskName,
    repeat_options: RecurrenceRule,
    #[serde(flatten)]
    issue_fields: IssueFields,
}

impl TaskDefinition {
    /// Creates a definition with no extra issue fields.
    #[must_use]
    pub fn new(team_id: TeamId, auto_task_name: AutoTaskName, repeat_options: RecurrenceRule) -> Self {
        Self {
            team_id,
            auto_task_name,
            repeat_options,
            issue_fields: IssueFields::new(),
        }
    }

    /// Adds a pass-through issue field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.issue_fields.insert(key.into(), value.into());
        self
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns the series name.
    #[must_use]
    pub const fn auto_task_name(&self) -> &AutoTaskName {
        &self.auto_task_name
    }

    /// Returns the recurrence rule.
    #[must_use]
    pub const fn repeat_options(&self) -> RecurrenceRule {
        self.repeat_options
    }

    /// Returns the pass-through issue fields.
    #[must_use]
    pub const fn issue_fields(&self) -> &IssueFields {
        &self.issue_fields
    }
}

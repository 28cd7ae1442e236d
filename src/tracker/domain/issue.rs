//! Issue query, draft and record value objects.

use crate::definition::domain::{IssueFields, TaskDefinition, TeamId};
use crate::schedule::domain::Occurrence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter for the most recent occurrence of a series.
///
/// Matches issues in `team_id` whose title contains `title_contains`,
/// ignoring case. Adapters return at most one record, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    title_contains: String,
    team_id: TeamId,
}

impl IssueQuery {
    /// Creates a query from raw parts.
    #[must_use]
    pub fn new(title_contains: impl Into<String>, team_id: TeamId) -> Self {
        Self {
            title_contains: title_contains.into(),
            team_id,
        }
    }

    /// Builds the identity query for a task definition.
    #[must_use]
    pub fn for_definition(definition: &TaskDefinition) -> Self {
        Self::new(
            definition.auto_task_name().as_str(),
            definition.team_id().clone(),
        )
    }

    /// Returns the title substring to match.
    #[must_use]
    pub fn title_contains(&self) -> &str {
        &self.title_contains
    }

    /// Returns the team filter.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns `true` when `title` satisfies this query's title filter.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        title
            .to_lowercase()
            .contains(&self.title_contains.to_lowercase())
    }
}

/// Issue creation payload.
///
/// Carries the definition's pass-through fields plus the team and title.
/// The recurrence rule and series name are internal and never sent.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    team_id: TeamId,
    title: String,
    fields: IssueFields,
}

impl IssueDraft {
    const TITLE_KEY: &'static str = "title";
    const TEAM_KEY: &'static str = "teamId";

    /// Builds the creation payload for a due definition.
    ///
    /// The title is always the definition's `autoTaskName`; a `title` key
    /// among the pass-through fields is discarded.
    #[must_use]
    pub fn for_definition(definition: &TaskDefinition) -> Self {
        let mut fields = definition.issue_fields().clone();
        fields.remove(Self::TITLE_KEY);
        Self {
            team_id: definition.team_id().clone(),
            title: definition.auto_task_name().as_str().to_owned(),
            fields,
        }
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pass-through fields.
    #[must_use]
    pub const fn fields(&self) -> &IssueFields {
        &self.fields
    }

    /// Returns the flat tracker input: pass-through fields with `teamId`
    /// and `title` set.
    #[must_use]
    pub fn to_input(&self) -> IssueFields {
        let mut input = self.fields.clone();
        input.insert(
            Self::TEAM_KEY.to_owned(),
            Value::String(self.team_id.as_str().to_owned()),
        );
        input.insert(Self::TITLE_KEY.to_owned(), Value::String(self.title.clone()));
        input
    }
}

/// Issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Tracker-internal identifier.
    pub id: String,
    /// Human-readable identifier (e.g. `ENG-42`).
    pub identifier: String,
    /// Issue title.
    pub title: String,
    /// Browser URL, when the tracker provides one.
    #[serde(default)]
    pub url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl IssueRecord {
    /// Converts the record into an occurrence for recurrence evaluation.
    #[must_use]
    pub fn to_occurrence(&self) -> Occurrence {
        Occurrence::new(self.created_at).with_issue_identifier(self.identifier.clone())
    }
}

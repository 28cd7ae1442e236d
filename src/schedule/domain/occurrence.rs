//! Previous occurrence of a recurring task.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// The most recent issue created for a task definition, as reported by the
/// tracker.
///
/// Occurrences are never stored locally; they are reconstructed from a
/// tracker query on every run and consumed immediately by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    created_at: DateTime<Utc>,
    issue_identifier: Option<String>,
}

impl Occurrence {
    /// Creates an occurrence from its creation timestamp.
    #[must_use]
    pub const fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            issue_identifier: None,
        }
    }

    /// Sets the tracker's human-readable issue identifier (e.g. `ENG-42`).
    #[must_use]
    pub fn with_issue_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.issue_identifier = Some(identifier.into());
        self
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the tracker issue identifier, if known.
    #[must_use]
    pub fn issue_identifier(&self) -> Option<&str> {
        self.issue_identifier.as_deref()
    }

    /// Returns the calendar date of creation in the given time zone.
    #[must_use]
    pub fn calendar_date(&self, zone: FixedOffset) -> NaiveDate {
        self.created_at.with_timezone(&zone).date_naive()
    }
}

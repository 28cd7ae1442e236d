//! Aggregated run report.

use super::{DefinitionReport, RunError, SyncFailure, SyncOutcome, SyncRunId};
use chrono::NaiveDate;

/// Ordered outcomes of one run.
///
/// `reports` follows definition order. Definitions skipped because the run
/// aborted are only counted in `not_attempted`.
#[derive(Debug, Clone)]
pub struct SyncReport {
    run_id: SyncRunId,
    date: NaiveDate,
    reports: Vec<DefinitionReport>,
    not_attempted: usize,
}

impl SyncReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(
        run_id: SyncRunId,
        date: NaiveDate,
        reports: Vec<DefinitionReport>,
        not_attempted: usize,
    ) -> Self {
        Self {
            run_id,
            date,
            reports,
            not_attempted,
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> SyncRunId {
        self.run_id
    }

    /// Returns the calendar date the run evaluated against.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the per-definition reports in definition order.
    #[must_use]
    pub fn reports(&self) -> &[DefinitionReport] {
        &self.reports
    }

    /// Returns the bare outcomes in definition order.
    pub fn outcomes(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.reports.iter().map(DefinitionReport::outcome)
    }

    /// Number of definitions in the run, attempted or not.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.reports.len() + self.not_attempted
    }

    /// Number of definitions skipped because the run aborted.
    #[must_use]
    pub const fn not_attempted(&self) -> usize {
        self.not_attempted
    }

    /// Number of issues created.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.outcomes()
            .filter(|outcome| matches!(outcome, SyncOutcome::Created(_)))
            .count()
    }

    /// Number of definitions not due today.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes()
            .filter(|outcome| matches!(outcome, SyncOutcome::SkippedNotDue))
            .count()
    }

    /// Number of failed definitions.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Failed definitions with their failure.
    pub fn failures(&self) -> impl Iterator<Item = (&DefinitionReport, &SyncFailure)> {
        self.reports
            .iter()
            .filter_map(|report| match report.outcome() {
                SyncOutcome::Failed(failure) => Some((report, failure)),
                SyncOutcome::Created(_) | SyncOutcome::SkippedNotDue => None,
            })
    }

    /// Returns `true` when no definition failed and none was left out.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.not_attempted == 0 && self.failed_count() == 0
    }

    /// Converts an unsuccessful run into a [`RunError`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Incomplete`] when any definition failed or was
    /// not attempted.
    pub fn ensure_success(&self) -> Result<(), RunError> {
        if self.is_success() {
            return Ok(());
        }
        Err(RunError::Incomplete {
            failed: self.failed_count(),
            total: self.total(),
            not_attempted: self.not_attempted,
            details: self
                .failures()
                .map(|(report, failure)| {
                    format!(
                        "'{}' (team {}): {failure}",
                        report.auto_task_name(),
                        report.team_id()
                    )
                })
                .collect(),
        })
    }
}

//! Synchronisation run orchestration.

use super::OccurrenceLocator;
use crate::definition::{
    domain::{TaskDefinition, duplicate_identities},
    ports::DefinitionSource,
};
use crate::schedule::domain::Occurrence;
use crate::sync::domain::{
    DefinitionReport, FailurePolicy, RunError, SyncFailure, SyncOptions, SyncOutcome, SyncReport,
    SyncRunId,
};
use crate::tracker::{domain::IssueDraft, ports::IssueTracker};
use chrono::NaiveDate;
use futures::{StreamExt, stream};
use mockable::Clock;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// Runs every task definition through locate, evaluate and create.
///
/// Outcomes are reported in definition order whatever the concurrency
/// limit. The tracker handle is shared read-only between definitions.
/// Definitions sharing a team and case-folded name share one occurrence
/// history, so a run containing such pairs is processed sequentially.
pub struct SyncService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    tracker: Arc<T>,
    locator: OccurrenceLocator<T>,
    clock: Arc<C>,
    options: SyncOptions,
}

impl<T, C> SyncService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    /// Creates a service with default options: UTC dates, isolated
    /// failures, one definition at a time.
    #[must_use]
    pub fn new(tracker: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            locator: OccurrenceLocator::new(Arc::clone(&tracker)),
            tracker,
            clock,
            options: SyncOptions::default(),
        }
    }

    /// Replaces the pipeline options.
    #[must_use]
    pub const fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the pipeline options.
    #[must_use]
    pub const fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Loads definitions from `source` and runs them.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Definitions`] when loading fails, before any
    /// tracker call, and [`RunError::Incomplete`] when any definition
    /// failed.
    pub async fn run_from_source(
        &self,
        source: &impl DefinitionSource,
    ) -> Result<SyncReport, RunError> {
        let definitions = source.load_definitions()?;
        let report = self.run(&definitions).await;
        report.ensure_success()?;
        Ok(report)
    }

    /// Processes `definitions` and returns one outcome per attempted
    /// definition, in input order.
    pub async fn run(&self, definitions: &[TaskDefinition]) -> SyncReport {
        let run_id = SyncRunId::new();
        let today = self.options.evaluator().today(&*self.clock);
        let span = info_span!(
            "sync_run",
            %run_id,
            date = %today,
            policy = %self.options.failure_policy()
        );

        async move {
            let report = match self.options.failure_policy() {
                FailurePolicy::Isolate => self.run_isolated(run_id, today, definitions).await,
                FailurePolicy::AbortOnFirstError => {
                    self.run_until_failure(run_id, today, definitions).await
                }
            };
            info!(
                created = report.created_count(),
                skipped = report.skipped_count(),
                failed = report.failed_count(),
                not_attempted = report.not_attempted(),
                total = report.total(),
                "sync run finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn run_isolated(
        &self,
        run_id: SyncRunId,
        today: NaiveDate,
        definitions: &[TaskDefinition],
    ) -> SyncReport {
        let reports = stream::iter(definitions)
            .map(|definition| self.process(definition, today))
            .buffered(Self::effective_concurrency(
                self.options.concurrency().get(),
                definitions,
            ))
            .collect::<Vec<_>>()
            .await;
        SyncReport::new(run_id, today, reports, 0)
    }

    fn effective_concurrency(limit: usize, definitions: &[TaskDefinition]) -> usize {
        if limit == 1 {
            return limit;
        }
        let duplicates = duplicate_identities(definitions);
        if duplicates.is_empty() {
            return limit;
        }
        debug!(
            duplicates = duplicates.len(),
            "duplicate definitions present, processing sequentially"
        );
        1
    }

    async fn run_until_failure(
        &self,
        run_id: SyncRunId,
        today: NaiveDate,
        definitions: &[TaskDefinition],
    ) -> SyncReport {
        let mut reports = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let report = self.process(definition, today).await;
            let failed = report.outcome().is_failure();
            reports.push(report);
            if failed {
                break;
            }
        }
        let not_attempted = definitions.len() - reports.len();
        if not_attempted > 0 {
            warn!(not_attempted, "aborting run after first failure");
        }
        SyncReport::new(run_id, today, reports, not_attempted)
    }

    async fn process(&self, definition: &TaskDefinition, today: NaiveDate) -> DefinitionReport {
        let span = info_span!(
            "definition",
            team_id = %definition.team_id(),
            auto_task_name = %definition.auto_task_name()
        );
        let outcome = self.sync_definition(definition, today).instrument(span).await;
        DefinitionReport::new(definition, outcome)
    }

    async fn sync_definition(&self, definition: &TaskDefinition, today: NaiveDate) -> SyncOutcome {
        let previous = match self.locator.locate(definition).await {
            Ok(previous) => previous,
            Err(err) => {
                warn!(error = %err, "previous occurrence lookup failed");
                return SyncOutcome::Failed(SyncFailure::Lookup(err));
            }
        };

        let rule = definition.repeat_options();
        if !self
            .options
            .evaluator()
            .is_due(today, rule, previous.as_ref())
        {
            debug!(
                %rule,
                previous = previous.as_ref().and_then(Occurrence::issue_identifier),
                "not due today"
            );
            return SyncOutcome::SkippedNotDue;
        }

        match self
            .tracker
            .create_issue(&IssueDraft::for_definition(definition))
            .await
        {
            Ok(issue) => {
                info!(identifier = %issue.identifier, %rule, "created issue");
                SyncOutcome::Created(issue)
            }
            Err(err) => {
                warn!(error = %err, "issue creation failed");
                SyncOutcome::Failed(SyncFailure::Creation(err))
            }
        }
    }
}

impl<T, C> Clone for SyncService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
            locator: self.locator.clone(),
            clock: Arc::clone(&self.clock),
            options: self.options,
        }
    }
}

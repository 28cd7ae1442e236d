//! Previous-occurrence lookup.

use crate::definition::domain::TaskDefinition;
use crate::schedule::domain::Occurrence;
use crate::tracker::{
    domain::{IssueQuery, IssueRecord},
    ports::{IssueTracker, TrackerResult},
};
use std::sync::Arc;

/// Finds the most recent occurrence of a definition's series.
///
/// Issues exactly one tracker query per call. Errors propagate unretried;
/// the caller turns them into a lookup failure for that definition.
pub struct OccurrenceLocator<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
}

impl<T> OccurrenceLocator<T>
where
    T: IssueTracker,
{
    /// Creates a locator over a shared tracker.
    #[must_use]
    pub const fn new(tracker: Arc<T>) -> Self {
        Self { tracker }
    }

    /// Returns the newest occurrence in the definition's team whose title
    /// contains its series name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the tracker error when the query fails.
    pub async fn locate(&self, definition: &TaskDefinition) -> TrackerResult<Option<Occurrence>> {
        let query = IssueQuery::for_definition(definition);
        let latest = self.tracker.query_latest_issue(&query).await?;
        Ok(latest.as_ref().map(IssueRecord::to_occurrence))
    }
}

impl<T> Clone for OccurrenceLocator<T>
where
    T: IssueTracker,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
        }
    }
}

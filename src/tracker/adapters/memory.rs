//! In-memory issue tracker for tests and local dry runs.

use crate::definition::domain::TeamId;
use crate::tracker::{
    domain::{IssueDraft, IssueQuery, IssueRecord},
    ports::{IssueTracker, TrackerError, TrackerResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory issue tracker.
///
/// Created issues are timestamped with the injected clock. Lookup and
/// creation failures can be injected per title to exercise failure
/// handling.
pub struct InMemoryIssueTracker<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTrackerState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    issues: Vec<StoredIssue>,
    failing_lookups: HashSet<String>,
    failing_creations: HashSet<String>,
    created: Vec<IssueDraft>,
    next_number: u64,
}

#[derive(Debug, Clone)]
struct StoredIssue {
    team_id: TeamId,
    record: IssueRecord,
}

fn lock_error(err: impl std::fmt::Display) -> TrackerError {
    TrackerError::transport(std::io::Error::other(err.to_string()))
}

impl<C> InMemoryIssueTracker<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty tracker.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTrackerState::default())),
            clock,
        }
    }

    /// Records an existing issue, e.g. one created by an earlier run or by
    /// hand.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when lock acquisition fails.
    pub fn seed_issue(
        &self,
        team_id: TeamId,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> TrackerResult<IssueRecord> {
        let mut state = self.state.write().map_err(lock_error)?;
        let record = next_record(&mut state, title.into(), created_at);
        state.issues.push(StoredIssue {
            team_id,
            record: record.clone(),
        });
        Ok(record)
    }

    /// Makes every lookup whose title filter equals `title` (ignoring case)
    /// fail.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when lock acquisition fails.
    pub fn fail_lookups_for(&self, title: &str) -> TrackerResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing_lookups.insert(title.to_lowercase());
        Ok(())
    }

    /// Makes every creation whose title equals `title` (ignoring case) fail.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when lock acquisition fails.
    pub fn fail_creations_for(&self, title: &str) -> TrackerResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing_creations.insert(title.to_lowercase());
        Ok(())
    }

    /// Returns every draft successfully created, in creation order.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when lock acquisition fails.
    pub fn created_drafts(&self) -> TrackerResult<Vec<IssueDraft>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.created.clone())
    }

    /// Returns every stored issue, seeded or created.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when lock acquisition fails.
    pub fn issues(&self) -> TrackerResult<Vec<IssueRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.issues.iter().map(|issue| issue.record.clone()).collect())
    }
}

fn next_record(
    state: &mut InMemoryTrackerState,
    title: String,
    created_at: DateTime<Utc>,
) -> IssueRecord {
    state.next_number += 1;
    let number = state.next_number;
    IssueRecord {
        id: format!("issue-{number}"),
        identifier: format!("AUTO-{number}"),
        title,
        url: None,
        created_at,
    }
}

impl<C> Clone for InMemoryIssueTracker<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<C> IssueTracker for InMemoryIssueTracker<C>
where
    C: Clock + Send + Sync,
{
    async fn query_latest_issue(&self, query: &IssueQuery) -> TrackerResult<Option<IssueRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        if state
            .failing_lookups
            .contains(&query.title_contains().to_lowercase())
        {
            return Err(TrackerError::Unavailable(format!(
                "lookup failed for '{}'",
                query.title_contains()
            )));
        }

        // Later entries win ties so the most recently stored issue is newest.
        let latest = state
            .issues
            .iter()
            .filter(|issue| &issue.team_id == query.team_id())
            .filter(|issue| query.matches_title(&issue.record.title))
            .max_by_key(|issue| issue.record.created_at)
            .map(|issue| issue.record.clone());
        Ok(latest)
    }

    async fn create_issue(&self, draft: &IssueDraft) -> TrackerResult<IssueRecord> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.failing_creations.contains(&draft.title().to_lowercase()) {
            return Err(TrackerError::Unavailable(format!(
                "creation failed for '{}'",
                draft.title()
            )));
        }

        let record = next_record(&mut state, draft.title().to_owned(), self.clock.utc());
        state.issues.push(StoredIssue {
            team_id: draft.team_id().clone(),
            record: record.clone(),
        });
        state.created.push(draft.clone());
        Ok(record)
    }
}

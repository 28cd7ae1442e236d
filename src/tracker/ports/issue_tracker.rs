//! Issue tracker port used to locate and create occurrences.

use crate::tracker::domain::{IssueDraft, IssueQuery, IssueRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Issue tracker contract.
///
/// Implementations are shared read-only across concurrently processed
/// definitions and must not retry internally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Returns the newest issue matching `query`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the query cannot be executed.
    async fn query_latest_issue(&self, query: &IssueQuery) -> TrackerResult<Option<IssueRecord>>;

    /// Creates an issue from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the tracker does not create the issue.
    async fn create_issue(&self, draft: &IssueDraft) -> TrackerResult<IssueRecord>;
}

/// Errors returned by issue tracker adapters.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The request did not complete within the client timeout.
    #[error("tracker request timed out")]
    Timeout,

    /// The request could not be sent or its response not received.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The tracker answered with a non-success HTTP status.
    #[error("tracker responded with HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The tracker reported errors for the request.
    #[error("tracker rejected the request: {}", .0.join("; "))]
    Api(Vec<String>),

    /// The response did not have the expected shape.
    #[error("unexpected tracker response: {0}")]
    Decode(String),

    /// The tracker accepted the mutation but reported it unsuccessful.
    #[error("tracker reported the issue was not created")]
    Rejected,

    /// The tracker is unavailable.
    #[error("tracker unavailable: {0}")]
    Unavailable(String),
}

impl TrackerError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

//! Port contracts for issue tracker access.

pub mod issue_tracker;

#[cfg(test)]
pub use issue_tracker::MockIssueTracker;
pub use issue_tracker::{IssueTracker, TrackerError, TrackerResult};

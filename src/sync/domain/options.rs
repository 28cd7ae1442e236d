//! Pipeline options.

use super::FailurePolicy;
use crate::schedule::domain::RecurrenceEvaluator;
use std::num::NonZeroUsize;

/// Tunables for a [`crate::sync::services::SyncService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    evaluator: RecurrenceEvaluator,
    failure_policy: FailurePolicy,
    concurrency: NonZeroUsize,
}

impl SyncOptions {
    /// Creates options with the isolate policy and sequential execution.
    #[must_use]
    pub const fn new(evaluator: RecurrenceEvaluator) -> Self {
        Self {
            evaluator,
            failure_policy: FailurePolicy::Isolate,
            concurrency: NonZeroUsize::MIN,
        }
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Sets how many definitions may be processed at once.
    ///
    /// Ignored under [`FailurePolicy::AbortOnFirstError`].
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Returns the recurrence evaluator.
    #[must_use]
    pub const fn evaluator(&self) -> RecurrenceEvaluator {
        self.evaluator
    }

    /// Returns the failure policy.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Returns the effective concurrency limit.
    #[must_use]
    pub const fn concurrency(&self) -> NonZeroUsize {
        match self.failure_policy {
            FailurePolicy::Isolate => self.concurrency,
            FailurePolicy::AbortOnFirstError => NonZeroUsize::MIN,
        }
    }
}

impl SyncOptions {
    /// Default options: UTC dates with sequential, isolated processing.
    pub const UTC: Self = Self::new(RecurrenceEvaluator::utc());
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::UTC
    }
}

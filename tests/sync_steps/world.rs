//! Shared world state for synchronisation pipeline BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::SteppingClock;
use autotask::definition::domain::TaskDefinition;
use autotask::sync::domain::{SyncOptions, SyncReport};
use autotask::sync::services::SyncService;
use autotask::tracker::adapters::InMemoryIssueTracker;
use rstest::fixture;

/// Tracker type used by the BDD world.
pub type TestTracker = InMemoryIssueTracker<SteppingClock>;

/// Scenario world for synchronisation pipeline behaviour tests.
pub struct SyncWorld {
    pub clock: Arc<SteppingClock>,
    pub tracker: Arc<TestTracker>,
    pub options: SyncOptions,
    pub definitions: Vec<TaskDefinition>,
    pub last_report: Option<SyncReport>,
}

impl SyncWorld {
    /// Creates a world with an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(SteppingClock::at(2024, 8, 9, 7));
        let tracker = Arc::new(InMemoryIssueTracker::new(Arc::clone(&clock)));
        Self {
            clock,
            tracker,
            options: SyncOptions::default(),
            definitions: Vec::new(),
            last_report: None,
        }
    }

    /// Builds a service over the world's tracker and clock.
    pub fn service(&self) -> SyncService<TestTracker, SteppingClock> {
        SyncService::new(Arc::clone(&self.tracker), Arc::clone(&self.clock))
            .with_options(self.options)
    }

    /// Returns the last run's report.
    pub fn report(&self) -> Result<&SyncReport, eyre::Report> {
        self.last_report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("sync has not run in scenario"))
    }
}

impl Default for SyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SyncWorld {
    SyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

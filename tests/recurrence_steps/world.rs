//! Shared world state for recurrence evaluation BDD scenarios.

use autotask::schedule::domain::{Occurrence, RecurrenceEvaluator, RecurrenceRule};
use rstest::fixture;

/// Scenario world for recurrence evaluation.
#[derive(Default)]
pub struct RecurrenceWorld {
    pub evaluator: RecurrenceEvaluator,
    pub rule: Option<RecurrenceRule>,
    pub previous: Option<Occurrence>,
    pub verdict: Option<bool>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RecurrenceWorld {
    RecurrenceWorld::default()
}

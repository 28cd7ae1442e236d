//! Due-date decision for recurring task definitions.

use super::{Occurrence, RecurrenceRule};
use chrono::{FixedOffset, NaiveDate};
use mockable::Clock;

// Evaluated at compile time.
const UTC_OFFSET: FixedOffset = match FixedOffset::east_opt(0) {
    Some(offset) => offset,
    None => panic!("zero is a valid UTC offset"),
};

/// Decides whether a new occurrence is due on `today`.
///
/// A previous occurrence dated on `today` blocks creation regardless of the
/// rule. Otherwise the rule alone decides; the number of days elapsed since
/// the previous occurrence is irrelevant.
#[must_use]
pub fn is_due(today: NaiveDate, rule: RecurrenceRule, previous: Option<NaiveDate>) -> bool {
    if previous.is_some_and(|date| date == today) {
        return false;
    }
    rule.fires_on(today)
}

/// Evaluates recurrence rules against calendar dates in a reference time
/// zone.
///
/// The zone determines both what "today" is and which calendar date an
/// occurrence's UTC creation timestamp falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceEvaluator {
    zone: FixedOffset,
}

impl RecurrenceEvaluator {
    /// Creates an evaluator for a fixed UTC offset.
    #[must_use]
    pub const fn new(zone: FixedOffset) -> Self {
        Self { zone }
    }

    /// Creates an evaluator that compares dates in UTC.
    #[must_use]
    pub const fn utc() -> Self {
        Self::new(UTC_OFFSET)
    }

    /// Returns the reference offset.
    #[must_use]
    pub const fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Returns the current calendar date in the reference zone.
    #[must_use]
    pub fn today(&self, clock: &impl Clock) -> NaiveDate {
        clock.utc().with_timezone(&self.zone).date_naive()
    }

    /// Decides whether `rule` is due on `today` given the previous
    /// occurrence, if any.
    #[must_use]
    pub fn is_due(
        &self,
        today: NaiveDate,
        rule: RecurrenceRule,
        previous: Option<&Occurrence>,
    ) -> bool {
        is_due(
            today,
            rule,
            previous.map(|occurrence| occurrence.calendar_date(self.zone)),
        )
    }
}

impl Default for RecurrenceEvaluator {
    fn default() -> Self {
        Self::utc()
    }
}

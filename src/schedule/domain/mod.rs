//! Domain model for recurrence evaluation.

mod error;
mod evaluator;
mod occurrence;
mod rule;

pub use error::ScheduleDomainError;
pub use evaluator::{RecurrenceEvaluator, is_due};
pub use occurrence::Occurrence;
pub use rule::{DayOfMonth, DayOfWeek, RecurrenceRule};

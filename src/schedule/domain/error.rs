//! Error types for recurrence rule validation and parsing.

use thiserror::Error;

/// Errors returned while constructing recurrence rule values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleDomainError {
    /// The day of month lies outside `1..=31`.
    #[error("invalid day of month {0}, expected a value between 1 and 31")]
    InvalidDayOfMonth(u32),

    /// The weekday name is not recognised.
    #[error("unknown day of week: {0}")]
    InvalidDayOfWeek(String),
}

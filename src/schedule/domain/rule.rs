//! Recurrence rule value objects.

use super::ScheduleDomainError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named day of the week used by weekly rules.
///
/// Parsing is case-insensitive and accepts both full (`"friday"`) and
/// three-letter (`"fri"`) names. The canonical form is the lowercase full
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayOfWeek {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Returns the weekday of a calendar date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl TryFrom<&str> for DayOfWeek {
    type Error = ScheduleDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(ScheduleDomainError::InvalidDayOfWeek(value.to_owned())),
        }
    }
}

impl TryFrom<String> for DayOfWeek {
    type Error = ScheduleDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<DayOfWeek> for String {
    fn from(value: DayOfWeek) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of month used by monthly rules, in `1..=31`.
///
/// No clamping is applied: a value of 31 simply never matches in a month
/// with fewer days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayOfMonth(u32);

impl DayOfMonth {
    const LAST: u32 = 31;

    /// Creates a validated day of month.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::InvalidDayOfMonth`] when the value is
    /// zero or greater than 31.
    pub const fn new(value: u32) -> Result<Self, ScheduleDomainError> {
        if value == 0 || value > Self::LAST {
            return Err(ScheduleDomainError::InvalidDayOfMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying day number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DayOfMonth {
    type Error = ScheduleDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfMonth> for u32 {
    fn from(value: DayOfMonth) -> Self {
        value.0
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cadence of a recurring task definition.
///
/// Serialised with an internal `type` tag, e.g. `{"type": "weekly", "day":
/// "friday"}`. Any tag other than `daily`, `weekly` or `monthly` becomes
/// [`RecurrenceRule::Unsupported`], which is never due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Due every calendar day.
    Daily,
    /// Due when today's weekday equals `day`.
    Weekly {
        /// Weekday on which the task fires.
        day: DayOfWeek,
    },
    /// Due when today's day of month equals `day`.
    Monthly {
        /// Day of month on which the task fires.
        day: DayOfMonth,
    },
    /// Unrecognised cadence.
    #[serde(other)]
    Unsupported,
}

impl RecurrenceRule {
    /// Returns `true` when the rule fires on `date`.
    ///
    /// This ignores previous occurrences; see
    /// [`super::RecurrenceEvaluator::is_due`] for the full decision.
    #[must_use]
    pub fn fires_on(self, date: NaiveDate) -> bool {
        match self {
            Self::Daily => true,
            Self::Weekly { day } => DayOfWeek::of(date) == day,
            Self::Monthly { day } => date.day() == day.value(),
            Self::Unsupported => false,
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly { day } => write!(f, "weekly on {day}"),
            Self::Monthly { day } => write!(f, "monthly on day {day}"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

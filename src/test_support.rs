//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to `hour:00` UTC on the given date.
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self(utc(year, month, day, hour))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a UTC instant at the top of the given hour.
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid UTC timestamp")
}

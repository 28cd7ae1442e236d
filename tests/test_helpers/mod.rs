//! Shared clocks, builders and environment guards for integration tests.

#![expect(
    dead_code,
    reason = "each integration test crate uses a different subset of helpers"
)]

use autotask::definition::domain::{AutoTaskName, TaskDefinition, TeamId};
use autotask::schedule::domain::RecurrenceRule;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Clock whose instant can be moved between runs.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl SteppingClock {
    /// Creates a clock at `hour:00` UTC on the given date.
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            now: Arc::new(RwLock::new(utc(year, month, day, hour))),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: chrono::Duration) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += step;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds a UTC instant at the top of the given hour.
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid UTC timestamp")
}

/// Builds a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a task definition for `team`.
pub fn definition(team: &str, name: &str, rule: RecurrenceRule) -> TaskDefinition {
    TaskDefinition::new(
        TeamId::new(team).expect("valid team id"),
        AutoTaskName::new(name).expect("valid task name"),
        rule,
    )
}

/// Guard that applies a scoped environment variable update.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets or removes environment variables for the guard lifetime.
    pub fn set_many(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((OsString::from(key), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

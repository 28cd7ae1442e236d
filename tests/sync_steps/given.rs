//! Given steps for synchronisation pipeline scenarios.

use super::world::SyncWorld;
use crate::test_helpers::definition;
use autotask::definition::domain::TeamId;
use autotask::schedule::domain::{DayOfWeek, RecurrenceRule};
use autotask::sync::domain::FailurePolicy;
use std::num::NonZeroUsize;
use chrono::{DateTime, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the current time is "{timestamp}""#)]
fn current_time(world: &mut SyncWorld, timestamp: String) -> Result<(), eyre::Report> {
    let now: DateTime<Utc> = timestamp.parse().wrap_err("parse current time")?;
    world.clock.set(now);
    Ok(())
}

#[given(r#"a daily definition "{name}" for team "{team}""#)]
fn daily_definition(world: &mut SyncWorld, name: String, team: String) {
    world
        .definitions
        .push(definition(&team, &name, RecurrenceRule::Daily));
}

#[given(r#"a weekly definition "{name}" on "{day}" for team "{team}""#)]
fn weekly_definition(
    world: &mut SyncWorld,
    name: String,
    day: String,
    team: String,
) -> Result<(), eyre::Report> {
    let weekday = DayOfWeek::try_from(day.as_str()).wrap_err("parse weekday")?;
    world.definitions.push(definition(
        &team,
        &name,
        RecurrenceRule::Weekly { day: weekday },
    ));
    Ok(())
}

#[given(r#"an issue "{title}" was created for team "{team}" at "{timestamp}""#)]
fn existing_issue(
    world: &mut SyncWorld,
    title: String,
    team: String,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let created_at: DateTime<Utc> = timestamp.parse().wrap_err("parse issue timestamp")?;
    let team_id = TeamId::new(team).wrap_err("validate team id")?;
    world
        .tracker
        .seed_issue(team_id, title, created_at)
        .wrap_err("seed existing issue")?;
    Ok(())
}

#[given(r#"lookups fail for "{name}""#)]
fn lookups_fail(world: &mut SyncWorld, name: String) -> Result<(), eyre::Report> {
    world
        .tracker
        .fail_lookups_for(&name)
        .wrap_err("inject lookup failure")
}

#[given(r#"creations fail for "{name}""#)]
fn creations_fail(world: &mut SyncWorld, name: String) -> Result<(), eyre::Report> {
    world
        .tracker
        .fail_creations_for(&name)
        .wrap_err("inject creation failure")
}

#[given("the run aborts on the first failure")]
fn abort_on_first_failure(world: &mut SyncWorld) {
    world.options = world
        .options
        .with_failure_policy(FailurePolicy::AbortOnFirstError);
}

#[given("up to {limit:usize} definitions run at once")]
fn concurrency_limit(world: &mut SyncWorld, limit: usize) -> Result<(), eyre::Report> {
    let concurrency =
        NonZeroUsize::new(limit).ok_or_else(|| eyre::eyre!("limit must be positive"))?;
    world.options = world.options.with_concurrency(concurrency);
    Ok(())
}

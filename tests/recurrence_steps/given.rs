//! Given steps for recurrence evaluation scenarios.

use super::world::RecurrenceWorld;
use autotask::config::parse_utc_offset;
use autotask::schedule::domain::{
    DayOfMonth, DayOfWeek, Occurrence, RecurrenceEvaluator, RecurrenceRule,
};
use chrono::{DateTime, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a daily rule")]
fn daily_rule(world: &mut RecurrenceWorld) {
    world.rule = Some(RecurrenceRule::Daily);
}

#[given(r#"a weekly rule on "{day}""#)]
fn weekly_rule(world: &mut RecurrenceWorld, day: String) -> Result<(), eyre::Report> {
    let parsed = DayOfWeek::try_from(day.as_str()).wrap_err("parse weekday")?;
    world.rule = Some(RecurrenceRule::Weekly { day: parsed });
    Ok(())
}

#[given("a monthly rule on day {day:u32}")]
fn monthly_rule(world: &mut RecurrenceWorld, day: u32) -> Result<(), eyre::Report> {
    let parsed = DayOfMonth::new(day).wrap_err("validate day of month")?;
    world.rule = Some(RecurrenceRule::Monthly { day: parsed });
    Ok(())
}

#[given("an unsupported rule")]
fn unsupported_rule(world: &mut RecurrenceWorld) {
    world.rule = Some(RecurrenceRule::Unsupported);
}

#[given("no previous occurrence")]
fn no_previous_occurrence(world: &mut RecurrenceWorld) {
    world.previous = None;
}

#[given(r#"a previous occurrence created at "{timestamp}""#)]
fn previous_occurrence(world: &mut RecurrenceWorld, timestamp: String) -> Result<(), eyre::Report> {
    let created_at: DateTime<Utc> = timestamp.parse().wrap_err("parse occurrence timestamp")?;
    world.previous = Some(Occurrence::new(created_at));
    Ok(())
}

#[given(r#"the reference offset is "{offset}""#)]
fn reference_offset(world: &mut RecurrenceWorld, offset: String) -> Result<(), eyre::Report> {
    let zone = parse_utc_offset(&offset).wrap_err("parse reference offset")?;
    world.evaluator = RecurrenceEvaluator::new(zone);
    Ok(())
}

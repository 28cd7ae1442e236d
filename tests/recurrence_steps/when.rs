//! When steps for recurrence evaluation scenarios.

use super::world::RecurrenceWorld;
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the rule is evaluated on "{today}""#)]
fn evaluate_rule(world: &mut RecurrenceWorld, today: String) -> Result<(), eyre::Report> {
    let date = NaiveDate::parse_from_str(&today, "%Y-%m-%d").wrap_err("parse evaluation date")?;
    let rule = world
        .rule
        .ok_or_else(|| eyre::eyre!("missing rule in scenario world"))?;
    world.verdict = Some(world.evaluator.is_due(date, rule, world.previous.as_ref()));
    Ok(())
}

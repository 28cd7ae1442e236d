//! Then steps for recurrence evaluation scenarios.

use super::world::RecurrenceWorld;
use rstest_bdd_macros::then;

fn verdict(world: &RecurrenceWorld) -> Result<bool, eyre::Report> {
    world
        .verdict
        .ok_or_else(|| eyre::eyre!("rule was not evaluated in scenario"))
}

#[then("a new occurrence is due")]
fn occurrence_is_due(world: &RecurrenceWorld) -> Result<(), eyre::Report> {
    if !verdict(world)? {
        return Err(eyre::eyre!("expected the rule to be due"));
    }
    Ok(())
}

#[then("no new occurrence is due")]
fn occurrence_is_not_due(world: &RecurrenceWorld) -> Result<(), eyre::Report> {
    if verdict(world)? {
        return Err(eyre::eyre!("expected the rule not to be due"));
    }
    Ok(())
}

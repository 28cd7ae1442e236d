//! Then steps for synchronisation pipeline scenarios.

use super::world::SyncWorld;
use autotask::sync::domain::{SyncFailure, SyncOutcome};
use eyre::WrapErr;
use rstest_bdd_macros::then;

const fn label(outcome: &SyncOutcome) -> &'static str {
    match outcome {
        SyncOutcome::Created(_) => "created",
        SyncOutcome::SkippedNotDue => "skipped",
        SyncOutcome::Failed(SyncFailure::Lookup(_)) => "lookup-failed",
        SyncOutcome::Failed(SyncFailure::Creation(_)) => "creation-failed",
    }
}

#[then(r#"the outcomes are "{outcomes}""#)]
fn outcomes_are(world: &SyncWorld, outcomes: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = outcomes.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world.report()?.outcomes().map(label).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected outcomes {expected:?}, got {actual:?}"));
    }
    Ok(())
}

#[then("the tracker holds {count:usize} created issues")]
fn created_issue_count(world: &SyncWorld, count: usize) -> Result<(), eyre::Report> {
    let created = world
        .tracker
        .created_drafts()
        .wrap_err("read created drafts")?
        .len();
    if created != count {
        return Err(eyre::eyre!("expected {count} created issues, found {created}"));
    }
    Ok(())
}

#[then("{count:usize} definitions were not attempted")]
fn not_attempted_count(world: &SyncWorld, count: usize) -> Result<(), eyre::Report> {
    let not_attempted = world.report()?.not_attempted();
    if not_attempted != count {
        return Err(eyre::eyre!(
            "expected {count} definitions not attempted, found {not_attempted}"
        ));
    }
    Ok(())
}

#[then("the run is reported as failed")]
fn run_failed(world: &SyncWorld) -> Result<(), eyre::Report> {
    if world.report()?.ensure_success().is_ok() {
        return Err(eyre::eyre!("expected the run to be reported as failed"));
    }
    Ok(())
}

#[then("the run is reported as successful")]
fn run_succeeded(world: &SyncWorld) -> Result<(), eyre::Report> {
    world
        .report()?
        .ensure_success()
        .wrap_err("expected the run to succeed")
}

//! When steps for synchronisation pipeline scenarios.

use super::world::{SyncWorld, run_async};
use rstest_bdd_macros::when;

fn run_sync(world: &mut SyncWorld) {
    let report = run_async(world.service().run(&world.definitions));
    world.last_report = Some(report);
}

#[when("the sync runs")]
fn sync_runs(world: &mut SyncWorld) {
    run_sync(world);
}

#[when("the sync runs again")]
fn sync_runs_again(world: &mut SyncWorld) {
    run_sync(world);
}

//! Behaviour tests for the task store lifecycle.

mod store_lifecycle_steps;

use rstest_bdd_macros::scenario;
use store_lifecycle_steps::world::{world, StoreWorld};

#[scenario(
    path = "tests/features/store_lifecycle.feature",
    name = "Add tasks and complete one"
)]
fn add_and_complete(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store_lifecycle.feature",
    name = "Reject a blank title"
)]
fn reject_blank_title(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store_lifecycle.feature",
    name = "Clearing the store restarts identifier allocation"
)]
fn clear_restarts_identifiers(world: StoreWorld) {
    let _ = world;
}

//! When steps for task store lifecycle BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::when;

#[when(r#"a task "{title}" with description "{description}" is added"#)]
fn add_task(world: &mut StoreWorld, title: String, description: String) {
    world.last_add = Some(world.store.add(&title, &description));
}

#[when("task {id:u64} is completed")]
fn complete_task(world: &mut StoreWorld, id: u64) -> Result<(), eyre::Report> {
    let found = world
        .store
        .complete(eisenhower::task::domain::TaskId::new(id))
        .map_err(|err| eyre::eyre!("completing task {id} failed: {err}"))?;
    eyre::ensure!(found, "no task with identifier {id}");
    Ok(())
}

#[when("the store is cleared")]
fn clear_store(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    world
        .store
        .clear_all()
        .map_err(|err| eyre::eyre!("clearing the store failed: {err}"))
}

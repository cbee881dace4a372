//! Given steps for task store lifecycle BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &StoreWorld) -> Result<(), eyre::Report> {
    let counts = world
        .store
        .counts()
        .map_err(|err| eyre::eyre!("counts failed on a fresh store: {err}"))?;
    eyre::ensure!(counts.total == 0, "expected a fresh store with no records");
    Ok(())
}

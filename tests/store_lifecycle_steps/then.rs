//! Then steps for task store lifecycle BDD scenarios.

use super::world::StoreWorld;
use eisenhower::task::services::StoreError;
use rstest_bdd_macros::then;

#[then("the counts report {total:usize} total, {completed:usize} completed, {pending:usize} pending")]
fn counts_report(
    world: &StoreWorld,
    total: usize,
    completed: usize,
    pending: usize,
) -> Result<(), eyre::Report> {
    let counts = world
        .store
        .counts()
        .map_err(|err| eyre::eyre!("counts failed: {err}"))?;
    eyre::ensure!(
        counts.total == total && counts.completed == completed && counts.pending == pending,
        "expected counts ({total}, {completed}, {pending}), found ({}, {}, {})",
        counts.total,
        counts.completed,
        counts.pending
    );
    Ok(())
}

#[then(r#"the completed listing contains only "{title}""#)]
fn completed_listing_contains_only(world: &StoreWorld, title: String) -> Result<(), eyre::Report> {
    let completed = world
        .store
        .list_completed()
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    eyre::ensure!(
        completed.len() == 1,
        "expected exactly one completed record, found {}",
        completed.len()
    );
    let only = completed
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one completed record"))?;
    eyre::ensure!(
        only.title().as_str() == title,
        "expected completed record '{title}', found '{}'",
        only.title()
    );
    Ok(())
}

#[then("the addition fails validation")]
fn addition_fails_validation(world: &StoreWorld) -> Result<(), eyre::Report> {
    let last = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    eyre::ensure!(
        matches!(last, Err(StoreError::Validation(_))),
        "expected a validation rejection, got {last:?}"
    );
    Ok(())
}

#[then("the newest task has identifier {id:u64}")]
fn newest_task_has_identifier(world: &StoreWorld, id: u64) -> Result<(), eyre::Report> {
    let last = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    let record = last
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected add failure: {err}"))?;
    eyre::ensure!(
        record.id().value() == id,
        "expected identifier {id}, found {}",
        record.id()
    );
    Ok(())
}

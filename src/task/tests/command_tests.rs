//! Reified command and invoker tests.

use std::sync::Arc;

use crate::task::domain::{TaskId, TaskStatus};
use crate::task::services::{
    AddTaskCommand, CommandInvoker, DeleteTaskCommand, TaskStore, ToggleStatusCommand,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = TaskStore<DefaultClock>;

#[fixture]
fn store() -> TestStore {
    TaskStore::new(Arc::new(DefaultClock))
}

#[rstest]
fn add_command_mutates_the_store_and_is_logged(store: TestStore) {
    let mut invoker = CommandInvoker::new();
    invoker
        .execute(Box::new(AddTaskCommand::new(
            store.clone(),
            "Buy milk",
            "From store",
        )))
        .expect("command should succeed");

    let counts = store.counts().expect("counts should succeed");
    assert_eq!(counts.total, 1);
    assert_eq!(invoker.executed_count(), 1);
}

#[rstest]
fn delete_command_removes_the_record(store: TestStore) {
    let record = store.add("Buy milk", "").expect("add should succeed");
    let mut invoker = CommandInvoker::new();
    invoker
        .execute(Box::new(DeleteTaskCommand::new(store.clone(), record.id())))
        .expect("command should succeed");

    let counts = store.counts().expect("counts should succeed");
    assert_eq!(counts.total, 0);
}

#[rstest]
fn toggle_command_flips_both_ways(store: TestStore) {
    let record = store.add("Buy milk", "").expect("add should succeed");
    let mut invoker = CommandInvoker::new();

    invoker
        .execute(Box::new(ToggleStatusCommand::new(store.clone(), record.id())))
        .expect("first toggle should succeed");
    let toggled = store
        .find_by_id(record.id())
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(toggled.status(), TaskStatus::Completed);

    invoker
        .execute(Box::new(ToggleStatusCommand::new(store.clone(), record.id())))
        .expect("second toggle should succeed");
    let reverted = store
        .find_by_id(record.id())
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(reverted.status(), TaskStatus::Pending);
}

#[rstest]
fn toggle_on_a_missing_record_is_a_silent_noop(store: TestStore) {
    let mut invoker = CommandInvoker::new();
    invoker
        .execute(Box::new(ToggleStatusCommand::new(store, TaskId::new(999))))
        .expect("toggle of a missing record should not fail");

    assert_eq!(invoker.executed_count(), 1);
}

#[rstest]
fn a_failed_command_is_not_logged(store: TestStore) {
    let mut invoker = CommandInvoker::new();
    let result = invoker.execute(Box::new(AddTaskCommand::new(store.clone(), "   ", "")));

    assert!(result.is_err());
    assert!(invoker.is_empty());
    let counts = store.counts().expect("counts should succeed");
    assert_eq!(counts.total, 0);
}

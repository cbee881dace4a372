//! Shared world state for task store lifecycle BDD scenarios.

use std::sync::Arc;

use eisenhower::task::domain::TaskRecord;
use eisenhower::task::services::{StoreError, TaskStore};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<DefaultClock>;

/// Scenario world for task store behaviour tests.
pub struct StoreWorld {
    pub store: TestTaskStore,
    pub last_add: Option<Result<TaskRecord, StoreError>>,
}

impl StoreWorld {
    /// Creates a world around a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(Arc::new(DefaultClock)),
            last_add: None,
        }
    }
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoreWorld {
    StoreWorld::default()
}

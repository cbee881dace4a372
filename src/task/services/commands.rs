//! Reified store mutations and their synchronous invoker.

use mockable::Clock;

use super::{StoreResult, TaskStore};
use crate::task::domain::{TaskId, TaskStatus};

/// A queueable unit of work bound to one store mutation.
///
/// Commands close over the target store handle and their arguments; results
/// are observed only through the store's own queries or listener
/// notifications, never through the command itself.
pub trait StoreCommand {
    /// Performs the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] when the underlying store operation
    /// fails.
    fn execute(&self) -> StoreResult<()>;
}

/// Adds a new record with the captured title and description.
pub struct AddTaskCommand<C> {
    store: TaskStore<C>,
    title: String,
    description: String,
}

impl<C> AddTaskCommand<C> {
    /// Creates an add command bound to `store`.
    #[must_use]
    pub fn new(
        store: TaskStore<C>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            store,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl<C: Clock> StoreCommand for AddTaskCommand<C> {
    fn execute(&self) -> StoreResult<()> {
        self.store.add(&self.title, &self.description)?;
        Ok(())
    }
}

/// Deletes the record with the captured identifier.
pub struct DeleteTaskCommand<C> {
    store: TaskStore<C>,
    id: TaskId,
}

impl<C> DeleteTaskCommand<C> {
    /// Creates a delete command bound to `store`.
    #[must_use]
    pub const fn new(store: TaskStore<C>, id: TaskId) -> Self {
        Self { store, id }
    }
}

impl<C: Clock> StoreCommand for DeleteTaskCommand<C> {
    fn execute(&self) -> StoreResult<()> {
        self.store.delete(self.id)?;
        Ok(())
    }
}

/// Flips the completion state of the record with the captured identifier.
///
/// The current status is read through the store at execution time; a record
/// that has since been deleted makes the command a silent no-op.
pub struct ToggleStatusCommand<C> {
    store: TaskStore<C>,
    id: TaskId,
}

impl<C> ToggleStatusCommand<C> {
    /// Creates a toggle command bound to `store`.
    #[must_use]
    pub const fn new(store: TaskStore<C>, id: TaskId) -> Self {
        Self { store, id }
    }
}

impl<C: Clock> StoreCommand for ToggleStatusCommand<C> {
    fn execute(&self) -> StoreResult<()> {
        let Some(record) = self.store.find_by_id(self.id)? else {
            return Ok(());
        };
        if record.status() == TaskStatus::Completed {
            self.store.uncomplete(self.id)?;
        } else {
            self.store.complete(self.id)?;
        }
        Ok(())
    }
}

/// Runs commands synchronously and keeps an append-only log of the ones that
/// executed successfully.
///
/// The log exists for audit; replay is not implemented.
#[derive(Default)]
pub struct CommandInvoker {
    log: Vec<Box<dyn StoreCommand>>,
}

impl CommandInvoker {
    /// Creates an invoker with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `command` immediately, then appends it to the log.
    ///
    /// A command that fails is not logged.
    ///
    /// # Errors
    ///
    /// Propagates the [`super::StoreError`] raised by the command.
    pub fn execute(&mut self, command: Box<dyn StoreCommand>) -> StoreResult<()> {
        command.execute()?;
        self.log.push(command);
        Ok(())
    }

    /// Returns how many commands have executed successfully.
    #[must_use]
    pub fn executed_count(&self) -> usize {
        self.log.len()
    }

    /// Reports whether no command has executed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

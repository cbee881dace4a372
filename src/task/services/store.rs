//! The in-memory task store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use thiserror::Error;

use crate::task::domain::{
    ListenerId, TaskDescription, TaskDomainError, TaskId, TaskPriority, TaskRecord, TaskSnapshot,
    TaskStatus, TaskTitle,
};
use crate::task::ports::{ChangeListener, MatchPredicate, TitleMatch};

/// First identifier handed out by a fresh or cleared store.
const FIRST_ID: u64 = 1;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store operations.
///
/// "No such id" is reported through `bool` / `Option` results rather than an
/// error: a missing record is an expected, recoverable condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Domain validation rejected the input; the store is unchanged.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// A state lock was poisoned by a panicking caller.
    #[error("store lock poisoned: {0}")]
    Lock(String),
}

/// Aggregate record counts reported by [`TaskStore::counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    /// Number of top-level records.
    pub total: usize,
    /// Number of top-level records with completed status.
    pub completed: usize,
    /// Remaining top-level records (`total - completed`).
    pub pending: usize,
}

#[derive(Debug)]
struct StoreState {
    records: Vec<TaskRecord>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

struct RegisteredListener {
    id: ListenerId,
    listener: Arc<dyn ChangeListener>,
}

/// The ordered collection of task records shared by every consumer.
///
/// The store assigns identifiers, executes all mutations, fans out change
/// notifications, and answers queries with owned copies. Handles are
/// cheap to clone and share one underlying state; mutating operations
/// serialise on an internal lock, and notification fan-out runs with no lock
/// held so listeners may safely call back into the store.
pub struct TaskStore<C> {
    state: Arc<RwLock<StoreState>>,
    listeners: Arc<RwLock<Vec<RegisteredListener>>>,
    clock: Arc<C>,
}

impl<C> Clone for TaskStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store. The first assigned identifier is 1.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            listeners: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Adds a new top-level record with pending status and medium priority.
    ///
    /// Assigns the next sequential identifier and notifies listeners with an
    /// "Added" message on success. Returns a copy of the created record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title is blank or either
    /// field exceeds its length limit; the store is left unmodified.
    pub fn add(&self, title: &str, description: &str) -> StoreResult<TaskRecord> {
        let record_title = TaskTitle::new(title)?;
        let record_description = TaskDescription::new(description)?;
        let created = {
            let mut state = self.write_state()?;
            let id = TaskId::new(state.next_id);
            state.next_id += 1;
            let record = TaskRecord::new(id, record_title, record_description, &*self.clock);
            state.records.push(record.clone());
            record
        };
        self.notify(&format!("Added: {}", created.title()))?;
        Ok(created)
    }

    /// Adds a subtask beneath the record with `parent_id`.
    ///
    /// The parent is located anywhere in the hierarchy. The subtask consumes
    /// a fresh store identifier and is owned exclusively by its parent.
    /// Returns `Ok(None)` when the parent does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the title or description is
    /// rejected; no identifier is consumed in that case.
    pub fn add_subtask(
        &self,
        parent_id: TaskId,
        title: &str,
        description: &str,
    ) -> StoreResult<Option<TaskRecord>> {
        let subtask_title = TaskTitle::new(title)?;
        let subtask_description = TaskDescription::new(description)?;
        let created = {
            let mut state = self.write_state()?;
            let StoreState { records, next_id } = &mut *state;
            let Some(parent) = find_record_mut(records, parent_id) else {
                return Ok(None);
            };
            let id = TaskId::new(*next_id);
            *next_id += 1;
            let record = TaskRecord::new(id, subtask_title, subtask_description, &*self.clock);
            parent.push_subtask(record.clone(), &*self.clock);
            record
        };
        self.notify(&format!(
            "Added subtask: {} under ID: {parent_id}",
            created.title()
        ))?;
        Ok(Some(created))
    }

    /// Removes the top-level record with `id`, discarding its owned subtree.
    ///
    /// Returns whether a record was removed; notifies listeners only on
    /// success. Deletion is permanent; only snapshots taken beforehand can
    /// recover the state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn delete(&self, id: TaskId) -> StoreResult<bool> {
        let removed = {
            let mut state = self.write_state()?;
            let before = state.records.len();
            state.records.retain(|record| record.id() != id);
            state.records.len() < before
        };
        if removed {
            self.notify(&format!("Deleted ID: {id}"))?;
        }
        Ok(removed)
    }

    /// Sets the status of the record with `id`, anywhere in the hierarchy.
    ///
    /// Returns whether the record was found; notifies listeners on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<bool> {
        {
            let mut state = self.write_state()?;
            let Some(record) = find_record_mut(&mut state.records, id) else {
                return Ok(false);
            };
            record.set_status(status, &*self.clock);
        }
        self.notify(&format!("Status ID: {id}: {status}"))?;
        Ok(true)
    }

    /// Marks the record with `id` as completed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn complete(&self, id: TaskId) -> StoreResult<bool> {
        self.set_status(id, TaskStatus::Completed)
    }

    /// Marks the record with `id` as pending again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn uncomplete(&self, id: TaskId) -> StoreResult<bool> {
        self.set_status(id, TaskStatus::Pending)
    }

    /// Replaces the description of the record with `id`.
    ///
    /// Returns whether the record was found; notifies listeners on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the description exceeds its
    /// length limit; the store is left unmodified.
    pub fn set_description(&self, id: TaskId, description: &str) -> StoreResult<bool> {
        let record_description = TaskDescription::new(description)?;
        {
            let mut state = self.write_state()?;
            let Some(record) = find_record_mut(&mut state.records, id) else {
                return Ok(false);
            };
            record.set_description(record_description, &*self.clock);
        }
        self.notify(&format!("Updated ID: {id}"))?;
        Ok(true)
    }

    /// Replaces the priority of the record with `id`.
    ///
    /// Returns whether the record was found; notifies listeners on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn set_priority(&self, id: TaskId, priority: TaskPriority) -> StoreResult<bool> {
        {
            let mut state = self.write_state()?;
            let Some(record) = find_record_mut(&mut state.records, id) else {
                return Ok(false);
            };
            record.set_priority(priority, &*self.clock);
        }
        self.notify(&format!("Priority ID: {id}: {priority}"))?;
        Ok(true)
    }

    /// Applies a snapshot back onto the record it was captured from.
    ///
    /// The target record is matched by the snapshot's identifier. Returns
    /// whether the record was found; notifies listeners on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn restore(&self, snapshot: &TaskSnapshot) -> StoreResult<bool> {
        let id = snapshot.id();
        {
            let mut state = self.write_state()?;
            let Some(record) = find_record_mut(&mut state.records, id) else {
                return Ok(false);
            };
            record.apply_snapshot(snapshot, &*self.clock);
        }
        self.notify(&format!("Restored ID: {id}"))?;
        Ok(true)
    }

    /// Finds a record by identifier, anywhere in the hierarchy.
    ///
    /// Returns a value copy; all mutation goes through the store's own
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn find_by_id(&self, id: TaskId) -> StoreResult<Option<TaskRecord>> {
        let state = self.read_state()?;
        Ok(find_record(&state.records, id).cloned())
    }

    /// Returns an owned copy of all top-level records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn list_all(&self) -> StoreResult<Vec<TaskRecord>> {
        let state = self.read_state()?;
        Ok(state.records.clone())
    }

    /// Returns the completed top-level records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn list_completed(&self) -> StoreResult<Vec<TaskRecord>> {
        self.filtered(|record| record.status() == TaskStatus::Completed)
    }

    /// Returns the top-level records that are not completed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn list_pending(&self) -> StoreResult<Vec<TaskRecord>> {
        self.filtered(|record| record.status() != TaskStatus::Completed)
    }

    /// Returns the top-level records with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn list_by_priority(&self, priority: TaskPriority) -> StoreResult<Vec<TaskRecord>> {
        self.filtered(move |record| record.priority() == priority)
    }

    /// Returns the records matching `query` under the supplied predicate,
    /// preserving insertion order.
    ///
    /// A blank query behaves as [`TaskStore::list_all`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn search(
        &self,
        query: &str,
        predicate: &dyn MatchPredicate,
    ) -> StoreResult<Vec<TaskRecord>> {
        if query.trim().is_empty() {
            return self.list_all();
        }
        self.filtered(|record| predicate.matches(record, query))
    }

    /// Searches with the default title predicate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn search_titles(&self, query: &str) -> StoreResult<Vec<TaskRecord>> {
        self.search(query, &TitleMatch)
    }

    /// Returns total, completed, and pending counts over top-level records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn counts(&self) -> StoreResult<StoreCounts> {
        let state = self.read_state()?;
        let total = state.records.len();
        let completed = state
            .records
            .iter()
            .filter(|record| record.status() == TaskStatus::Completed)
            .count();
        Ok(StoreCounts {
            total,
            completed,
            pending: total - completed,
        })
    }

    /// Empties the store and resets identifier allocation to 1.
    ///
    /// This is the only operation that resets the identifier counter.
    /// Notifies listeners with a "Cleared" message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn clear_all(&self) -> StoreResult<()> {
        {
            let mut state = self.write_state()?;
            state.records.clear();
            state.next_id = FIRST_ID;
        }
        self.notify("Cleared all")
    }

    /// Registers a listener for change notifications, returning its
    /// registration token.
    ///
    /// Listeners are notified in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the listener lock is poisoned.
    pub fn register_listener(&self, listener: Arc<dyn ChangeListener>) -> StoreResult<ListenerId> {
        let id = ListenerId::new();
        self.write_listeners()?.push(RegisteredListener { id, listener });
        Ok(id)
    }

    /// Removes a previously registered listener.
    ///
    /// Removing an unknown token is a silent no-op; the result reports
    /// whether a listener was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the listener lock is poisoned.
    pub fn remove_listener(&self, id: ListenerId) -> StoreResult<bool> {
        let mut listeners = self.write_listeners()?;
        let before = listeners.len();
        listeners.retain(|registered| registered.id != id);
        Ok(listeners.len() < before)
    }

    /// Iterates over a point-in-time copy of the top-level records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Lock`] when the store lock is poisoned.
    pub fn iter(&self) -> StoreResult<std::vec::IntoIter<TaskRecord>> {
        Ok(self.list_all()?.into_iter())
    }

    fn filtered(&self, keep: impl Fn(&TaskRecord) -> bool) -> StoreResult<Vec<TaskRecord>> {
        let state = self.read_state()?;
        Ok(state
            .records
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect())
    }

    /// Delivers one message to every registered listener, in order.
    ///
    /// Runs with no lock held so listeners may call back into the store. A
    /// failing listener is reported and skipped; later listeners still run.
    fn notify(&self, message: &str) -> StoreResult<()> {
        let registered: Vec<Arc<dyn ChangeListener>> = self
            .read_listeners()?
            .iter()
            .map(|entry| Arc::clone(&entry.listener))
            .collect();
        for listener in registered {
            if let Err(err) = listener.on_change(message) {
                tracing::warn!(target: "eisenhower::store", %err, "change listener failed");
            }
        }
        Ok(())
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|err| StoreError::Lock(err.to_string()))
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|err| StoreError::Lock(err.to_string()))
    }

    fn read_listeners(&self) -> StoreResult<RwLockReadGuard<'_, Vec<RegisteredListener>>> {
        self.listeners
            .read()
            .map_err(|err| StoreError::Lock(err.to_string()))
    }

    fn write_listeners(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<RegisteredListener>>> {
        self.listeners
            .write()
            .map_err(|err| StoreError::Lock(err.to_string()))
    }
}

/// Depth-first lookup across the record hierarchy.
fn find_record(records: &[TaskRecord], id: TaskId) -> Option<&TaskRecord> {
    for record in records {
        if record.id() == id {
            return Some(record);
        }
        if let Some(found) = find_record(record.subtasks(), id) {
            return Some(found);
        }
    }
    None
}

/// Mutable depth-first lookup across the record hierarchy.
fn find_record_mut(records: &mut [TaskRecord], id: TaskId) -> Option<&mut TaskRecord> {
    for record in records {
        if record.id() == id {
            return Some(record);
        }
        if let Some(found) = find_record_mut(record.subtasks_mut(), id) {
            return Some(found);
        }
    }
    None
}

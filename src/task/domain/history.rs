//! Undo/redo history over one record's snapshots.

use super::TaskSnapshot;

/// Per-record undo/redo stacks.
///
/// The undo stack always retains its oldest entry as the baseline, the
/// state below which nothing can be undone. Saving a new state invalidates
/// any parked redo path, matching conventional editor semantics.
#[derive(Debug, Clone)]
pub struct TaskHistory {
    undo_stack: Vec<TaskSnapshot>,
    redo_stack: Vec<TaskSnapshot>,
}

impl TaskHistory {
    /// Creates a history seeded with a baseline snapshot.
    #[must_use]
    pub fn new(baseline: TaskSnapshot) -> Self {
        Self {
            undo_stack: vec![baseline],
            redo_stack: Vec::new(),
        }
    }

    /// Records a new confirmed state and discards any parked redo states.
    pub fn save(&mut self, snapshot: TaskSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Steps back one state, returning the snapshot to restore.
    ///
    /// Returns `None` when only the baseline remains and undo is exhausted.
    pub fn undo(&mut self) -> Option<TaskSnapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let reverted = self.undo_stack.pop()?;
        self.redo_stack.push(reverted);
        self.undo_stack.last().cloned()
    }

    /// Steps forward one previously undone state, returning it.
    ///
    /// Returns `None` when no states are parked for redo.
    pub fn redo(&mut self) -> Option<TaskSnapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(restored.clone());
        Some(restored)
    }

    /// Reports whether a state older than the baseline top is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Reports whether any undone state is parked for redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Empties both stacks. Callers must seed a new baseline via
    /// [`TaskHistory::new`] before further use.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

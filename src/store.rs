//! In-memory task store with change notification.
//!
//! The store is the single authoritative collection of [`Task`]s. It is
//! constructed explicitly and owned by the caller (there is no global
//! instance), with initial data supplied wholesale by an external loader.
//! The store never creates tasks on its own.
//!
//! Every mutation that changes the collection pushes the full updated
//! collection to all subscribers before the mutating call returns. There is
//! no replay of past states: a subscriber only sees changes made after it
//! subscribed. The store expects a single logical owner and does no internal
//! locking; callers that share it across threads must guard it themselves.

use tokio::sync::broadcast;
use tracing::debug;

use crate::types::{Task, TaskId, TaskStatus};

/// Buffered change notifications per subscriber. A slow subscriber that falls
/// further behind than this sees a `Lagged` error from its receiver, not a
/// blocked store.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Single authoritative in-memory collection of tasks.
pub struct TaskStore {
    tasks: Vec<Task>,
    changes: broadcast::Sender<Vec<Task>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Create a store seeded with the given tasks. This is the only way tasks
    /// enter the store; seeding does not notify (there are no subscribers yet
    /// that could have observed a prior state).
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { tasks, changes }
    }

    /// Snapshot of the current collection. The returned vector does not
    /// update in place as the store changes.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Point lookup by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the status of the task with the given id, leaving every other
    /// field untouched, and notify subscribers with the updated collection.
    ///
    /// A missing id is an expected case (stale UI state can reference a
    /// deleted task): the call is a no-op, sends no notification, and returns
    /// `false`. Call sites that want the original silent behavior simply
    /// ignore the return value.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(task_id = %id, "set_status on unknown task id, ignoring");
            return false;
        };
        task.status = status;
        debug!(task_id = %id, status = status.as_str(), "task status updated");
        self.notify();
        true
    }

    /// Remove the task with the given id. Returns whether a task was removed;
    /// notifies subscribers only when one was. Deletion is permanent: a
    /// subsequent `get` with the same id returns `None`.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(task_id = %id, "delete on unknown task id, ignoring");
            return false;
        }
        debug!(task_id = %id, "task deleted");
        self.notify();
        true
    }

    /// Number of tasks with the given status.
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Register a subscriber. Each mutation delivers the full updated
    /// collection to every receiver, in emission order, exactly once per
    /// receiver. No historical replay.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Task>> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        // Send fails only when there are no subscribers, which is fine.
        let _ = self.changes.send(self.tasks.clone());
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

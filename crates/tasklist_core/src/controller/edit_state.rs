//! Transient UI state owned by the controller.
//!
//! # Invariants
//! - At most one `EditSession` exists at a time.
//! - `EditSession::task_id` names a task without owning it; the controller
//!   clears the session when that task is deleted.
//! - `draft` is raw input and is only normalized on commit.

use crate::model::task::{Task, TaskId};

/// The task currently in edit mode plus its unsaved input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: String,
}

impl EditSession {
    /// Starts a session seeded with the stored text.
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft: task.text.clone(),
        }
    }

    pub fn is_for(&self, id: TaskId) -> bool {
        self.task_id == id
    }
}

/// New-task input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub value: String,
    /// Cleared when a row enters edit mode; only `reset` restores it.
    pub focused: bool,
}

impl ComposerState {
    /// Empty composer with input focus, matching the initial screen.
    pub fn focused() -> Self {
        Self {
            value: String::new(),
            focused: true,
        }
    }

    /// Clears the value and returns focus after a successful add.
    pub fn reset(&mut self) {
        self.value.clear();
        self.focused = true;
    }
}

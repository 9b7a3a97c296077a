//! Controller-level commands produced by hosts or by event mapping.

use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};

/// One user intent, dispatched through `TaskListController::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    AddTask { text: String },
    EditTask { id: TaskId, text: String },
    DeleteTask { id: TaskId },
    BeginEdit { id: TaskId },
    UpdateDraft { id: TaskId, text: String },
    /// Commit with an explicit candidate text.
    CommitEdit { id: TaskId, text: String },
    /// Commit whatever the draft currently holds (blur, Enter, Save click).
    CommitCurrent { id: TaskId },
    CancelEdit { id: TaskId },
    /// The per-row Edit/Save button.
    ToggleEdit { id: TaskId },
    SetComposerText { text: String },
    SubmitComposer,
}

impl Intent {
    /// Stable name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::EditTask { .. } => "edit_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::BeginEdit { .. } => "begin_edit",
            Self::UpdateDraft { .. } => "update_draft",
            Self::CommitEdit { .. } => "commit_edit",
            Self::CommitCurrent { .. } => "commit_current",
            Self::CancelEdit { .. } => "cancel_edit",
            Self::ToggleEdit { .. } => "toggle_edit",
            Self::SetComposerText { .. } => "set_composer_text",
            Self::SubmitComposer => "submit_composer",
        }
    }

    /// Task targeted by this intent, if any.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::EditTask { id, .. }
            | Self::DeleteTask { id }
            | Self::BeginEdit { id }
            | Self::UpdateDraft { id, .. }
            | Self::CommitEdit { id, .. }
            | Self::CommitCurrent { id }
            | Self::CancelEdit { id }
            | Self::ToggleEdit { id } => Some(*id),
            Self::AddTask { .. } | Self::SetComposerText { .. } | Self::SubmitComposer => None,
        }
    }
}

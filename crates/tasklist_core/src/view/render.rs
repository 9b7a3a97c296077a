//! Pure projection of controller state into a view description.
//!
//! # Responsibility
//! - Describe every control a host must show, in list order.
//! - Stay free of host types so the projection is testable without a UI.
//!
//! # Invariants
//! - Same inputs always produce an equal `AppView`.
//! - An empty list renders exactly one placeholder and no items.
//! - A non-empty list renders one item per task, in insertion order.
//! - At most one item is in `RowMode::Editing`.

use crate::controller::edit_state::{ComposerState, EditSession};
use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one above!";
pub const COMPOSER_PLACEHOLDER: &str = "Add a new task...";
pub const ADD_LABEL: &str = "Add";
pub const EDIT_LABEL: &str = "Edit";
pub const SAVE_LABEL: &str = "Save";
pub const DELETE_LABEL: &str = "Delete";

/// Whole-screen view description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppView {
    pub composer: ComposerView,
    pub list: ListView,
}

/// New-task input and its Add action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerView {
    pub value: String,
    pub placeholder: String,
    pub add_label: String,
    pub focused: bool,
}

/// Task list area: either the placeholder or the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
    Empty(PlaceholderView),
    Items { items: Vec<TaskItemView> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderView {
    pub message: String,
}

/// Read-only vs writable state of one row's text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RowMode {
    ReadOnly,
    /// Writable input; hosts focus it and select its whole text.
    Editing { focused: bool, selected: bool },
}

/// One rendered task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItemView {
    pub id: TaskId,
    /// Draft text while editing, stored text otherwise.
    pub text: String,
    pub mode: RowMode,
    pub edit_label: String,
    pub delete_label: String,
}

impl TaskItemView {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    pub fn is_read_only(&self) -> bool {
        !self.is_editing()
    }
}

impl AppView {
    /// Number of task rows; zero when the placeholder is shown.
    pub fn item_count(&self) -> usize {
        match &self.list {
            ListView::Empty(_) => 0,
            ListView::Items { items } => items.len(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.list, ListView::Empty(_))
    }

    pub fn items(&self) -> &[TaskItemView] {
        match &self.list {
            ListView::Empty(_) => &[],
            ListView::Items { items } => items.as_slice(),
        }
    }

    pub fn item(&self, id: TaskId) -> Option<&TaskItemView> {
        self.items().iter().find(|item| item.id == id)
    }

    pub fn editing_item(&self) -> Option<&TaskItemView> {
        self.items().iter().find(|item| item.is_editing())
    }
}

/// Projects tasks, edit state and composer into a view description.
pub fn render(tasks: &[Task], editing: Option<&EditSession>, composer: &ComposerState) -> AppView {
    let composer = ComposerView {
        value: composer.value.clone(),
        placeholder: COMPOSER_PLACEHOLDER.to_string(),
        add_label: ADD_LABEL.to_string(),
        // Focus moves to the row being edited.
        focused: composer.focused && editing.is_none(),
    };

    if tasks.is_empty() {
        return AppView {
            composer,
            list: ListView::Empty(PlaceholderView {
                message: EMPTY_LIST_MESSAGE.to_string(),
            }),
        };
    }

    let items = tasks
        .iter()
        .map(|task| render_item(task, editing.filter(|session| session.is_for(task.id))))
        .collect();

    AppView {
        composer,
        list: ListView::Items { items },
    }
}

fn render_item(task: &Task, session: Option<&EditSession>) -> TaskItemView {
    match session {
        Some(session) => TaskItemView {
            id: task.id,
            text: session.draft.clone(),
            mode: RowMode::Editing {
                focused: true,
                selected: session.draft == task.text,
            },
            edit_label: SAVE_LABEL.to_string(),
            delete_label: DELETE_LABEL.to_string(),
        },
        None => TaskItemView {
            id: task.id,
            text: task.text.clone(),
            mode: RowMode::ReadOnly,
            edit_label: EDIT_LABEL.to_string(),
            delete_label: DELETE_LABEL.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{render, RowMode, EDIT_LABEL, EMPTY_LIST_MESSAGE, SAVE_LABEL};
    use crate::controller::edit_state::{ComposerState, EditSession};
    use crate::model::task::{Task, TaskId};

    fn task(id: u64, text: &str) -> Task {
        Task::new(TaskId::from_raw(id), text, 0).unwrap()
    }

    #[test]
    fn empty_list_renders_placeholder_only() {
        let view = render(&[], None, &ComposerState::focused());
        assert!(view.is_placeholder());
        assert_eq!(view.item_count(), 0);
        match view.list {
            super::ListView::Empty(placeholder) => {
                assert_eq!(placeholder.message, EMPTY_LIST_MESSAGE)
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn editing_row_shows_draft_and_save_label() {
        let tasks = vec![task(1, "a"), task(2, "b")];
        let session = EditSession {
            task_id: TaskId::from_raw(2),
            draft: "b changed".to_string(),
        };
        let view = render(&tasks, Some(&session), &ComposerState::focused());

        let first = &view.items()[0];
        assert_eq!(first.mode, RowMode::ReadOnly);
        assert_eq!(first.edit_label, EDIT_LABEL);

        let second = &view.items()[1];
        assert_eq!(second.text, "b changed");
        assert_eq!(second.edit_label, SAVE_LABEL);
        assert!(second.is_editing());
        assert!(!view.composer.focused);
    }

    #[test]
    fn fresh_edit_session_selects_the_whole_text() {
        let tasks = vec![task(1, "a")];
        let session = EditSession::begin(&tasks[0]);
        let view = render(&tasks, Some(&session), &ComposerState::default());
        assert_eq!(
            view.items()[0].mode,
            RowMode::Editing {
                focused: true,
                selected: true
            }
        );
    }

    #[test]
    fn render_is_deterministic() {
        let tasks = vec![task(1, "a"), task(2, "b")];
        let composer = ComposerState::focused();
        assert_eq!(
            render(&tasks, None, &composer),
            render(&tasks, None, &composer)
        );
    }
}

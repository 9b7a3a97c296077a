//! Raw host input and its mapping to controller intents.
//!
//! # Responsibility
//! - Give hosts one vocabulary for clicks, keys, typing and focus loss.
//! - Decide which intent an event means using only the current `AppView`.
//!
//! # Invariants
//! - Mapping never inspects host widgets; row mode comes from the view.
//! - Enter, blur and typing on a read-only row map to nothing.

use crate::controller::intent::Intent;
use crate::model::task::TaskId;
use crate::view::render::AppView;
use serde::{Deserialize, Serialize};

/// Clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    AddButton,
    EditButton(TaskId),
    DeleteButton(TaskId),
}

/// Text inputs that receive keys, typing and focus loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Composer,
    TaskInput(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Confirm key.
    Enter,
    Escape,
    Other,
}

/// One raw input event delivered by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Click { control: Control },
    KeyPress { target: Target, key: Key },
    Input { target: Target, value: String },
    Blur { target: Target },
}

impl UiEvent {
    pub fn click(control: Control) -> Self {
        Self::Click { control }
    }

    pub fn key(target: Target, key: Key) -> Self {
        Self::KeyPress { target, key }
    }

    pub fn input(target: Target, value: impl Into<String>) -> Self {
        Self::Input {
            target,
            value: value.into(),
        }
    }

    pub fn blur(target: Target) -> Self {
        Self::Blur { target }
    }
}

/// Maps one raw event to the intent it stands for in the current view.
///
/// Returns `None` when the event has no effect, e.g. Enter on a read-only
/// row or any event for a task that is no longer rendered.
pub fn intent_for_event(view: &AppView, event: &UiEvent) -> Option<Intent> {
    match event {
        UiEvent::Click { control } => match control {
            Control::AddButton => Some(Intent::SubmitComposer),
            Control::EditButton(id) => view.item(*id).map(|_| Intent::ToggleEdit { id: *id }),
            Control::DeleteButton(id) => view.item(*id).map(|_| Intent::DeleteTask { id: *id }),
        },
        UiEvent::KeyPress { target, key } => match (target, key) {
            (Target::Composer, Key::Enter) => Some(Intent::SubmitComposer),
            (Target::TaskInput(id), Key::Enter) => {
                editing_row(view, *id).map(|id| Intent::CommitCurrent { id })
            }
            (Target::TaskInput(id), Key::Escape) => {
                editing_row(view, *id).map(|id| Intent::CancelEdit { id })
            }
            _ => None,
        },
        UiEvent::Input { target, value } => match target {
            Target::Composer => Some(Intent::SetComposerText {
                text: value.clone(),
            }),
            Target::TaskInput(id) => editing_row(view, *id).map(|id| Intent::UpdateDraft {
                id,
                text: value.clone(),
            }),
        },
        UiEvent::Blur { target } => match target {
            Target::Composer => None,
            Target::TaskInput(id) => editing_row(view, *id).map(|id| Intent::CommitCurrent { id }),
        },
    }
}

fn editing_row(view: &AppView, id: TaskId) -> Option<TaskId> {
    view.item(id)
        .filter(|item| item.is_editing())
        .map(|item| item.id)
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list controller to Dart via FRB as sync calls.
//! - Flatten `AppView` into plain DTOs the UI can draw directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide controller session backs every call.
//! - Malformed id strings are treated as unknown ids (silent no-op).

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppView, ListView, TaskId, TaskListController,
};

static SESSION: OnceLock<Mutex<TaskListController>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as drawn by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowDto {
    /// Stable task id in decimal string form.
    pub id: String,
    /// Draft text when editing, stored text otherwise.
    pub text: String,
    pub editing: bool,
    pub read_only: bool,
    /// `Edit` or `Save`.
    pub edit_label: String,
    pub delete_label: String,
}

/// Full screen snapshot returned by every call.
///
/// Exactly one of `placeholder` and a non-empty `rows` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListViewDto {
    /// Render revision; the UI may skip repaints when unchanged.
    pub revision: u64,
    pub composer_value: String,
    pub composer_focused: bool,
    /// Empty-list message, `None` when rows exist.
    pub placeholder: Option<String>,
    pub rows: Vec<TaskRowDto>,
}

/// Returns the current view without mutating state.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_view() -> TaskListViewDto {
    let session = lock_session();
    to_view_dto(session.view(), session.revision())
}

/// Adds a task from raw text; blank text is ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> TaskListViewDto {
    with_session(|session| {
        session.add_task(text.as_str());
    })
}

/// Edit/Save button for one row.
///
/// `seen_revision` is the revision of the view the button was drawn from.
/// When given, a click arriving after focus loss already saved the row is
/// dropped instead of reopening the editor.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_edit(task_id: String, seen_revision: Option<u64>) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| match seen_revision {
        Some(seen) => {
            session.toggle_edit_seen(id, seen);
        }
        None => session.toggle_edit(id),
    })
}

/// Puts one row into edit mode, cancelling any other edit.
#[flutter_rust_bridge::frb(sync)]
pub fn task_begin_edit(task_id: String) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| session.begin_edit(id))
}

/// Mirrors keystrokes in the editing row.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update_draft(task_id: String, text: String) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| {
        session.update_draft(id, text.as_str())
    })
}

/// Commits the editing row (Save, Enter or focus loss).
///
/// `text = None` commits the current draft.
#[flutter_rust_bridge::frb(sync)]
pub fn task_commit_edit(task_id: String, text: Option<String>) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| match text.as_deref() {
        Some(candidate) => session.commit_edit(id, candidate),
        None => session.commit_current(id),
    })
}

/// Discards the draft of the editing row.
#[flutter_rust_bridge::frb(sync)]
pub fn task_cancel_edit(task_id: String) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| session.cancel_edit(id))
}

/// Deletes one row.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> TaskListViewDto {
    with_task(task_id.as_str(), |session, id| session.delete_task(id))
}

/// Mirrors typing into the new-task input.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_set_text(text: String) -> TaskListViewDto {
    with_session(|session| session.set_composer_text(text.as_str()))
}

/// Add button / Enter in the new-task input.
#[flutter_rust_bridge::frb(sync)]
pub fn composer_submit() -> TaskListViewDto {
    with_session(|session| {
        session.submit_composer();
    })
}

/// Drops every task; intended for screen teardown and tests.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_reset() -> TaskListViewDto {
    with_session(|session| session.clear())
}

fn lock_session() -> MutexGuard<'static, TaskListController> {
    let session = SESSION.get_or_init(|| Mutex::new(TaskListController::new()));
    // Controller operations never leave partial state, so a poisoned lock is safe to reuse.
    session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn with_session(apply: impl FnOnce(&mut TaskListController)) -> TaskListViewDto {
    let mut session = lock_session();
    apply(&mut *session);
    to_view_dto(session.view(), session.revision())
}

fn with_task(
    task_id: &str,
    apply: impl FnOnce(&mut TaskListController, TaskId),
) -> TaskListViewDto {
    with_session(|session| match TaskId::parse(task_id) {
        Some(id) => apply(session, id),
        None => warn!("event=task_id_parse module=ffi status=skipped reason=malformed_id"),
    })
}

fn to_view_dto(view: &AppView, revision: u64) -> TaskListViewDto {
    let (placeholder, rows) = match &view.list {
        ListView::Empty(placeholder) => (Some(placeholder.message.clone()), Vec::new()),
        ListView::Items { items } => (
            None,
            items
                .iter()
                .map(|item| TaskRowDto {
                    id: item.id.to_string(),
                    text: item.text.clone(),
                    editing: item.is_editing(),
                    read_only: item.is_read_only(),
                    edit_label: item.edit_label.clone(),
                    delete_label: item.delete_label.clone(),
                })
                .collect(),
        ),
    };

    TaskListViewDto {
        revision,
        composer_value: view.composer.value.clone(),
        composer_focused: view.composer.focused,
        placeholder,
        rows,
    }
}

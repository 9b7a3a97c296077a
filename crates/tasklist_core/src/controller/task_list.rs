//! Task list controller.
//!
//! # Responsibility
//! - Own the ordered task list, the edit session and the composer state.
//! - Apply add/edit/delete and the edit-mode state machine.
//! - Re-render synchronously after every mutation.
//!
//! # Invariants
//! - Task ids are unique and never reused within one controller.
//! - No stored text is empty or whitespace-only.
//! - At most one task is in edit mode; beginning a second edit cancels the
//!   first and restores its stored text.
//! - Every operation is total: invalid input is a silent no-op or falls back
//!   to cancel. Nothing is surfaced to the caller as an error.
//! - `view()` always reflects the state after the latest mutation.

use crate::controller::edit_state::{ComposerState, EditSession};
use crate::controller::intent::Intent;
use crate::model::clock::{Clock, SystemClock};
use crate::model::task::{normalize_task_text, Task, TaskId};
use crate::view::events::{intent_for_event, UiEvent};
use crate::view::render::{render, AppView};
use log::debug;

/// Receives every freshly rendered view.
///
/// Hosts implement this to repaint; the controller never reads back from it.
pub trait ViewSink: Send {
    fn present(&mut self, view: &AppView, revision: u64);
}

/// Owner of the task list and its edit state.
pub struct TaskListController<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    editing: Option<EditSession>,
    composer: ComposerState,
    next_id: u64,
    clock: C,
    revision: u64,
    /// Row that most recently left edit mode and the first revision showing it read-only.
    left_edit: Option<(TaskId, u64)>,
    view: AppView,
    sink: Option<Box<dyn ViewSink>>,
}

impl TaskListController<SystemClock> {
    /// Creates an empty controller using wall-clock timestamps.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskListController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskListController<C> {
    /// Creates an empty controller with a caller-provided time source.
    ///
    /// The initial view (placeholder, focused composer) is rendered eagerly.
    pub fn with_clock(clock: C) -> Self {
        let composer = ComposerState::focused();
        let view = render(&[], None, &composer);
        Self {
            tasks: Vec::new(),
            editing: None,
            composer,
            next_id: 1,
            clock,
            revision: 0,
            left_edit: None,
            view,
            sink: None,
        }
    }

    /// Attaches a sink and immediately presents the current view to it.
    pub fn attach_sink(&mut self, sink: Box<dyn ViewSink>) {
        let sink = self.sink.insert(sink);
        sink.present(&self.view, self.revision);
    }

    /// Detaches and returns the current sink, if any.
    pub fn detach_sink(&mut self) -> Option<Box<dyn ViewSink>> {
        self.sink.take()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id of the task currently in edit mode.
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|session| session.task_id)
    }

    /// Unsaved text of the task currently in edit mode.
    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|session| session.draft.as_str())
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    /// Latest rendered view.
    pub fn view(&self) -> &AppView {
        &self.view
    }

    /// Number of renders since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a task with trimmed `text`.
    ///
    /// Returns the new id, or `None` when `text` is blank (list unchanged).
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = self.push_task(text)?;
        self.render();
        Some(id)
    }

    fn push_task(&mut self, text: &str) -> Option<TaskId> {
        let Ok(text) = normalize_task_text(text) else {
            debug!("event=task_add module=controller status=skipped reason=empty_text");
            return None;
        };

        let id = self.allocate_id();
        self.tasks.push(Task {
            id,
            text,
            created_at: self.clock.now_epoch_ms(),
        });
        debug!(
            "event=task_add module=controller status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        Some(id)
    }

    /// Replaces the stored text of `id`.
    ///
    /// Unknown ids and blank text leave the list unchanged.
    pub fn edit_task(&mut self, id: TaskId, new_text: &str) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_edit module=controller status=skipped reason=unknown_id task_id={id}");
            return;
        };
        if task.set_text(new_text).is_err() {
            debug!("event=task_edit module=controller status=skipped reason=empty_text task_id={id}");
            return;
        }
        debug!("event=task_edit module=controller status=ok task_id={id}");
        self.render();
    }

    /// Removes `id`, clearing the edit session when it names that task.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=controller status=skipped reason=unknown_id task_id={id}");
            return;
        }
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        debug!(
            "event=task_delete module=controller status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        self.render();
    }

    /// Puts `id` into edit mode, cancelling any other edit first.
    pub fn begin_edit(&mut self, id: TaskId) {
        if self.editing_id() == Some(id) {
            return;
        }
        let Some(task) = self.task(id) else {
            debug!("event=edit_begin module=controller status=skipped reason=unknown_id task_id={id}");
            return;
        };
        let session = EditSession::begin(task);

        if let Some(previous) = self.editing.take() {
            debug!(
                "event=edit_cancel module=controller status=ok task_id={} reason=superseded",
                previous.task_id
            );
        }
        self.editing = Some(session);
        self.composer.focused = false;
        debug!("event=edit_begin module=controller status=ok task_id={id}");
        self.render();
    }

    /// Replaces the draft of the task in edit mode.
    pub fn update_draft(&mut self, id: TaskId, text: &str) {
        let Some(session) = self.editing.as_mut().filter(|session| session.is_for(id)) else {
            return;
        };
        if session.draft == text {
            return;
        }
        session.draft = text.to_string();
        self.render();
    }

    /// Leaves edit mode for `id`, saving `candidate` when it is not blank.
    ///
    /// Blank candidates behave as `cancel_edit`. Ids not in edit mode,
    /// including tasks deleted mid-edit, are ignored.
    pub fn commit_edit(&mut self, id: TaskId, candidate: &str) {
        if self.editing_id() != Some(id) {
            debug!("event=edit_commit module=controller status=skipped reason=not_editing task_id={id}");
            return;
        }
        if normalize_task_text(candidate).is_err() {
            self.cancel_edit(id);
            return;
        }

        self.editing = None;
        debug!("event=edit_commit module=controller status=ok task_id={id}");
        let unchanged = self
            .task(id)
            .is_some_and(|task| task.text == candidate.trim());
        if unchanged {
            self.render();
        } else {
            // edit_task renders.
            self.edit_task(id, candidate);
        }
        self.left_edit = Some((id, self.revision));
    }

    /// Commits the current draft of `id`.
    pub fn commit_current(&mut self, id: TaskId) {
        let Some(draft) = self
            .editing
            .as_ref()
            .filter(|session| session.is_for(id))
            .map(|session| session.draft.clone())
        else {
            return;
        };
        self.commit_edit(id, &draft);
    }

    /// Leaves edit mode for `id`, discarding the draft.
    pub fn cancel_edit(&mut self, id: TaskId) {
        if self.editing_id() != Some(id) {
            return;
        }
        self.editing = None;
        debug!("event=edit_cancel module=controller status=ok task_id={id}");
        self.render();
        self.left_edit = Some((id, self.revision));
    }

    /// Edit/Save button: saves when `id` is in edit mode, else begins editing.
    pub fn toggle_edit(&mut self, id: TaskId) {
        if self.editing_id() == Some(id) {
            self.commit_current(id);
        } else {
            self.begin_edit(id);
        }
    }

    /// Edit/Save click from a host whose latest view was `seen_revision`.
    ///
    /// The click is dropped when the row left edit mode after that revision,
    /// as when focus loss commits the row just before the Save click lands.
    /// Returns whether the click was applied.
    pub fn toggle_edit_seen(&mut self, id: TaskId, seen_revision: u64) -> bool {
        if self.left_edit_since(id, seen_revision) {
            debug!(
                "event=edit_toggle module=controller status=skipped reason=stale_click task_id={} seen_revision={}",
                id, seen_revision
            );
            return false;
        }
        self.toggle_edit(id);
        true
    }

    fn left_edit_since(&self, id: TaskId, seen_revision: u64) -> bool {
        matches!(self.left_edit, Some((left, at)) if left == id && seen_revision < at)
    }

    /// Mirrors typing into the new-task input.
    pub fn set_composer_text(&mut self, text: &str) {
        if self.composer.value == text {
            return;
        }
        self.composer.value = text.to_string();
        self.render();
    }

    /// Adds the composer text as a task, then clears and refocuses the input.
    ///
    /// Blank input leaves both the list and the composer untouched.
    pub fn submit_composer(&mut self) -> Option<TaskId> {
        let text = self.composer.value.clone();
        let id = self.push_task(&text)?;
        self.composer.reset();
        self.render();
        Some(id)
    }

    /// Single entry point for host intents.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::AddTask { text } => {
                self.add_task(&text);
            }
            Intent::EditTask { id, text } => self.edit_task(id, &text),
            Intent::DeleteTask { id } => self.delete_task(id),
            Intent::BeginEdit { id } => self.begin_edit(id),
            Intent::UpdateDraft { id, text } => self.update_draft(id, &text),
            Intent::CommitEdit { id, text } => self.commit_edit(id, &text),
            Intent::CommitCurrent { id } => self.commit_current(id),
            Intent::CancelEdit { id } => self.cancel_edit(id),
            Intent::ToggleEdit { id } => self.toggle_edit(id),
            Intent::SetComposerText { text } => self.set_composer_text(&text),
            Intent::SubmitComposer => {
                self.submit_composer();
            }
        }
    }

    /// Maps a raw host event against the current view and dispatches it.
    ///
    /// Returns whether the event was applied.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        self.handle_event_at(event, self.revision)
    }

    /// Like `handle_event`, for hosts that queue events raised against an
    /// older view. `seen_revision` is the revision the host last drew.
    pub fn handle_event_at(&mut self, event: &UiEvent, seen_revision: u64) -> bool {
        let Some(intent) = intent_for_event(&self.view, event) else {
            return false;
        };
        let task_id = intent
            .task_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        debug!(
            "event=intent_dispatch module=controller intent={} task_id={} revision={} seen_revision={}",
            intent.name(),
            task_id,
            self.revision,
            seen_revision
        );
        match intent {
            Intent::ToggleEdit { id } => self.toggle_edit_seen(id, seen_revision),
            other => {
                self.dispatch(other);
                true
            }
        }
    }

    /// Recomputes the view from current state and presents it.
    pub fn render(&mut self) -> &AppView {
        self.view = render(&self.tasks, self.editing.as_ref(), &self.composer);
        self.revision += 1;
        if let Some(sink) = self.sink.as_mut() {
            sink.present(&self.view, self.revision);
        }
        &self.view
    }

    /// Drops all tasks and transient state; ids keep increasing.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.editing = None;
        self.left_edit = None;
        self.composer = ComposerState::focused();
        debug!("event=task_clear module=controller status=ok");
        self.render();
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }
}

//! Core logic for the task list editor.
//! This crate is the single source of truth for task list invariants; hosts
//! only draw `AppView` values and forward input.

pub mod controller;
pub mod logging;
pub mod model;
pub mod view;

pub use controller::edit_state::{ComposerState, EditSession};
pub use controller::intent::Intent;
pub use controller::task_list::{TaskListController, ViewSink};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clock::{Clock, FixedClock, SystemClock};
pub use model::task::{normalize_task_text, Task, TaskId, TaskTextError};
pub use view::events::{intent_for_event, Control, Key, Target, UiEvent};
pub use view::render::{
    render, AppView, ComposerView, ListView, PlaceholderView, RowMode, TaskItemView,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Task list controller and its transient state.
//!
//! # Responsibility
//! - Own the task list and the single edit session.
//! - Accept intents from hosts through one dispatch entry point.
//!
//! # Invariants
//! - Edit state is held explicitly, never rediscovered from a rendered view.

pub mod edit_state;
pub mod intent;
pub mod task_list;

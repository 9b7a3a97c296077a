//! Flutter-facing bridge crate for the task list core.

pub mod api;

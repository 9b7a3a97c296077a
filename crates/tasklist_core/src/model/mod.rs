//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record and its identity type.
//! - Provide the time source seam used when tasks are created.
//!
//! # Invariants
//! - Every task is identified by a session-unique `TaskId`.
//! - Deletion removes the record; there are no tombstones.

pub mod clock;
pub mod task;

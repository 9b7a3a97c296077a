//! Task domain model.
//!
//! # Responsibility
//! - Define the record stored in the task list.
//! - Own text normalization used by every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another task in the same session.
//! - Stored `text` is trimmed and never empty.
//! - `created_at` is set once at creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one task within a controller session.
///
/// Allocated from a monotonic counter, so values are unique and increasing
/// but carry no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Parses the decimal form produced by `Display`.
    ///
    /// Returns `None` for malformed input; callers treat that as an unknown id.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u64>().ok().map(Self)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation error for task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTextError {
    /// Text is empty or whitespace-only after trimming.
    Empty,
}

impl Display for TaskTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskTextError {}

/// Trims raw input into storable task text.
///
/// # Errors
/// - Returns `TaskTextError::Empty` when nothing is left after trimming.
pub fn normalize_task_text(raw: &str) -> Result<String, TaskTextError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskTextError::Empty);
    }
    Ok(trimmed.to_string())
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Session-unique identity.
    pub id: TaskId,
    /// Trimmed, non-empty content.
    pub text: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates a task from raw text.
    ///
    /// # Errors
    /// - Returns `TaskTextError::Empty` when `text` trims to nothing.
    pub fn new(id: TaskId, text: &str, created_at: i64) -> Result<Self, TaskTextError> {
        Ok(Self {
            id,
            text: normalize_task_text(text)?,
            created_at,
        })
    }

    /// Replaces the text, keeping the old value when `text` trims to nothing.
    ///
    /// # Errors
    /// - Returns `TaskTextError::Empty` and leaves `self` unchanged.
    pub fn set_text(&mut self, text: &str) -> Result<(), TaskTextError> {
        self.text = normalize_task_text(text)?;
        Ok(())
    }
}

//! Host-independent view description and input vocabulary.
//!
//! # Responsibility
//! - Project controller state into an `AppView` hosts can draw.
//! - Translate raw host input into controller intents.

pub mod events;
pub mod render;

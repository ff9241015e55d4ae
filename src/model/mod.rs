//! Core data model for Charthouse.
//!
//! Lessons are the fixed stops of the course; chat messages are the
//! transcript of the assistant panel. Everything here is transient,
//! in-memory state — nothing is persisted between runs.

mod chat;
mod lesson;

pub use chat::{ChatMessage, Sender};
pub use lesson::LessonId;

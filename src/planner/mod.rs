//! Planning domain models
//!
//! This module contains the core planning data structures.
//! It is split into submodules for better organization:
//! - `text_tag`: Colored text labels attached to tasks
//! - `priority`: Task priority and completion status vocabularies
//! - `time_state`: Time handling flag set
//! - `task`: The task aggregate with its recursive subtask tree

mod priority;
mod task;
mod text_tag;
mod time_state;

// Re-export all public types
pub use priority::{TaskPriority, TaskStatus};
pub use task::{Task, TaskIter};
pub use text_tag::{Rgba, TextTag};
pub use time_state::TimeState;

//! Task Planner Library
//!
//! A planning-domain data model: tasks with a recursive subtask tree, colored
//! text tags, priority and status vocabularies, and time handling flags.
//!
//! # Architecture
//!
//! - **Domain Layer**: `planner` module - `Task`, `TextTag` and the enumerations
//! - **Validation Layer**: `validation` module - checks field constraints and
//!   reports structured failures
//! - **Configuration**: `constraints` module - the limits used by validation,
//!   loadable from TOML
//!
//! The model holds no locks and performs no I/O. Callers that share a task
//! tree between threads must synchronize access themselves, or hand out
//! clones.
//!
//! # Example
//!
//! ```
//! use task_planner::{FieldConstraints, Task, TaskStatus, validation};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let deadline = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let task = Task::new("Pay bills")
//!     .with_schedule(start, deadline)
//!     .with_status(TaskStatus::Completed);
//!
//! assert_eq!(task.to_string(), "Pay bills [2024-01-01-2024-01-05]: Completed");
//! assert!(validation::validate_tree(&task, &FieldConstraints::default()).is_ok());
//! ```

pub mod constraints;
pub mod planner;
pub mod validation;

// Re-export commonly used types
pub use constraints::FieldConstraints;
pub use planner::{Rgba, Task, TaskIter, TaskPriority, TaskStatus, TextTag, TimeState};
pub use validation::{ValidationError, ValidationErrors};

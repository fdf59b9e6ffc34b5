//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use task_planner::{Rgba, Task, TaskStatus, TextTag};

/// Midnight of the given day
pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn tag(name: &str) -> TextTag {
    TextTag::new(name, Rgba::rgb(200, 40, 40))
}

/// The "Pay bills" task used by display tests
pub fn pay_bills() -> Task {
    Task::new("Pay bills")
        .with_schedule(date(2024, 1, 1), date(2024, 1, 5))
        .with_status(TaskStatus::Completed)
}

/// A task tree with the given depth where every node has `fan_out` children
pub fn create_tree(depth: usize, fan_out: usize) -> Task {
    fn build(level: usize, depth: usize, fan_out: usize, path: &str) -> Task {
        let mut task = Task::new(format!("Task {}", path)).with_tag(tag("tree"));
        if level < depth {
            for i in 0..fan_out {
                task.add_subtask(build(level + 1, depth, fan_out, &format!("{}.{}", path, i)));
            }
        }
        task
    }
    build(0, depth, fan_out, "0")
}

/// Child counts of every node in pre-order, describing the tree shape
pub fn shape(task: &Task) -> Vec<usize> {
    task.iter().map(|t| t.subtasks.len()).collect()
}

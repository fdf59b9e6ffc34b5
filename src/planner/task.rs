use super::priority::{TaskPriority, TaskStatus};
use super::text_tag::TextTag;
use super::time_state::TimeState;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A task in a schedule or daily plan
///
/// A task owns its subtasks exclusively, so the subtasks of a task form a
/// tree: there are no back-references to the parent and no subtask is shared
/// between two parents. Every field is public and may be changed in any
/// order; no state machine is enforced here. Field constraints such as the
/// title length are checked by [`crate::validation`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Title of the task (3 to 25 characters)
    pub title: String,
    /// Exhaustive description of the task
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Date and time the task starts, if scheduled
    pub start_date: Option<NaiveDateTime>,
    /// Date and time the task should be completed by, if scheduled
    pub deadline: Option<NaiveDateTime>,
    /// Estimated time to complete the task
    pub common_completion_time: Duration,
    /// Identifier of the group used to classify the task
    pub task_group_id: i32,
    pub time_flags: TimeState,
    /// Tags in insertion order
    pub tags: Vec<TextTag>,
    pub subtasks: Vec<Task>,
    /// Recurrence markers, stored as-is
    pub task_repeat_time: Vec<NaiveDateTime>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Normal,
            status: TaskStatus::Unfinished,
            start_date: None,
            deadline: None,
            common_completion_time: Duration::ZERO,
            task_group_id: 0,
            time_flags: TimeState::NONE,
            tags: Vec::new(),
            subtasks: Vec::new(),
            task_repeat_time: Vec::new(),
        }
    }
}

impl Task {
    /// Create an unfinished task with normal priority and no tags or subtasks
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set both the start date and the deadline
    pub fn with_schedule(mut self, start_date: NaiveDateTime, deadline: NaiveDateTime) -> Self {
        self.start_date = Some(start_date);
        self.deadline = Some(deadline);
        self
    }

    pub fn with_time_flags(mut self, time_flags: TimeState) -> Self {
        self.time_flags = time_flags;
        self
    }

    pub fn with_tag(mut self, tag: TextTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_subtask(mut self, subtask: Task) -> Self {
        self.subtasks.push(subtask);
        self
    }

    pub fn add_tag(&mut self, tag: TextTag) {
        self.tags.push(tag);
    }

    pub fn add_subtask(&mut self, subtask: Task) {
        self.subtasks.push(subtask);
    }

    /// Check whether a tag with the given name is attached
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }

    /// Number of tasks in this tree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.subtasks.iter().map(Task::node_count).sum::<usize>()
    }

    /// Length of the longest subtask chain below this task (0 for a leaf)
    pub fn depth(&self) -> usize {
        self.subtasks
            .iter()
            .map(|t| t.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterate over this task and all of its descendants, depth first
    pub fn iter(&self) -> TaskIter<'_> {
        TaskIter { stack: vec![self] }
    }
}

/// Deep copy of the whole subtask tree
///
/// Tags are values and are copied element by element; every subtask is
/// cloned recursively, so the copy shares no storage with the source.
impl Clone for Task {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            status: self.status,
            start_date: self.start_date,
            deadline: self.deadline,
            common_completion_time: self.common_completion_time,
            task_group_id: self.task_group_id,
            time_flags: self.time_flags,
            tags: self.tags.iter().cloned().collect(),
            subtasks: self.subtasks.iter().map(Task::clone).collect(),
            task_repeat_time: self.task_repeat_time.clone(),
        }
    }
}

/// Tag order is ignored; everything else, subtask order included, must match
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.priority == other.priority
            && self.status == other.status
            && self.start_date == other.start_date
            && self.deadline == other.deadline
            && self.common_completion_time == other.common_completion_time
            && self.task_group_id == other.task_group_id
            && self.time_flags == other.time_flags
            && same_tags(&self.tags, &other.tags)
            && self.subtasks == other.subtasks
            && self.task_repeat_time == other.task_repeat_time
    }
}

impl Eq for Task {}

fn same_tags(a: &[TextTag], b: &[TextTag]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&TextTag> = a.iter().collect();
    let mut b: Vec<&TextTag> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}-{}]: {}",
            self.title,
            format_date(self.start_date),
            format_date(self.deadline),
            self.status
        )
    }
}

/// Midnight renders as a bare date
fn format_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(d) if d.time() == NaiveTime::MIN => d.format("%Y-%m-%d").to_string(),
        Some(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Pre-order traversal over a task tree
pub struct TaskIter<'a> {
    stack: Vec<&'a Task>,
}

impl<'a> Iterator for TaskIter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let task = self.stack.pop()?;
        self.stack.extend(task.subtasks.iter().rev());
        Some(task)
    }
}

impl<'a> IntoIterator for &'a Task {
    type Item = &'a Task;
    type IntoIter = TaskIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Rgba;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Write report");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.status, TaskStatus::Unfinished);
        assert_eq!(task.priority, TaskPriority::Normal);
        assert!(task.tags.is_empty());
        assert!(task.subtasks.is_empty());
        assert!(task.task_repeat_time.is_empty());
        assert_eq!(task.time_flags, TimeState::NONE);
        assert_eq!(task.start_date, None);
        assert_eq!(task.deadline, None);
    }

    #[test]
    fn test_display_with_times() {
        let task = Task::new("Standup")
            .with_schedule(at(2024, 3, 4, 9, 30), at(2024, 3, 4, 9, 45));
        assert_eq!(
            task.to_string(),
            "Standup [2024-03-04 09:30:00-2024-03-04 09:45:00]: Unfinished"
        );
    }

    #[test]
    fn test_display_without_schedule() {
        let task = Task::new("Someday").with_status(TaskStatus::Canceled);
        assert_eq!(task.to_string(), "Someday [-]: Canceled");
    }

    #[test]
    fn test_depth_and_node_count() {
        let leaf = Task::new("leaf");
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.node_count(), 1);

        let tree = Task::new("root")
            .with_subtask(Task::new("a").with_subtask(Task::new("a1")))
            .with_subtask(Task::new("b"));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = Task::new("root")
            .with_subtask(
                Task::new("a")
                    .with_subtask(Task::new("a1"))
                    .with_subtask(Task::new("a2")),
            )
            .with_subtask(Task::new("b"));
        let titles: Vec<&str> = tree.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_tag_order_ignored_for_equality() {
        let red = TextTag::new("red", Rgba::rgb(255, 0, 0));
        let blue = TextTag::new("blue", Rgba::rgb(0, 0, 255));
        let a = Task::new("Tagged").with_tag(red.clone()).with_tag(blue.clone());
        let b = Task::new("Tagged").with_tag(blue).with_tag(red.clone());
        assert_eq!(a, b);
        // Display keeps insertion order
        assert_eq!(a.tags[0], red);

        let c = Task::new("Tagged").with_tag(red.clone()).with_tag(red);
        assert_ne!(a, c);
    }

    #[test]
    fn test_subtask_order_matters_for_equality() {
        let a = Task::new("p").with_subtask(Task::new("x")).with_subtask(Task::new("y"));
        let b = Task::new("p").with_subtask(Task::new("y")).with_subtask(Task::new("x"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_has_tag() {
        let task = Task::new("Tagged").with_tag(TextTag::new("home", Rgba::default()));
        assert!(task.has_tag("home"));
        assert!(!task.has_tag("work"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority level of a task
///
/// Variants are declared from the most urgent to the least urgent, and the
/// derived ordering follows that declaration. Discriminants leave gaps of ten
/// so intermediate levels can be added later without renumbering; treat them
/// as a rank, not as an arithmetic scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TaskPriority {
    /// No priority specified
    None = 0,
    /// Must be completed as soon as possible
    Maximal = 10,
    /// Critically valuable to complete
    Critical = 20,
    /// Should be completed anyway
    VeryHigh = 30,
    /// Should be completed before other tasks
    High = 40,
    /// Slightly above common priority
    SlightlyHigh = 50,
    /// Common task with default priority
    #[default]
    Normal = 60,
    /// Can be skipped without problems when time is short
    Low = 70,
    /// Additional work for when there is still time left
    VeryLow = 80,
    /// Completion is barely needed, mostly a hint
    Minimal = 90,
    /// Something to do with a lot of free time
    FreeTime = 100,
}

impl TaskPriority {
    /// All priorities, most urgent first
    pub const ALL: [TaskPriority; 11] = [
        TaskPriority::None,
        TaskPriority::Maximal,
        TaskPriority::Critical,
        TaskPriority::VeryHigh,
        TaskPriority::High,
        TaskPriority::SlightlyHigh,
        TaskPriority::Normal,
        TaskPriority::Low,
        TaskPriority::VeryLow,
        TaskPriority::Minimal,
        TaskPriority::FreeTime,
    ];

    /// Numeric rank of the priority (lower is more urgent)
    pub fn rank(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            TaskPriority::None => "None",
            TaskPriority::Maximal => "Maximal",
            TaskPriority::Critical => "Critical",
            TaskPriority::VeryHigh => "VeryHigh",
            TaskPriority::High => "High",
            TaskPriority::SlightlyHigh => "SlightlyHigh",
            TaskPriority::Normal => "Normal",
            TaskPriority::Low => "Low",
            TaskPriority::VeryLow => "VeryLow",
            TaskPriority::Minimal => "Minimal",
            TaskPriority::FreeTime => "FreeTime",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_variant(s);
        TaskPriority::ALL
            .into_iter()
            .find(|p| p.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid priority '{}'. Valid options are: none, maximal, critical, very_high, high, slightly_high, normal, low, very_low, minimal, free_time",
                    s
                )
            })
    }
}

/// Completion status of a task
///
/// No transitions are enforced; callers assign any status at any time.
/// `PartlyCompleted` only makes sense for a task with subtasks, and
/// `Exceeded` is only ever set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Unfinished,
    Completed,
    Failed,
    PartlyCompleted,
    Canceled,
    Exceeded,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Unfinished,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::PartlyCompleted,
        TaskStatus::Canceled,
        TaskStatus::Exceeded,
    ];

    fn name(self) -> &'static str {
        match self {
            TaskStatus::Unfinished => "Unfinished",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::PartlyCompleted => "PartlyCompleted",
            TaskStatus::Canceled => "Canceled",
            TaskStatus::Exceeded => "Exceeded",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_variant(s);
        TaskStatus::ALL
            .into_iter()
            .find(|st| st.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid status '{}'. Valid options are: unfinished, completed, failed, partly_completed, canceled, exceeded",
                    s
                )
            })
    }
}

/// Accept both `PartlyCompleted` and `partly_completed` spellings
fn normalize_variant(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

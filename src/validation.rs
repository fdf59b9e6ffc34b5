//! Validation of task and tag field constraints
//!
//! The model types accept any value; this module checks them against a set of
//! [`FieldConstraints`] and reports every violation as a structured
//! [`ValidationError`]. Nothing here mutates or panics.

use crate::constraints::FieldConstraints;
use crate::planner::{Task, TaskStatus, TextTag};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// A single violated field constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title '{title}' has {len} characters, expected between {min} and {max}")]
    TitleLength {
        title: String,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Tag name is required")]
    EmptyTagName,

    #[error("Tag name '{name}' has {len} characters, at most {max} allowed")]
    TagNameTooLong { name: String, len: usize, max: usize },

    #[error("Tag '{0}' is attached more than once")]
    DuplicateTag(String),

    #[error("Task '{title}' has deadline {deadline} before its start date {start}")]
    DeadlineBeforeStart {
        title: String,
        start: NaiveDateTime,
        deadline: NaiveDateTime,
    },

    #[error("Task '{0}' is partly completed but has no subtasks")]
    PartlyCompletedWithoutSubtasks(String),
}

/// All violations found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

/// Check the title length, counted in characters
pub fn validate_title(title: &str, constraints: &FieldConstraints) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len < constraints.title_min_len || len > constraints.title_max_len {
        trace!(title, len, "title length rejected");
        return Err(ValidationError::TitleLength {
            title: title.to_string(),
            len,
            min: constraints.title_min_len,
            max: constraints.title_max_len,
        });
    }
    Ok(())
}

/// Check that a tag name is present and not too long
pub fn validate_tag(tag: &TextTag, constraints: &FieldConstraints) -> Result<(), ValidationError> {
    if tag.name.is_empty() {
        trace!("empty tag name rejected");
        return Err(ValidationError::EmptyTagName);
    }
    let len = tag.name.chars().count();
    if len > constraints.tag_name_max_len {
        trace!(name = %tag.name, len, "tag name length rejected");
        return Err(ValidationError::TagNameTooLong {
            name: tag.name.clone(),
            len,
            max: constraints.tag_name_max_len,
        });
    }
    Ok(())
}

/// Check every tag of a collection, plus uniqueness of tag names
///
/// Each duplicated name is reported once, at its second occurrence.
pub fn validate_tags(tags: &[TextTag], constraints: &FieldConstraints) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for tag in tags {
        if let Err(e) = validate_tag(tag, constraints) {
            errors.push(e);
        }
        if !seen.insert(tag.name.as_str()) && reported.insert(tag.name.as_str()) {
            errors.push(ValidationError::DuplicateTag(tag.name.clone()));
        }
    }

    errors
}

/// Check that the deadline does not precede the start date
///
/// Only applies when both dates are set.
pub fn validate_schedule(task: &Task) -> Result<(), ValidationError> {
    if let (Some(start), Some(deadline)) = (task.start_date, task.deadline)
        && deadline < start
    {
        return Err(ValidationError::DeadlineBeforeStart {
            title: task.title.clone(),
            start,
            deadline,
        });
    }
    Ok(())
}

/// Check a single task, without descending into its subtasks
pub fn validate_task(task: &Task, constraints: &FieldConstraints) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    check_node(task, constraints, &mut errors);
    finish(task, errors)
}

/// Check a task and every one of its descendants
///
/// Violations are collected for the whole tree in pre-order rather than
/// stopping at the first one.
pub fn validate_tree(task: &Task, constraints: &FieldConstraints) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    for node in task.iter() {
        check_node(node, constraints, &mut errors);
    }
    finish(task, errors)
}

fn check_node(task: &Task, constraints: &FieldConstraints, errors: &mut Vec<ValidationError>) {
    if let Err(e) = validate_title(&task.title, constraints) {
        errors.push(e);
    }
    errors.extend(validate_tags(&task.tags, constraints));
    if let Err(e) = validate_schedule(task) {
        errors.push(e);
    }
    if task.status == TaskStatus::PartlyCompleted && !task.has_subtasks() {
        errors.push(ValidationError::PartlyCompletedWithoutSubtasks(
            task.title.clone(),
        ));
    }
}

fn finish(task: &Task, errors: Vec<ValidationError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(title = %task.title, count = errors.len(), "task failed validation");
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Rgba;

    #[test]
    fn test_title_bounds() {
        let c = FieldConstraints::default();
        assert!(validate_title("abc", &c).is_ok());
        assert!(validate_title(&"x".repeat(25), &c).is_ok());
        assert!(validate_title("ab", &c).is_err());
        assert!(validate_title(&"x".repeat(26), &c).is_err());
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let c = FieldConstraints::default();
        // 3 characters, 9 bytes
        assert!(validate_title("日本語", &c).is_ok());
    }

    #[test]
    fn test_tag_name_rules() {
        let c = FieldConstraints::default();
        assert_eq!(
            validate_tag(&TextTag::new("", Rgba::default()), &c),
            Err(ValidationError::EmptyTagName)
        );
        assert!(validate_tag(&TextTag::new("x".repeat(24), Rgba::default()), &c).is_ok());
        assert!(matches!(
            validate_tag(&TextTag::new("x".repeat(25), Rgba::default()), &c),
            Err(ValidationError::TagNameTooLong { len: 25, max: 24, .. })
        ));
    }

    #[test]
    fn test_duplicate_tag_reported_once() {
        let c = FieldConstraints::default();
        let tags = vec![
            TextTag::new("home", Rgba::rgb(1, 1, 1)),
            TextTag::new("home", Rgba::rgb(2, 2, 2)),
            TextTag::new("home", Rgba::rgb(3, 3, 3)),
            TextTag::new("work", Rgba::rgb(1, 1, 1)),
        ];
        assert_eq!(
            validate_tags(&tags, &c),
            vec![ValidationError::DuplicateTag("home".to_string())]
        );
    }

    #[test]
    fn test_errors_display_one_per_line() {
        let errors = ValidationErrors(vec![
            ValidationError::EmptyTagName,
            ValidationError::DuplicateTag("home".to_string()),
        ]);
        assert_eq!(
            errors.to_string(),
            "Tag name is required\nTag 'home' is attached more than once"
        );
    }
}

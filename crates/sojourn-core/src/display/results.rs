//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::{Activity, Plan};

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results,
/// including success messages and the created resource information.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the
/// update, providing users with clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Activity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated activity '{}'", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// This provides consistent formatting for deletion results,
/// including confirmation messages and resource identification.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Result of adding an activity to a day.
///
/// Conflict detection is advisory: the write always goes through, and any
/// overlapping sibling is reported alongside the stored activity so the
/// caller can warn.
pub struct ActivityAdded {
    /// The activity as stored
    pub activity: Activity,
    /// The first sibling whose time interval overlaps, if any
    pub conflict: Option<Activity>,
}

impl fmt::Display for ActivityAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added activity '{}'", self.activity.title)?;
        writeln!(f)?;
        write!(f, "{}", self.activity)?;

        if let Some(conflict) = &self.conflict {
            writeln!(f)?;
            writeln!(
                f,
                "Warning: overlaps '{}' ({})",
                conflict.title,
                crate::schedule::clock::format_time_range(&conflict.start_time, conflict.duration)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityStatus, ActivityType};

    fn create_test_activity(id: &str, start_time: &str) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            kind: ActivityType::Activity,
            start_time: start_time.to_string(),
            duration: 60,
            location: None,
            cost: None,
            status: ActivityStatus::Planned,
            is_break: false,
            ai_suggested: false,
            order: 0,
        }
    }

    #[test]
    fn test_activity_added_without_conflict() {
        let result = ActivityAdded {
            activity: create_test_activity("walk", "09:00"),
            conflict: None,
        };
        let output = format!("{}", result);
        assert!(output.contains("Added activity 'walk'"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_activity_added_with_conflict() {
        let result = ActivityAdded {
            activity: create_test_activity("walk", "09:00"),
            conflict: Some(create_test_activity("brunch", "09:30")),
        };
        let output = format!("{}", result);
        assert!(output.contains("Warning: overlaps 'brunch' (09:30 - 10:30)"));
    }
}

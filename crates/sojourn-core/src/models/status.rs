//! Status enumerations for plans and activities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is still being put together
    #[default]
    Draft,

    /// Plan is currently in use
    Active,

    /// All days of the plan are done
    Completed,

    /// Plan is archived and hidden from normal views
    Archived,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PlanStatus::Draft),
            "active" => Ok(PlanStatus::Active),
            "completed" => Ok(PlanStatus::Completed),
            "archived" => Ok(PlanStatus::Archived),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
            PlanStatus::Archived => "archived",
        }
    }
}

/// Type-safe enumeration of activity statuses.
///
/// No status is terminal: any status may transition back to
/// [`ActivityStatus::Planned`], and the engine imposes no transition guard
/// beyond accepting one of the five enumerated values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
    /// Scheduled but not started
    #[default]
    Planned,

    /// Currently happening
    InProgress,

    /// Done
    Completed,

    /// User chose to skip
    Skipped,

    /// Moved to later
    Postponed,
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ActivityStatus::Planned),
            "in-progress" | "inprogress" | "in_progress" => Ok(ActivityStatus::InProgress),
            "completed" => Ok(ActivityStatus::Completed),
            "skipped" => Ok(ActivityStatus::Skipped),
            "postponed" => Ok(ActivityStatus::Postponed),
            _ => Err(format!("Invalid activity status: {s}")),
        }
    }
}

impl ActivityStatus {
    /// Convert to the wire string representation (hyphenated, as stored in
    /// plan documents).
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "planned",
            ActivityStatus::InProgress => "in-progress",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Skipped => "skipped",
            ActivityStatus::Postponed => "postponed",
        }
    }

    /// Whether this status counts toward day progress.
    ///
    /// Skipping is treated as a resolution, not a failure: a skipped
    /// activity contributes to the completed count exactly like a
    /// completed one.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ActivityStatus::Completed | ActivityStatus::Skipped)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name. This method ensures consistent visual representation across
    /// all display contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sojourn_core::models::ActivityStatus;
    ///
    /// assert_eq!(ActivityStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ActivityStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(ActivityStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "○ Planned",
            ActivityStatus::InProgress => "➤ In Progress",
            ActivityStatus::Completed => "✓ Completed",
            ActivityStatus::Skipped => "⊘ Skipped",
            ActivityStatus::Postponed => "↻ Postponed",
        }
    }
}

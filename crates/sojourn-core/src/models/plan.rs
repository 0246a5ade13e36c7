//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DayPlan, PlanPreferences, PlanStatus};

/// Permission level granted to a collaborator (contract only; nothing in
/// the core enforces it).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    /// Can only view
    #[default]
    View,
    /// Can suggest changes
    Suggest,
    /// Full edit access
    Edit,
}

/// A user the plan has been shared with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub email: String,
    #[serde(default)]
    pub permission: SharePermission,
}

/// Sharing settings carried on a plan. Pure contract: the core stores and
/// returns these fields but performs no authorization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SharingSettings {
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    #[serde(default)]
    pub shared_with: Vec<Collaborator>,
}

/// Represents a trip or event spanning a contiguous, inclusive date range.
///
/// The day list always covers exactly the calendar dates between
/// `start_date` and `end_date` (inclusive, ascending, no gaps or
/// duplicates); editing the date range regenerates the day set while
/// preserving days whose dates survive the change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the plan
    pub title: String,

    /// Detailed multi-line description of the plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where the trip or event takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// First calendar date, `YYYY-MM-DD`, inclusive
    pub start_date: String,

    /// Last calendar date, `YYYY-MM-DD`, inclusive
    pub end_date: String,

    /// One day per calendar date in the range
    #[serde(default)]
    pub days: Vec<DayPlan>,

    /// Scheduling preferences, always present
    #[serde(default)]
    pub preferences: PlanPreferences,

    /// Sharing contract (not enforced)
    #[serde(default)]
    pub sharing: SharingSettings,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Find a day by its ID.
    pub fn day(&self, day_id: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// Find a day by its ID, mutably.
    pub fn day_mut(&mut self, day_id: &str) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.id == day_id)
    }
}

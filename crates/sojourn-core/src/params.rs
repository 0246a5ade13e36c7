//! Parameter structures for Sojourn operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future REST API, etc.) without
//! framework-specific derives or dependencies. These structures provide a
//! clean interface for passing data between different layers of the
//! application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and
//! interface-specific frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP Payloads  │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers create wrapper structs that add framework-specific
//! derives and convert to core parameters via `From` implementations,
//! keeping compile-time verification of the mapping between layers.
//!
//! Status and type fields arrive as plain strings and are parsed by the
//! `validate()` methods, so malformed values are rejected before any
//! persistence attempt.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    models::{Activity, ActivityStatus, ActivityType, PlanPreferences, PlanStatus},
};

/// Generic parameters for operations requiring just a plan ID.
///
/// Used for operations like show_plan and delete_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters addressing one day within a plan.
///
/// Used for day-scoped reads and scheduling operations (progress, breaks,
/// timeline).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRef {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day within the plan
    pub day_id: String,
}

/// Parameters for creating a new plan.
///
/// The full day set is generated from the inclusive date range at creation
/// time; preferences default when not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the plan (required)
    pub title: String,
    /// Optional detailed description of the plan
    pub description: Option<String>,
    /// Optional destination of the trip or event
    pub destination: Option<String>,
    /// First calendar date, `YYYY-MM-DD`, inclusive
    pub start_date: String,
    /// Last calendar date, `YYYY-MM-DD`, inclusive
    pub end_date: String,
    /// Scheduling preferences; defaults apply when omitted
    pub preferences: Option<PlanPreferences>,
}

impl CreatePlan {
    /// Validate the creation parameters.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the title is empty or a date
    ///   string is missing
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_input("title").with_reason("Title is required"));
        }
        if self.start_date.is_empty() {
            return Err(
                PlannerError::invalid_input("start_date").with_reason("Start date is required")
            );
        }
        if self.end_date.is_empty() {
            return Err(PlannerError::invalid_input("end_date").with_reason("End date is required"));
        }
        Ok(())
    }
}

/// Parameters for listing plans.
///
/// Controls whether to show archived or active plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Whether to show archived plans instead of active ones
    #[serde(default)]
    pub archived: bool,
}

/// Parameters for updating an existing plan.
///
/// Allows partial updates: only supplied fields are merged. Changing either
/// date regenerates the plan's day set, preserving days whose dates remain
/// in range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// Plan ID to update (required)
    pub id: u64,
    /// Updated title of the plan
    pub title: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated destination
    pub destination: Option<String>,
    /// New status ('draft', 'active', 'completed', or 'archived')
    pub status: Option<String>,
    /// New first calendar date, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// New last calendar date, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl UpdatePlan {
    /// Validate plan update parameters and return the parsed status.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the status string is invalid
    pub fn validate(&self) -> Result<Option<PlanStatus>> {
        match &self.status {
            Some(status_str) => {
                let status =
                    PlanStatus::from_str(status_str).map_err(|_| PlannerError::InvalidInput {
                        field: "status".to_string(),
                        reason: format!(
                            "Invalid status: {}. Must be 'draft', 'active', 'completed', or 'archived'",
                            status_str
                        ),
                    })?;
                Ok(Some(status))
            }
            None => Ok(None),
        }
    }

    /// True when the update carries no fields besides the ID.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.destination.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Parameters for permanently deleting a plan.
///
/// Deletion cascades to the plan's days and activities (they are embedded
/// and have no independent existence), so it requires explicit
/// confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// A partially specified activity as supplied by callers (or by an external
/// suggester).
///
/// Missing `id`, `status`, and `order` are defaulted when the activity is
/// normalized: the id is generated, the status becomes planned, and the
/// order becomes 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    /// Client-assigned ID; generated when absent
    pub id: Option<String>,
    /// Title of the activity (required)
    pub title: String,
    /// Activity category ('meal', 'travel', 'sightseeing', …)
    pub kind: Option<String>,
    /// Start time as a 24h `HH:mm` string
    pub start_time: String,
    /// Duration in minutes
    pub duration: u32,
    /// Detailed description
    pub description: Option<String>,
    /// Where the activity takes place
    pub location: Option<String>,
    /// Estimated cost
    pub cost: Option<f64>,
    /// Initial status; defaults to 'planned'
    pub status: Option<String>,
    /// Position within the day; defaults to 0
    pub order: Option<u32>,
    /// Marks an activity proposed by an external suggester
    #[serde(default)]
    pub ai_suggested: bool,
}

impl NewActivity {
    /// Normalize into a full [`Activity`], defaulting the missing fields.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the title is empty, or the
    ///   status or type string is invalid
    pub fn into_activity(self) -> Result<Activity> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_input("title").with_reason("Title is required"));
        }

        let status = match &self.status {
            Some(s) => ActivityStatus::from_str(s).map_err(|reason| {
                PlannerError::invalid_input("status").with_reason(reason)
            })?,
            None => ActivityStatus::Planned,
        };
        let kind = match &self.kind {
            Some(k) => ActivityType::from_str(k)
                .map_err(|reason| PlannerError::invalid_input("kind").with_reason(reason))?,
            None => ActivityType::Activity,
        };

        Ok(Activity {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: self.title,
            description: self.description,
            kind,
            start_time: self.start_time,
            duration: self.duration,
            location: self.location,
            cost: self.cost,
            status,
            is_break: false,
            ai_suggested: self.ai_suggested,
            order: self.order.unwrap_or(0),
        })
    }
}

/// Parameters for adding an activity to a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddActivity {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day to append to
    pub day_id: String,
    /// The activity to add (partial; defaults are normalized)
    pub activity: NewActivity,
}

/// Parameters for replacing a day's entire activity list.
///
/// This is the bulk-update path used for reordering and wholesale edits:
/// `order` is reassigned from array position and the list is sorted by
/// start time before it is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceActivities {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day whose activities are replaced
    pub day_id: String,
    /// The full replacement list
    pub activities: Vec<Activity>,
}

/// Parameters for moving one activity to a new position within its day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveActivity {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day containing the activity
    pub day_id: String,
    /// Current 0-based position
    pub from_index: usize,
    /// Target 0-based position
    pub to_index: usize,
}

/// Parameters for updating a single activity's fields.
///
/// Only the supplied fields are merged; `order` is not patchable because
/// position is derived from the array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchActivity {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day containing the activity
    pub day_id: String,
    /// ID of the activity to patch (required)
    pub activity_id: String,
    /// Updated title
    pub title: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated category ('meal', 'travel', 'sightseeing', …)
    pub kind: Option<String>,
    /// Updated start time, `HH:mm`
    pub start_time: Option<String>,
    /// Updated duration in minutes
    pub duration: Option<u32>,
    /// Updated location
    pub location: Option<String>,
    /// Updated estimated cost
    pub cost: Option<f64>,
    /// New status ('planned', 'in-progress', 'completed', 'skipped', or
    /// 'postponed')
    pub status: Option<String>,
}

impl PatchActivity {
    /// Validate patch parameters and return the parsed status and type.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the status or type string is
    ///   invalid
    pub fn validate(&self) -> Result<(Option<ActivityStatus>, Option<ActivityType>)> {
        let status = match &self.status {
            Some(status_str) => {
                Some(
                    ActivityStatus::from_str(status_str).map_err(|_| PlannerError::InvalidInput {
                        field: "status".to_string(),
                        reason: format!(
                            "Invalid status: {}. Must be 'planned', 'in-progress', 'completed', 'skipped', or 'postponed'",
                            status_str
                        ),
                    })?,
                )
            }
            None => None,
        };

        let kind = match &self.kind {
            Some(kind_str) => Some(
                ActivityType::from_str(kind_str)
                    .map_err(|reason| PlannerError::invalid_input("kind").with_reason(reason))?,
            ),
            None => None,
        };

        Ok((status, kind))
    }
}

/// Parameters for removing an activity from a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveActivity {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day containing the activity
    pub day_id: String,
    /// ID of the activity to remove
    pub activity_id: String,
}

/// Parameters for compacting a day's schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompactDay {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day to compact
    pub day_id: String,
    /// First start time of the compacted timeline; defaults to the plan's
    /// wake-up preference
    pub day_start: Option<String>,
}

/// Parameters for free-slot discovery within a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreeSlots {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day to inspect
    pub day_id: String,
    /// Minimum slot length in minutes; defaults to 30
    pub min_duration: Option<u32>,
}

/// Parameters for rendering a day's fixed-width slot grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the day to render
    pub day_id: String,
    /// Slot width in minutes; defaults to 30
    pub slot_duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan_validate_requires_title() {
        let params = CreatePlan {
            title: "  ".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-02".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { field, .. }) if field == "title"
        ));
    }

    #[test]
    fn test_create_plan_validate_requires_dates() {
        let params = CreatePlan {
            title: "Trip".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { field, .. }) if field == "start_date"
        ));
    }

    #[test]
    fn test_update_plan_validate_parses_status() {
        let params = UpdatePlan {
            id: 1,
            status: Some("active".to_string()),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), Some(PlanStatus::Active));

        let params = UpdatePlan {
            id: 1,
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_plan_is_empty() {
        assert!(UpdatePlan { id: 1, ..Default::default() }.is_empty());
        let params = UpdatePlan {
            id: 1,
            title: Some("New".to_string()),
            ..Default::default()
        };
        assert!(!params.is_empty());
    }

    #[test]
    fn test_new_activity_defaults() {
        let activity = NewActivity {
            title: "Museum".to_string(),
            start_time: "10:00".to_string(),
            duration: 90,
            ..Default::default()
        }
        .into_activity()
        .unwrap();

        assert!(!activity.id.is_empty());
        assert_eq!(activity.status, ActivityStatus::Planned);
        assert_eq!(activity.kind, ActivityType::Activity);
        assert_eq!(activity.order, 0);
        assert!(!activity.is_break);
    }

    #[test]
    fn test_new_activity_honors_explicit_fields() {
        let activity = NewActivity {
            id: Some("act-42".to_string()),
            title: "Dinner".to_string(),
            kind: Some("meal".to_string()),
            start_time: "19:30".to_string(),
            duration: 60,
            status: Some("in-progress".to_string()),
            order: Some(3),
            ..Default::default()
        }
        .into_activity()
        .unwrap();

        assert_eq!(activity.id, "act-42");
        assert_eq!(activity.kind, ActivityType::Meal);
        assert_eq!(activity.status, ActivityStatus::InProgress);
        assert_eq!(activity.order, 3);
    }

    #[test]
    fn test_new_activity_rejects_empty_title() {
        let result = NewActivity {
            title: String::new(),
            start_time: "10:00".to_string(),
            duration: 30,
            ..Default::default()
        }
        .into_activity();
        assert!(result.is_err());
    }

    #[test]
    fn test_new_activity_rejects_bad_status() {
        let result = NewActivity {
            title: "Walk".to_string(),
            start_time: "10:00".to_string(),
            duration: 30,
            status: Some("later".to_string()),
            ..Default::default()
        }
        .into_activity();
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_activity_validate() {
        let params = PatchActivity {
            plan_id: 1,
            day_id: "d1".to_string(),
            activity_id: "a1".to_string(),
            status: Some("skipped".to_string()),
            kind: Some("travel".to_string()),
            ..Default::default()
        };
        let (status, kind) = params.validate().unwrap();
        assert_eq!(status, Some(ActivityStatus::Skipped));
        assert_eq!(kind, Some(ActivityType::Travel));
    }

    #[test]
    fn test_patch_activity_validate_invalid_status() {
        let params = PatchActivity {
            plan_id: 1,
            day_id: "d1".to_string(),
            activity_id: "a1".to_string(),
            status: Some("invalid".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PlannerError::InvalidInput { field, .. }) if field == "status"
        ));
    }
}

//! Plan summary and day progress types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus};

/// Summary information about a plan with activity statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Title of the plan
    pub title: String,
    /// Where the trip or event takes place
    pub destination: Option<String>,
    /// Plan status
    pub status: PlanStatus,
    /// First calendar date, inclusive
    pub start_date: String,
    /// Last calendar date, inclusive
    pub end_date: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Number of days in the plan
    pub total_days: u32,
    /// Total number of activities across all days
    pub total_activities: u32,
    /// Number of resolved (completed or skipped) activities
    pub completed_activities: u32,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_activities = plan.days.iter().map(|d| d.activities.len()).sum::<usize>() as u32;
        let completed_activities = plan
            .days
            .iter()
            .flat_map(|d| d.activities.iter())
            .filter(|a| a.status.is_resolved())
            .count() as u32;

        Self {
            id: plan.id,
            title: plan.title.clone(),
            destination: plan.destination.clone(),
            status: plan.status,
            start_date: plan.start_date.clone(),
            end_date: plan.end_date.clone(),
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            total_days: plan.days.len() as u32,
            total_activities,
            completed_activities,
        }
    }
}

/// Per-day completion statistics.
///
/// `completed` counts activities whose status resolves the item (completed
/// or skipped); `percentage` is rounded to the nearest integer and defined
/// as 0 for an empty day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayProgress {
    pub total: u32,
    pub completed: u32,
    pub percentage: u32,
}

//! Day model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Activity;

/// Weather annotation for a day (informational only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Short condition description, e.g. "sunny"
    pub condition: String,
    /// Temperature in the user's preferred unit
    pub temperature: f64,
}

/// One calendar date within a plan, holding an ordered activity timeline.
///
/// Days are exclusively owned by their plan: the full day set is generated
/// from the plan's date range and regenerated when that range changes.
/// `day_number` is derived from the day's position in the plan's sequence
/// at generation time, and `date` is unique within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Unique identifier for the day (opaque string)
    pub id: String,

    /// Calendar date in `YYYY-MM-DD` format
    pub date: String,

    /// 1-based sequential position within the plan
    pub day_number: u32,

    /// Optional theme title, e.g. "Beach Day"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional weather annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Ordered activity timeline
    #[serde(default)]
    pub activities: Vec<Activity>,
}

//! Plan preference configuration consumed by the scheduling engine.

use serde::{Deserialize, Serialize};

/// Preferred meal times within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealTimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
}

impl Default for MealTimes {
    fn default() -> Self {
        Self {
            breakfast: Some("08:30".to_string()),
            lunch: Some("13:00".to_string()),
            dinner: Some("19:30".to_string()),
        }
    }
}

/// Overall pacing preference for a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Packed,
}

/// Embedded configuration value present on every plan, supplying the
/// defaults the scheduling engine consumes (day bounds, meal times, break
/// cadence, pace).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreferences {
    /// Default day start, `HH:mm`
    pub wake_up_time: String,

    /// Default day end, `HH:mm`
    pub sleep_time: String,

    /// Preferred meal times
    #[serde(default)]
    pub meal_times: MealTimes,

    /// Minutes of activity between automatic breaks
    pub break_frequency: u32,

    /// Default break length in minutes
    pub break_duration: u32,

    /// Extra minutes budgeted around travel activities
    pub travel_buffer: u32,

    /// Overall pacing preference
    #[serde(default)]
    pub pace: Pace,
}

impl Default for PlanPreferences {
    fn default() -> Self {
        Self {
            wake_up_time: "08:00".to_string(),
            sleep_time: "22:00".to_string(),
            meal_times: MealTimes::default(),
            break_frequency: 120,
            break_duration: 15,
            travel_buffer: 15,
            pace: Pace::Moderate,
        }
    }
}

//! Activity model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ActivityStatus;
use crate::schedule::clock;

/// Enumerated category of an activity within a day's timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// General activity
    #[default]
    Activity,
    /// Breakfast, lunch, dinner, snack
    Meal,
    /// Transportation between places
    Travel,
    /// Break, nap, relaxation
    Rest,
    /// Shows, movies, concerts
    Entertainment,
    /// Tourist spots, landmarks
    Sightseeing,
    /// Shopping activities
    Shopping,
    /// Physical activities
    Sports,
    /// Spa, meditation, yoga
    Wellness,
    /// Meetups, gatherings
    Social,
    /// Work-related activities
    Work,
    /// User-defined
    Custom,
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activity" => Ok(ActivityType::Activity),
            "meal" => Ok(ActivityType::Meal),
            "travel" => Ok(ActivityType::Travel),
            "rest" => Ok(ActivityType::Rest),
            "entertainment" => Ok(ActivityType::Entertainment),
            "sightseeing" => Ok(ActivityType::Sightseeing),
            "shopping" => Ok(ActivityType::Shopping),
            "sports" => Ok(ActivityType::Sports),
            "wellness" => Ok(ActivityType::Wellness),
            "social" => Ok(ActivityType::Social),
            "work" => Ok(ActivityType::Work),
            "custom" => Ok(ActivityType::Custom),
            _ => Err(format!("Invalid activity type: {s}")),
        }
    }
}

impl ActivityType {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Activity => "activity",
            ActivityType::Meal => "meal",
            ActivityType::Travel => "travel",
            ActivityType::Rest => "rest",
            ActivityType::Entertainment => "entertainment",
            ActivityType::Sightseeing => "sightseeing",
            ActivityType::Shopping => "shopping",
            ActivityType::Sports => "sports",
            ActivityType::Wellness => "wellness",
            ActivityType::Social => "social",
            ActivityType::Work => "work",
            ActivityType::Custom => "custom",
        }
    }
}

/// Represents a single scheduled unit of time within a day.
///
/// `start_time` is a naive 24h `HH:mm` wall-clock string and `duration` is
/// in minutes; together they implicitly define the end time. Overlap
/// between sibling activities is detected but never enforced at write time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier for the activity (opaque, client-assigned)
    pub id: String,

    /// Brief title of the activity
    pub title: String,

    /// Detailed description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Enumerated category
    #[serde(rename = "type", default)]
    pub kind: ActivityType,

    /// Start time as a 24h `HH:mm` wall-clock string
    pub start_time: String,

    /// Duration in minutes
    pub duration: u32,

    /// Where the activity takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Estimated cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Current status of the activity
    #[serde(default)]
    pub status: ActivityStatus,

    /// Marks a rest slot inserted by the scheduling engine
    #[serde(default)]
    pub is_break: bool,

    /// Marks an activity proposed by an external suggester
    #[serde(default)]
    pub ai_suggested: bool,

    /// Position of the activity within its day (0-indexed)
    #[serde(default)]
    pub order: u32,
}

impl Activity {
    /// End time of the activity (`start_time` advanced by `duration`,
    /// wrapping at midnight).
    pub fn end_time(&self) -> String {
        clock::add_minutes(&self.start_time, i64::from(self.duration))
    }

    /// Start time expressed as minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        clock::minutes_of_day(&self.start_time)
    }
}

//! Per-day aggregation: progress statistics and free-slot discovery.

use serde::{Deserialize, Serialize};

use super::{clock, sort_by_time};
use crate::models::{Activity, DayPlan, DayProgress};

/// A contiguous span of a day, either free or occupied by an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start, `HH:mm`, inclusive
    pub start: String,
    /// Slot end, `HH:mm`, exclusive
    pub end: String,
    /// The activity occupying the slot, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
}

impl TimeSlot {
    /// True when no activity occupies the slot.
    pub fn is_free(&self) -> bool {
        self.activity.is_none()
    }
}

/// Compute completion statistics for a day.
///
/// Completed and skipped activities both count as resolved; the percentage
/// is rounded to the nearest integer and is 0 for an empty day.
pub fn day_progress(day: &DayPlan) -> DayProgress {
    let total = day.activities.len() as u32;
    let completed = day
        .activities
        .iter()
        .filter(|a| a.status.is_resolved())
        .count() as u32;

    let percentage = if total > 0 {
        ((f64::from(completed) / f64::from(total)) * 100.0).round() as u32
    } else {
        0
    };

    DayProgress {
        total,
        completed,
        percentage,
    }
}

/// Total planned minutes across a set of activities.
pub fn total_duration(activities: &[Activity]) -> u32 {
    activities.iter().map(|a| a.duration).sum()
}

/// Find free spans of at least `min_duration` minutes between activities.
///
/// The activities are sorted ascending by start time here (the forward
/// walk depends on it), and the cursor then advances from
/// `day_start` over each activity, emitting any gap of at least
/// `min_duration` plus a trailing span up to `day_end`. Overlapping
/// activities produce negative gaps, which are treated as "no gap".
pub fn find_free_slots(
    activities: &[Activity],
    day_start: &str,
    day_end: &str,
    min_duration: u32,
) -> Vec<TimeSlot> {
    let sorted = sort_by_time(activities.to_vec());

    let mut free_slots = Vec::new();
    let mut current = day_start.to_string();

    for activity in &sorted {
        let gap = clock::minutes_between(&current, &activity.start_time);
        if gap >= i64::from(min_duration) {
            free_slots.push(TimeSlot {
                start: current.clone(),
                end: activity.start_time.clone(),
                activity: None,
            });
        }
        current = activity.end_time();
    }

    let remaining = clock::minutes_between(&current, day_end);
    if remaining >= i64::from(min_duration) {
        free_slots.push(TimeSlot {
            start: current,
            end: day_end.to_string(),
            activity: None,
        });
    }

    free_slots
}

/// Build a fixed-width slot grid over a day, resolving the occupying
/// activity for each slot.
pub fn generate_time_slots(
    activities: &[Activity],
    day_start: &str,
    day_end: &str,
    slot_duration: u32,
) -> Vec<TimeSlot> {
    if slot_duration == 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = day_start.to_string();

    while clock::minutes_between(&current, day_end) > 0 {
        let slot_end = clock::add_minutes(&current, i64::from(slot_duration));
        let occupying = activities
            .iter()
            .find(|a| clock::is_in_range(&current, &a.start_time, &a.end_time()))
            .cloned();

        slots.push(TimeSlot {
            start: current,
            end: slot_end.clone(),
            activity: occupying,
        });

        current = slot_end;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityStatus, ActivityType};

    fn activity(id: &str, start_time: &str, duration: u32, status: ActivityStatus) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            kind: ActivityType::Activity,
            start_time: start_time.to_string(),
            duration,
            location: None,
            cost: None,
            status,
            is_break: false,
            ai_suggested: false,
            order: 0,
        }
    }

    fn day(activities: Vec<Activity>) -> DayPlan {
        DayPlan {
            id: "day-1".to_string(),
            date: "2024-06-01".to_string(),
            day_number: 1,
            title: None,
            weather: None,
            notes: None,
            activities,
        }
    }

    #[test]
    fn test_day_progress_empty_day() {
        let progress = day_progress(&day(vec![]));
        assert_eq!(
            progress,
            DayProgress {
                total: 0,
                completed: 0,
                percentage: 0
            }
        );
    }

    #[test]
    fn test_day_progress_counts_skipped_as_resolved() {
        let progress = day_progress(&day(vec![
            activity("a", "08:00", 30, ActivityStatus::Completed),
            activity("b", "09:00", 30, ActivityStatus::Skipped),
            activity("c", "10:00", 30, ActivityStatus::Planned),
            activity("d", "11:00", 30, ActivityStatus::InProgress),
        ]));
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.percentage, 50);
    }

    #[test]
    fn test_day_progress_rounds_percentage() {
        let progress = day_progress(&day(vec![
            activity("a", "08:00", 30, ActivityStatus::Completed),
            activity("b", "09:00", 30, ActivityStatus::Planned),
            activity("c", "10:00", 30, ActivityStatus::Planned),
        ]));
        // 1/3 rounds to 33
        assert_eq!(progress.percentage, 33);
    }

    #[test]
    fn test_find_free_slots_around_single_activity() {
        let activities = vec![activity("a", "10:00", 60, ActivityStatus::Planned)];
        let slots = find_free_slots(&activities, "08:00", "18:00", 30);

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start, "08:00");
        assert_eq!(slots[0].end, "10:00");
        assert_eq!(slots[1].start, "11:00");
        assert_eq!(slots[1].end, "18:00");
        assert!(slots.iter().all(TimeSlot::is_free));
    }

    #[test]
    fn test_find_free_slots_respects_min_duration() {
        let activities = vec![
            activity("a", "08:20", 40, ActivityStatus::Planned),
            activity("b", "09:30", 60, ActivityStatus::Planned),
        ];
        // 08:00-08:20 (20min) and 09:00-09:30 (30min) gaps; only the second
        // meets the minimum
        let slots = find_free_slots(&activities, "08:00", "10:30", 30);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, "09:00");
        assert_eq!(slots[0].end, "09:30");
    }

    #[test]
    fn test_find_free_slots_sorts_unsorted_input() {
        let activities = vec![
            activity("late", "14:00", 60, ActivityStatus::Planned),
            activity("early", "09:00", 60, ActivityStatus::Planned),
        ];
        let slots = find_free_slots(&activities, "08:00", "16:00", 30);
        let spans: Vec<(&str, &str)> = slots
            .iter()
            .map(|s| (s.start.as_str(), s.end.as_str()))
            .collect();
        assert_eq!(
            spans,
            [("08:00", "09:00"), ("10:00", "14:00"), ("15:00", "16:00")]
        );
    }

    #[test]
    fn test_find_free_slots_empty_day_is_one_slot() {
        let slots = find_free_slots(&[], "08:00", "22:00", 30);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, "08:00");
        assert_eq!(slots[0].end, "22:00");
    }

    #[test]
    fn test_generate_time_slots_resolves_occupancy() {
        let activities = vec![activity("a", "08:30", 60, ActivityStatus::Planned)];
        let slots = generate_time_slots(&activities, "08:00", "10:00", 30);

        assert_eq!(slots.len(), 4);
        assert!(slots[0].is_free());
        assert_eq!(
            slots[1].activity.as_ref().map(|a| a.id.as_str()),
            Some("a")
        );
        assert_eq!(
            slots[2].activity.as_ref().map(|a| a.id.as_str()),
            Some("a")
        );
        assert!(slots[3].is_free());
    }

    #[test]
    fn test_generate_time_slots_zero_width_yields_nothing() {
        let slots = generate_time_slots(&[], "08:00", "10:00", 0);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_total_duration() {
        let activities = vec![
            activity("a", "08:00", 45, ActivityStatus::Planned),
            activity("b", "09:00", 75, ActivityStatus::Planned),
        ];
        assert_eq!(total_duration(&activities), 120);
        assert_eq!(total_duration(&[]), 0);
    }
}

//! Activity ordering, conflict detection, compaction, and break insertion.

use uuid::Uuid;

use super::clock;
use crate::{
    error::{PlannerError, Result},
    models::{Activity, ActivityStatus, ActivityType},
};

/// Sort activities ascending by start time.
///
/// The sort is stable, so activities sharing a start time keep their
/// relative input order; `duration` and `order` are not tie-breakers.
pub fn sort_by_time(mut activities: Vec<Activity>) -> Vec<Activity> {
    activities.sort_by_key(Activity::start_minutes);
    activities
}

/// Renumber every activity's `order` field to its array position.
///
/// Position is a derived property: any write path that moves elements runs
/// this before persisting, and caller-supplied `order` values are never
/// trusted.
pub fn assign_order(mut activities: Vec<Activity>) -> Vec<Activity> {
    for (index, activity) in activities.iter_mut().enumerate() {
        activity.order = index as u32;
    }
    activities
}

/// Move the activity at `from` to position `to`, renumbering `order` to
/// 0-based contiguous positions.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` if either index is out of range;
/// the input list is returned unchanged in spirit (no partial move).
pub fn reorder(mut activities: Vec<Activity>, from: usize, to: usize) -> Result<Vec<Activity>> {
    if from >= activities.len() {
        return Err(PlannerError::invalid_input("from")
            .with_reason(format!("Index {} is out of range", from)));
    }
    if to >= activities.len() {
        return Err(
            PlannerError::invalid_input("to").with_reason(format!("Index {} is out of range", to))
        );
    }

    let moved = activities.remove(from);
    activities.insert(to, moved);
    Ok(assign_order(activities))
}

/// Find the first existing activity whose time interval overlaps the
/// candidate `[start_time, start_time + duration)` interval.
///
/// The overlap test is symmetric over half-open intervals, so back-to-back
/// activities do not conflict. The result is advisory: callers decide
/// whether to warn, and no write path ever rejects a conflicting activity.
pub fn find_conflict<'a>(
    start_time: &str,
    duration: u32,
    existing: &'a [Activity],
) -> Option<&'a Activity> {
    let candidate_end = clock::add_minutes(start_time, i64::from(duration));

    existing.iter().find(|activity| {
        let existing_end = activity.end_time();
        clock::is_in_range(start_time, &activity.start_time, &existing_end)
            || clock::is_in_range(&activity.start_time, start_time, &candidate_end)
    })
}

/// Reschedule activities to remove idle gaps.
///
/// Walks the list in existing `order`, assigning each activity's start to
/// the previous activity's end beginning at `day_start`. Durations and
/// `order` values are untouched.
pub fn compact_schedule(mut activities: Vec<Activity>, day_start: &str) -> Vec<Activity> {
    activities.sort_by_key(|a| a.order);

    let mut current = day_start.to_string();
    for activity in &mut activities {
        activity.start_time = current.clone();
        current = clock::add_minutes(&current, i64::from(activity.duration));
    }
    activities
}

/// Insert rest breaks between activities.
///
/// Walks activities in existing order accumulating elapsed minutes; once
/// the accumulated time reaches `break_frequency` and the next activity is
/// not itself a break, a synthesized rest activity is inserted before it
/// and the accumulator resets. Every element is renumbered by final
/// position.
///
/// Breaks take the start time of the activity they precede; subsequent
/// start times are not shifted. Run [`compact_schedule`] afterwards when a
/// contiguous timeline is wanted.
pub fn insert_breaks(
    activities: Vec<Activity>,
    break_frequency: u32,
    break_duration: u32,
) -> Vec<Activity> {
    let mut with_breaks: Vec<Activity> = Vec::with_capacity(activities.len());
    let mut minutes_since_break: u32 = 0;

    for mut activity in activities {
        if minutes_since_break >= break_frequency && !activity.is_break {
            with_breaks.push(Activity {
                id: format!("break-{}", Uuid::new_v4()),
                title: "Break".to_string(),
                description: None,
                kind: ActivityType::Rest,
                start_time: activity.start_time.clone(),
                duration: break_duration,
                location: None,
                cost: None,
                status: ActivityStatus::Planned,
                is_break: true,
                ai_suggested: true,
                order: with_breaks.len() as u32,
            });
            minutes_since_break = 0;
        }

        activity.order = with_breaks.len() as u32;
        minutes_since_break += activity.duration;
        with_breaks.push(activity);
    }

    with_breaks
}

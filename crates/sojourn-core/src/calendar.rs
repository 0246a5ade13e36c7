//! Plan/day lifecycle: date sequences and day-set generation.
//!
//! A plan's day list is derived entirely from its inclusive date range:
//! generated once at creation and regenerated when the range changes.
//! Regeneration preserves any existing day whose date survives the change
//! (matched by `YYYY-MM-DD` string equality) and manufactures fresh empty
//! days for newly added dates; days whose dates left the range are dropped
//! together with their activities.

use jiff::civil::Date;
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    models::DayPlan,
};

/// Generate a fresh opaque ID for an embedded day.
pub fn new_day_id() -> String {
    Uuid::new_v4().to_string()
}

fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.parse::<Date>().map_err(|e| {
        PlannerError::invalid_input(field).with_reason(format!("Invalid date '{value}': {e}"))
    })
}

/// Every calendar date from `start` to `end`, inclusive and ascending.
///
/// Equal endpoints yield exactly one date; a start after the end yields an
/// empty list (callers requiring a non-empty range must check ordering
/// themselves).
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` if either string is not a valid
/// `YYYY-MM-DD` date.
pub fn date_sequence(start: &str, end: &str) -> Result<Vec<String>> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;

    let mut dates = Vec::new();
    let mut current = start_date;
    while current <= end_date {
        dates.push(current.to_string());
        current = current
            .tomorrow()
            .map_err(|e| PlannerError::invalid_input("end_date").with_reason(e.to_string()))?;
    }

    Ok(dates)
}

/// One empty day per date, numbered 1-based by position.
pub fn create_plan_days(dates: &[String]) -> Vec<DayPlan> {
    dates
        .iter()
        .enumerate()
        .map(|(index, date)| DayPlan {
            id: new_day_id(),
            date: date.clone(),
            day_number: (index + 1) as u32,
            title: None,
            weather: None,
            notes: None,
            activities: Vec::new(),
        })
        .collect()
}

/// Rebuild a plan's day list for a new date sequence.
///
/// Days whose date appears in `new_dates` are reused as-is, keeping their
/// id and activities; the remaining dates get fresh empty days. Day numbers
/// are always reassigned to 1-based sequential position in the new order,
/// regardless of what a reused day carried before.
pub fn regenerate_days(existing: &[DayPlan], new_dates: &[String]) -> Vec<DayPlan> {
    new_dates
        .iter()
        .enumerate()
        .map(|(index, date)| {
            let mut day = existing
                .iter()
                .find(|d| &d.date == date)
                .cloned()
                .unwrap_or_else(|| DayPlan {
                    id: new_day_id(),
                    date: date.clone(),
                    day_number: 0,
                    title: None,
                    weather: None,
                    notes: None,
                    activities: Vec::new(),
                });
            day.day_number = (index + 1) as u32;
            day
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityStatus, ActivityType};

    fn activity(id: &str) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            kind: ActivityType::Activity,
            start_time: "09:00".to_string(),
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
    fn test_date_sequence_inclusive() {
        let dates = date_sequence("2024-06-01", "2024-06-03").unwrap();
        assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[test]
    fn test_date_sequence_single_day() {
        let dates = date_sequence("2024-06-01", "2024-06-01").unwrap();
        assert_eq!(dates, ["2024-06-01"]);
    }

    #[test]
    fn test_date_sequence_reversed_range_is_empty() {
        let dates = date_sequence("2024-06-03", "2024-06-01").unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_date_sequence_crosses_month_boundary() {
        let dates = date_sequence("2024-02-28", "2024-03-01").unwrap();
        assert_eq!(dates, ["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_date_sequence_rejects_malformed_dates() {
        assert!(matches!(
            date_sequence("yesterday", "2024-06-01"),
            Err(crate::PlannerError::InvalidInput { .. })
        ));
        assert!(matches!(
            date_sequence("2024-06-01", "2024-13-01"),
            Err(crate::PlannerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_create_plan_days_numbering() {
        let dates = date_sequence("2024-06-01", "2024-06-03").unwrap();
        let days = create_plan_days(&dates);

        assert_eq!(days.len(), 3);
        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.day_number, (index + 1) as u32);
            assert_eq!(day.date, dates[index]);
            assert!(day.activities.is_empty());
        }
        // ids are unique
        assert_ne!(days[0].id, days[1].id);
    }

    #[test]
    fn test_regenerate_days_preserves_matching_dates() {
        let mut days = create_plan_days(&date_sequence("2024-06-01", "2024-06-03").unwrap());
        days[1].activities = vec![activity("a"), activity("b"), activity("c")];
        let kept_id = days[1].id.clone();

        let new_dates = date_sequence("2024-06-02", "2024-06-04").unwrap();
        let regenerated = regenerate_days(&days, &new_dates);

        assert_eq!(regenerated.len(), 3);
        assert_eq!(
            regenerated.iter().map(|d| d.date.as_str()).collect::<Vec<_>>(),
            ["2024-06-02", "2024-06-03", "2024-06-04"]
        );

        // the surviving day keeps its id and activities but is renumbered
        assert_eq!(regenerated[0].id, kept_id);
        assert_eq!(regenerated[0].activities.len(), 3);
        assert_eq!(regenerated[0].day_number, 1);
        assert_eq!(regenerated[1].day_number, 2);
        assert_eq!(regenerated[2].day_number, 3);

        // the dropped date is gone
        assert!(!regenerated.iter().any(|d| d.date == "2024-06-01"));
        // the added date is fresh and empty
        assert!(regenerated[2].activities.is_empty());
    }

    #[test]
    fn test_regenerate_days_identical_range_is_preserving() {
        let mut days = create_plan_days(&date_sequence("2024-06-01", "2024-06-02").unwrap());
        days[0].activities = vec![activity("a")];

        let dates = date_sequence("2024-06-01", "2024-06-02").unwrap();
        let regenerated = regenerate_days(&days, &dates);
        assert_eq!(regenerated, days);
    }
}

//! Day scheduling operations for the Planner.
//!
//! These operations read one day of a plan, run the pure scheduling engine
//! over its activities, and (for the mutating ones) persist the result as
//! a full-array replacement. Day bounds and break cadence come from the
//! plan's preferences unless overridden.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Activity, DayPlan, DayProgress, Plan},
    params::{CompactDay, DayRef, FreeSlots, Timeline},
    schedule::{self, TimeSlot},
};

const DEFAULT_MIN_SLOT: u32 = 30;
const DEFAULT_GRID_SLOT: u32 = 30;

fn plan_and_day(db: &Database, plan_id: u64, day_id: &str) -> Result<(Plan, DayPlan)> {
    let plan = db
        .get_plan(plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: plan_id })?;
    let day = plan
        .day(day_id)
        .cloned()
        .ok_or_else(|| PlannerError::DayNotFound {
            id: day_id.to_string(),
        })?;
    Ok((plan, day))
}

impl Planner {
    /// Computes completion statistics for a day.
    pub async fn day_progress(&self, params: &DayRef) -> Result<DayProgress> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();

        let day = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_day(plan_id, &day_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(schedule::day_progress(&day))
    }

    /// Finds free spans within a day.
    ///
    /// The day bounds are the plan's wake-up and sleep preferences; the
    /// minimum slot length defaults to 30 minutes.
    pub async fn free_slots(&self, params: &FreeSlots) -> Result<Vec<TimeSlot>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let min_duration = params.min_duration.unwrap_or(DEFAULT_MIN_SLOT);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let (plan, day) = plan_and_day(&db, plan_id, &day_id)?;

            Ok(schedule::find_free_slots(
                &day.activities,
                &plan.preferences.wake_up_time,
                &plan.preferences.sleep_time,
                min_duration,
            ))
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Compacts a day's schedule, shifting each activity's start to the
    /// previous activity's end.
    ///
    /// The compacted timeline starts at `day_start` when supplied, falling
    /// back to the plan's wake-up preference.
    pub async fn compact_day(&self, params: &CompactDay) -> Result<Vec<Activity>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let day_start = params.day_start.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let (plan, day) = plan_and_day(&db, plan_id, &day_id)?;

            let start = day_start.unwrap_or_else(|| plan.preferences.wake_up_time.clone());
            let compacted = schedule::compact_schedule(day.activities, &start);

            db.replace_day_activities(plan_id, &day_id, compacted.clone())?;
            Ok(compacted)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Inserts automatic rest breaks into a day, driven by the plan's break
    /// frequency and duration preferences.
    ///
    /// Breaks take the start time of the activity they precede; run
    /// [`Planner::compact_day`] afterwards for a contiguous timeline.
    pub async fn insert_day_breaks(&self, params: &DayRef) -> Result<Vec<Activity>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let (plan, day) = plan_and_day(&db, plan_id, &day_id)?;

            let with_breaks = schedule::insert_breaks(
                day.activities,
                plan.preferences.break_frequency,
                plan.preferences.break_duration,
            );

            db.replace_day_activities(plan_id, &day_id, with_breaks.clone())?;
            Ok(with_breaks)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Builds a fixed-width slot grid over a day, resolving the occupying
    /// activity for each slot.
    pub async fn day_timeline(&self, params: &Timeline) -> Result<Vec<TimeSlot>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let slot_duration = params.slot_duration.unwrap_or(DEFAULT_GRID_SLOT);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let (plan, day) = plan_and_day(&db, plan_id, &day_id)?;

            Ok(schedule::generate_time_slots(
                &day.activities,
                &plan.preferences.wake_up_time,
                &plan.preferences.sleep_time,
                slot_duration,
            ))
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

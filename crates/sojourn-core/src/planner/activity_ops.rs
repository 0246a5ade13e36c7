//! Activity operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    display::ActivityAdded,
    error::{PlannerError, Result},
    models::{Activity, ActivityPatch},
    params::{AddActivity, DayRef, MoveActivity, PatchActivity, RemoveActivity, ReplaceActivities},
    schedule,
};

impl Planner {
    /// Adds an activity to a day, normalizing defaults first.
    ///
    /// A missing ID is generated, a missing status defaults to planned, and
    /// a missing order defaults to 0. The first overlapping sibling, if
    /// any, is returned alongside the stored activity; the overlap never
    /// blocks the write.
    pub async fn add_activity(&self, params: &AddActivity) -> Result<ActivityAdded> {
        let activity = params.activity.clone().into_activity()?;
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let day = db.get_day(plan_id, &day_id)?;

            let conflict =
                schedule::find_conflict(&activity.start_time, activity.duration, &day.activities)
                    .cloned();

            let stored = db.append_activity(plan_id, &day_id, activity)?;
            Ok(ActivityAdded {
                activity: stored,
                conflict,
            })
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a day's activities sorted by start time.
    pub async fn day_activities(&self, params: &DayRef) -> Result<Vec<Activity>> {
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

        Ok(schedule::sort_by_time(day.activities))
    }

    /// Replaces a day's entire activity list.
    ///
    /// This is the bulk-update path used for reordering and wholesale
    /// edits: `order` is reassigned from array position (caller-supplied
    /// values are never trusted) and the list is sorted by start time
    /// before it is handed to the store.
    pub async fn replace_activities(&self, params: &ReplaceActivities) -> Result<Vec<Activity>> {
        let ordered = schedule::sort_by_time(schedule::assign_order(params.activities.clone()));
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_day_activities(plan_id, &day_id, ordered.clone())?;
            Ok(ordered)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves one activity to a new position within its day, renumbering
    /// every activity's order to its new position.
    pub async fn move_activity(&self, params: &MoveActivity) -> Result<Vec<Activity>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let from_index = params.from_index;
        let to_index = params.to_index;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let day = db.get_day(plan_id, &day_id)?;

            let reordered = schedule::reorder(day.activities, from_index, to_index)?;
            db.replace_day_activities(plan_id, &day_id, reordered.clone())?;
            Ok(reordered)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Merges the supplied fields into one activity.
    pub async fn patch_activity(&self, params: &PatchActivity) -> Result<Activity> {
        let patch = ActivityPatch::try_from(params.clone())?;
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let activity_id = params.activity_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.patch_activity(plan_id, &day_id, &activity_id, &patch)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes an activity from its day.
    pub async fn remove_activity(&self, params: &RemoveActivity) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let day_id = params.day_id.clone();
        let activity_id = params.activity_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_activity(plan_id, &day_id, &activity_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

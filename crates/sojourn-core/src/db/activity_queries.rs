//! Activity mutations scoped by day and activity ID.
//!
//! These are the array-scoped document operations: each one locates the
//! day by ID inside the plan document (and the activity by ID inside the
//! day where needed), applies the mutation in memory, and writes the whole
//! document back within one transaction.

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Activity, ActivityPatch, DayPlan},
};

impl super::Database {
    /// Retrieves one day of a plan.
    pub fn get_day(&self, plan_id: u64, day_id: &str) -> Result<DayPlan> {
        let plan = self
            .get_plan(plan_id)?
            .ok_or(PlannerError::PlanNotFound { id: plan_id })?;

        plan.day(day_id)
            .cloned()
            .ok_or_else(|| PlannerError::DayNotFound {
                id: day_id.to_string(),
            })
    }

    /// Appends an activity to a day's timeline.
    pub fn append_activity(
        &mut self,
        plan_id: u64,
        day_id: &str,
        activity: Activity,
    ) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = Self::load_plan(&tx, plan_id)?;
        let day = plan.day_mut(day_id).ok_or_else(|| PlannerError::DayNotFound {
            id: day_id.to_string(),
        })?;
        day.activities.push(activity.clone());

        Self::store_plan(&tx, &plan)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(activity)
    }

    /// Replaces a day's entire activity list.
    ///
    /// Callers are expected to have renumbered and ordered the list before
    /// handing it over; the gateway stores it verbatim.
    pub fn replace_day_activities(
        &mut self,
        plan_id: u64,
        day_id: &str,
        activities: Vec<Activity>,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = Self::load_plan(&tx, plan_id)?;
        let day = plan.day_mut(day_id).ok_or_else(|| PlannerError::DayNotFound {
            id: day_id.to_string(),
        })?;
        day.activities = activities;

        Self::store_plan(&tx, &plan)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Merges the supplied fields into one activity of one day.
    pub fn patch_activity(
        &mut self,
        plan_id: u64,
        day_id: &str,
        activity_id: &str,
        patch: &ActivityPatch,
    ) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = Self::load_plan(&tx, plan_id)?;
        let day = plan.day_mut(day_id).ok_or_else(|| PlannerError::DayNotFound {
            id: day_id.to_string(),
        })?;
        let activity = day
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| PlannerError::ActivityNotFound {
                id: activity_id.to_string(),
            })?;

        patch.apply(activity);
        let updated = activity.clone();

        Self::store_plan(&tx, &plan)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Removes one activity from a day's timeline.
    pub fn remove_activity(&mut self, plan_id: u64, day_id: &str, activity_id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = Self::load_plan(&tx, plan_id)?;
        let day = plan.day_mut(day_id).ok_or_else(|| PlannerError::DayNotFound {
            id: day_id.to_string(),
        })?;

        let before = day.activities.len();
        day.activities.retain(|a| a.id != activity_id);
        if day.activities.len() == before {
            return Err(PlannerError::ActivityNotFound {
                id: activity_id.to_string(),
            });
        }

        Self::store_plan(&tx, &plan)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}

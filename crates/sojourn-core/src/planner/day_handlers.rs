//! Day handler operations that return formatted wrapper types for the Planner.

use super::Planner;
use crate::{
    display::{Activities, Slots, UpdateResult},
    error::Result,
    models::Activity,
    params::{DayRef, FreeSlots, PatchActivity, Timeline},
};

impl Planner {
    /// Handle showing a day's timeline, sorted by start time.
    pub async fn day_schedule(&self, params: &DayRef) -> Result<Activities> {
        let activities = self.day_activities(params).await?;
        Ok(Activities(activities))
    }

    /// Handle free-slot discovery, wrapped for display.
    pub async fn free_slots_display(&self, params: &FreeSlots) -> Result<Slots> {
        let slots = self.free_slots(params).await?;
        Ok(Slots(slots))
    }

    /// Handle rendering a day's fixed-width slot grid, wrapped for display.
    pub async fn day_timeline_display(&self, params: &Timeline) -> Result<Slots> {
        let slots = self.day_timeline(params).await?;
        Ok(Slots(slots))
    }

    /// Handle patching an activity, reporting which fields changed.
    pub async fn patch_activity_result(
        &self,
        params: &PatchActivity,
    ) -> Result<UpdateResult<Activity>> {
        let mut changes = Vec::new();
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if params.kind.is_some() {
            changes.push("Updated type".to_string());
        }
        if params.start_time.is_some() {
            changes.push("Updated start time".to_string());
        }
        if params.duration.is_some() {
            changes.push("Updated duration".to_string());
        }
        if params.location.is_some() {
            changes.push("Updated location".to_string());
        }
        if params.cost.is_some() {
            changes.push("Updated cost".to_string());
        }
        if let Some(status) = &params.status {
            changes.push(format!("Changed status to {status}"));
        }

        let activity = self.patch_activity(params).await?;
        Ok(UpdateResult::with_changes(activity, changes))
    }
}

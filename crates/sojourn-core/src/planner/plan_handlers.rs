//! Plan handler operations that return formatted wrapper types for the Planner.

use super::Planner;
use crate::{
    display::{CreateResult, UpdateResult},
    error::Result,
    models::{Plan, PlanFilter, PlanSummary},
    params::{CreatePlan, DeletePlan, Id, ListPlans, UpdatePlan},
};

impl Planner {
    /// Handle listing plans with optional archived filtering.
    ///
    /// Converts plans to summaries with day and activity counts for
    /// consistent list display across interfaces.
    pub async fn list_plans_summary(
        &self,
        params: &ListPlans,
    ) -> Result<crate::display::PlanSummaries> {
        let filter = Some(PlanFilter::from(params));
        let plans = self.list_plans(filter).await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(crate::display::PlanSummaries(summaries))
    }

    /// Handle showing a complete plan with all its days and activities.
    pub async fn show_plan(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle creating a new plan, wrapping the result for display.
    pub async fn create_plan_result(&self, params: &CreatePlan) -> Result<CreateResult<Plan>> {
        let plan = self.create_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle updating a plan, reporting which fields changed.
    ///
    /// The change list is derived from the supplied parameters, including
    /// whether the date-range edit caused the day set to be regenerated.
    pub async fn update_plan_result(&self, params: &UpdatePlan) -> Result<UpdateResult<Plan>> {
        let mut changes = Vec::new();
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if params.destination.is_some() {
            changes.push("Updated destination".to_string());
        }
        if let Some(status) = &params.status {
            changes.push(format!("Changed status to {status}"));
        }
        if params.start_date.is_some() || params.end_date.is_some() {
            changes.push("Changed date range; day set regenerated".to_string());
        }

        let plan = self.update_plan(params).await?;
        Ok(UpdateResult::with_changes(plan, changes))
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// Permanently removes a plan together with its embedded days and
    /// activities. This operation cannot be undone. Uses get-before-delete
    /// to return the plan details for confirmation.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the `confirmed` field is
    /// false.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<Plan>> {
        if !params.confirmed {
            return Err(crate::PlannerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
        }

        Ok(plan)
    }
}

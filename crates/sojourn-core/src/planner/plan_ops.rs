//! Plan lifecycle operations for the Planner.

use jiff::Timestamp;
use tokio::task;

use super::Planner;
use crate::{
    calendar,
    db::Database,
    error::{PlannerError, Result},
    models::{Plan, PlanFilter, PlanStatus, SharingSettings},
    params::{CreatePlan, Id, UpdatePlan},
};

impl Planner {
    /// Creates a new plan spanning an inclusive date range.
    ///
    /// The full day set is generated here, one empty day per calendar date,
    /// numbered 1-based. Preferences default when not supplied and the plan
    /// starts in draft status.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;

        let dates = calendar::date_sequence(&params.start_date, &params.end_date)?;
        if dates.is_empty() {
            return Err(PlannerError::invalid_input("start_date")
                .with_reason("Start date must not be after end date"));
        }

        let now = Timestamp::now();
        let plan = Plan {
            id: 0,
            title: params.title.clone(),
            description: params.description.clone(),
            destination: params.destination.clone(),
            status: PlanStatus::Draft,
            start_date: params.start_date.clone(),
            end_date: params.end_date.clone(),
            days: calendar::create_plan_days(&dates),
            preferences: params.preferences.clone().unwrap_or_default(),
            sharing: SharingSettings::default(),
            created_at: now,
            updated_at: now,
        };

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&plan)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all plans with optional filtering, most recently updated
    /// first.
    pub async fn list_plans(&self, filter: Option<PlanFilter>) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(filter.as_ref())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to a plan.
    ///
    /// Only supplied fields are merged. When either date changes, the day
    /// set is regenerated: days whose dates remain in range keep their
    /// activities and IDs, newly added dates get fresh empty days, and
    /// departed dates are dropped together with their activities.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Plan> {
        let status = params.validate()?;
        let params = params.clone();
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut plan = db
                .get_plan(params.id)?
                .ok_or(PlannerError::PlanNotFound { id: params.id })?;

            if let Some(title) = params.title {
                if title.trim().is_empty() {
                    return Err(
                        PlannerError::invalid_input("title").with_reason("Title is required")
                    );
                }
                plan.title = title;
            }
            if let Some(description) = params.description {
                plan.description = Some(description);
            }
            if let Some(destination) = params.destination {
                plan.destination = Some(destination);
            }
            if let Some(status) = status {
                plan.status = status;
            }

            let new_start = params
                .start_date
                .unwrap_or_else(|| plan.start_date.clone());
            let new_end = params.end_date.unwrap_or_else(|| plan.end_date.clone());
            if new_start != plan.start_date || new_end != plan.end_date {
                let dates = calendar::date_sequence(&new_start, &new_end)?;
                if dates.is_empty() {
                    return Err(PlannerError::invalid_input("start_date")
                        .with_reason("Start date must not be after end date"));
                }
                plan.days = calendar::regenerate_days(&plan.days, &dates);
                plan.start_date = new_start;
                plan.end_date = new_end;
            }

            db.update_plan(&plan)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a plan and all its embedded days and activities.
    /// This operation cannot be undone.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

//! Tests for the planner module.

use tempfile::TempDir;

use super::*;
use crate::{
    params::{AddActivity, CreatePlan, DeletePlan, Id, ListPlans, NewActivity, UpdatePlan},
    PlannerError,
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn create_params(title: &str, start: &str, end: &str) -> CreatePlan {
    CreatePlan {
        title: title.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_plan_generates_day_per_date() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Trip", "2024-06-01", "2024-06-03"))
        .await
        .expect("Failed to create plan");

    assert_eq!(plan.days.len(), 3);
    assert_eq!(plan.days[0].date, "2024-06-01");
    assert_eq!(plan.days[2].date, "2024-06-03");
    assert_eq!(plan.days[0].day_number, 1);
    assert_eq!(plan.days[2].day_number, 3);
    assert!(plan.days.iter().all(|d| d.activities.is_empty()));
}

#[tokio::test]
async fn test_create_plan_rejects_reversed_range() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .create_plan(&create_params("Trip", "2024-06-03", "2024-06-01"))
        .await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_list_plans_summary_counts_activities() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Trip", "2024-06-01", "2024-06-01"))
        .await
        .expect("Failed to create plan");

    planner
        .add_activity(&AddActivity {
            plan_id: plan.id,
            day_id: plan.days[0].id.clone(),
            activity: NewActivity {
                title: "Walk".to_string(),
                start_time: "09:00".to_string(),
                duration: 60,
                ..Default::default()
            },
        })
        .await
        .expect("Failed to add activity");

    let summaries = planner
        .list_plans_summary(&ListPlans { archived: false })
        .await
        .expect("Failed to list plan summaries");

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Trip");
    assert_eq!(summaries[0].total_days, 1);
    assert_eq!(summaries[0].total_activities, 1);
    assert_eq!(summaries[0].completed_activities, 0);
}

#[tokio::test]
async fn test_list_plans_summary_archived_filter() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Old Trip", "2024-06-01", "2024-06-01"))
        .await
        .expect("Failed to create plan");

    planner
        .update_plan(&UpdatePlan {
            id: plan.id,
            status: Some("archived".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to archive plan");

    let archived = planner
        .list_plans_summary(&ListPlans { archived: true })
        .await
        .expect("Failed to list archived plans");
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].title, "Old Trip");

    let active = planner
        .list_plans_summary(&ListPlans { archived: false })
        .await
        .expect("Failed to list active plans");
    assert!(active.is_empty());
}

#[tokio::test]
async fn test_show_plan_missing_is_none() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.show_plan(&Id { id: 999 }).await.expect("query failed");
    assert!(plan.is_none());
}

#[tokio::test]
async fn test_update_plan_result_reports_changes() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Trip", "2024-06-01", "2024-06-02"))
        .await
        .expect("Failed to create plan");

    let result = planner
        .update_plan_result(&UpdatePlan {
            id: plan.id,
            title: Some("Renamed Trip".to_string()),
            status: Some("active".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update plan");

    assert_eq!(result.resource.title, "Renamed Trip");
    assert!(result.changes.iter().any(|c| c == "Updated title"));
    assert!(result.changes.iter().any(|c| c.contains("active")));
}

#[tokio::test]
async fn test_delete_plan_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&create_params("Trip", "2024-06-01", "2024-06-01"))
        .await
        .expect("Failed to create plan");

    let unconfirmed = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        unconfirmed,
        Err(PlannerError::InvalidInput { field, .. }) if field == "confirmed"
    ));

    // still there
    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("query failed")
        .is_some());

    let deleted = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan");
    assert_eq!(deleted.map(|p| p.id), Some(plan.id));

    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("query failed")
        .is_none());
}

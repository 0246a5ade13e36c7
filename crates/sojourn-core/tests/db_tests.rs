use jiff::Timestamp;
use sojourn_core::{
    calendar,
    models::SharingSettings,
    Activity, ActivityPatch, ActivityStatus, ActivityType, Database, Plan, PlanFilter,
    PlanPreferences, PlanStatus, PlannerError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn build_plan(title: &str, start: &str, end: &str) -> Plan {
    let dates = calendar::date_sequence(start, end).expect("valid dates");
    let now = Timestamp::now();
    Plan {
        id: 0,
        title: title.to_string(),
        description: None,
        destination: None,
        status: PlanStatus::Draft,
        start_date: start.to_string(),
        end_date: end.to_string(),
        days: calendar::create_plan_days(&dates),
        preferences: PlanPreferences::default(),
        sharing: SharingSettings::default(),
        created_at: now,
        updated_at: now,
    }
}

fn build_activity(id: &str, start_time: &str, duration: u32) -> Activity {
    Activity {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        kind: ActivityType::Activity,
        start_time: start_time.to_string(),
        duration,
        location: None,
        cost: None,
        status: ActivityStatus::Planned,
        is_break: false,
        ai_suggested: false,
        order: 0,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_create_and_get_plan_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_plan(&build_plan("Round Trip", "2024-06-01", "2024-06-03"))
        .expect("Failed to create plan");
    assert!(created.id > 0);
    assert_eq!(created.days.len(), 3);

    let fetched = db
        .get_plan(created.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(fetched, created);
}

#[test]
fn test_get_plan_missing_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_plan(42).expect("query failed").is_none());
}

#[test]
fn test_list_plans_excludes_archived_by_default() {
    let (_temp_file, mut db) = create_test_db();

    let mut keep = db
        .create_plan(&build_plan("Keep", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    keep.status = PlanStatus::Active;
    db.update_plan(&keep).expect("Failed to update plan");

    let mut archive = db
        .create_plan(&build_plan("Archive", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    archive.status = PlanStatus::Archived;
    db.update_plan(&archive).expect("Failed to update plan");

    let active = db
        .list_plans(Some(&PlanFilter::default()))
        .expect("Failed to list plans");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Keep");

    let archived_only = db
        .list_plans(Some(&PlanFilter {
            status: Some(PlanStatus::Archived),
            include_archived: true,
        }))
        .expect("Failed to list plans");
    assert_eq!(archived_only.len(), 1);
    assert_eq!(archived_only[0].title, "Archive");
}

#[test]
fn test_list_plans_orders_by_most_recent_update() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .create_plan(&build_plan("First", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    let _second = db
        .create_plan(&build_plan("Second", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");

    // Touch the first plan so it becomes the most recently updated
    db.update_plan(&first).expect("Failed to update plan");

    let plans = db.list_plans(None).expect("Failed to list plans");
    assert_eq!(plans[0].title, "First");
}

#[test]
fn test_update_plan_missing_is_not_found() {
    let (_temp_file, mut db) = create_test_db();

    let mut plan = build_plan("Ghost", "2024-06-01", "2024-06-01");
    plan.id = 99;
    assert!(matches!(
        db.update_plan(&plan),
        Err(PlannerError::PlanNotFound { id: 99 })
    ));
}

#[test]
fn test_delete_plan() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Doomed", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");

    db.delete_plan(plan.id).expect("Failed to delete plan");
    assert!(db.get_plan(plan.id).expect("query failed").is_none());

    assert!(matches!(
        db.delete_plan(plan.id),
        Err(PlannerError::PlanNotFound { .. })
    ));
}

#[test]
fn test_append_activity_and_get_day() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-02"))
        .expect("Failed to create plan");
    let day_id = plan.days[0].id.clone();

    db.append_activity(plan.id, &day_id, build_activity("walk", "09:00", 60))
        .expect("Failed to append activity");

    let day = db.get_day(plan.id, &day_id).expect("Failed to get day");
    assert_eq!(day.activities.len(), 1);
    assert_eq!(day.activities[0].id, "walk");

    // the sibling day is untouched
    let other = db
        .get_day(plan.id, &plan.days[1].id)
        .expect("Failed to get day");
    assert!(other.activities.is_empty());
}

#[test]
fn test_append_activity_unknown_day() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");

    let result = db.append_activity(plan.id, "nope", build_activity("walk", "09:00", 60));
    assert!(matches!(result, Err(PlannerError::DayNotFound { .. })));
}

#[test]
fn test_get_day_unknown_plan() {
    let (_temp_file, db) = create_test_db();
    assert!(matches!(
        db.get_day(7, "whatever"),
        Err(PlannerError::PlanNotFound { id: 7 })
    ));
}

#[test]
fn test_replace_day_activities() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    let day_id = plan.days[0].id.clone();

    db.append_activity(plan.id, &day_id, build_activity("old", "09:00", 60))
        .expect("Failed to append activity");

    db.replace_day_activities(
        plan.id,
        &day_id,
        vec![
            build_activity("new-1", "10:00", 30),
            build_activity("new-2", "11:00", 30),
        ],
    )
    .expect("Failed to replace activities");

    let day = db.get_day(plan.id, &day_id).expect("Failed to get day");
    let ids: Vec<&str> = day.activities.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["new-1", "new-2"]);
}

#[test]
fn test_patch_activity_merges_fields() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    let day_id = plan.days[0].id.clone();

    db.append_activity(plan.id, &day_id, build_activity("walk", "09:00", 60))
        .expect("Failed to append activity");

    let patch = ActivityPatch {
        status: Some(ActivityStatus::Completed),
        duration: Some(45),
        ..Default::default()
    };
    let updated = db
        .patch_activity(plan.id, &day_id, "walk", &patch)
        .expect("Failed to patch activity");

    assert_eq!(updated.status, ActivityStatus::Completed);
    assert_eq!(updated.duration, 45);
    assert_eq!(updated.start_time, "09:00");

    let day = db.get_day(plan.id, &day_id).expect("Failed to get day");
    assert_eq!(day.activities[0].status, ActivityStatus::Completed);
}

#[test]
fn test_patch_activity_unknown_activity() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    let day_id = plan.days[0].id.clone();

    let result = db.patch_activity(plan.id, &day_id, "ghost", &ActivityPatch::default());
    assert!(matches!(result, Err(PlannerError::ActivityNotFound { .. })));
}

#[test]
fn test_remove_activity() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_plan(&build_plan("Trip", "2024-06-01", "2024-06-01"))
        .expect("Failed to create plan");
    let day_id = plan.days[0].id.clone();

    db.append_activity(plan.id, &day_id, build_activity("walk", "09:00", 60))
        .expect("Failed to append activity");
    db.append_activity(plan.id, &day_id, build_activity("lunch", "12:00", 45))
        .expect("Failed to append activity");

    db.remove_activity(plan.id, &day_id, "walk")
        .expect("Failed to remove activity");

    let day = db.get_day(plan.id, &day_id).expect("Failed to get day");
    assert_eq!(day.activities.len(), 1);
    assert_eq!(day.activities[0].id, "lunch");

    assert!(matches!(
        db.remove_activity(plan.id, &day_id, "walk"),
        Err(PlannerError::ActivityNotFound { .. })
    ));
}

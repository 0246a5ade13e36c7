//! Core library for the Sojourn day planning application.
//!
//! This crate provides the core business logic for managing plans, days,
//! and activities: a pure scheduling engine (time arithmetic, conflict
//! detection, compaction, automatic breaks, progress aggregation), the
//! plan/day lifecycle, document-store persistence, data models, and error
//! handling.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): plans own embedded days, days own
//!   embedded activities; all mutation flows through the owning plan
//!   document
//! - **Scheduling Engine** ([`schedule`]): pure functions over activity
//!   lists; no I/O and no shared state
//! - **Lifecycle** ([`calendar`]): date sequences and day-set
//!   (re)generation from a plan's inclusive date range
//! - **Persistence Gateway** ([`db`]): a single-table SQLite document
//!   store; each mutation is a transactional read-modify-write of one plan
//!   document
//! - **Display** ([`display`]): markdown formatting via Display impls and
//!   wrapper types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sojourn_core::{params::{AddActivity, CreatePlan, NewActivity}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()
//!     .await?;
//!
//! // Create a plan; one empty day is generated per calendar date
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Lisbon Getaway".to_string(),
//!         destination: Some("Lisbon".to_string()),
//!         start_date: "2024-06-01".to_string(),
//!         end_date: "2024-06-03".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Add an activity to the first day; overlaps are reported, not blocked
//! let added = planner
//!     .add_activity(&AddActivity {
//!         plan_id: plan.id,
//!         day_id: plan.days[0].id.clone(),
//!         activity: NewActivity {
//!             title: "Tram 28".to_string(),
//!             start_time: "10:00".to_string(),
//!             duration: 60,
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//! assert!(added.conflict.is_none());
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Activities, ActivityAdded, CreateResult, DeleteResult, OperationStatus, PlanSummaries, Slots,
    UpdateResult,
};
pub use error::{PlannerError, Result};
pub use models::{
    Activity, ActivityPatch, ActivityStatus, ActivityType, DayPlan, DayProgress, Plan, PlanFilter,
    PlanPreferences, PlanStatus, PlanSummary,
};
pub use params::{
    AddActivity, CompactDay, CreatePlan, DayRef, DeletePlan, FreeSlots, Id, ListPlans,
    MoveActivity, NewActivity, PatchActivity, RemoveActivity, ReplaceActivities, Timeline,
    UpdatePlan,
};
pub use planner::{Planner, PlannerBuilder};
pub use schedule::TimeSlot;

//! High-level planner API for managing plans, days, and activities.
//!
//! This module provides the main [`Planner`] interface for the Sojourn day
//! planning system. The planner acts as the central coordinator between
//! the application layers and the document store, implementing the
//! business logic for plan lifecycle, activity mutation, and day
//! scheduling operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  Document Store │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│    (via db/)    │
//! │  day_handlers)  │    │  activity_ops,  │    │                 │
//! │                 │    │  day_ops)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with
//!   configuration
//! - [`plan_handlers`]: High-level plan operations returning display
//!   wrappers (list, create, update, delete)
//! - [`day_handlers`]: High-level day operations returning display
//!   wrappers (timeline, free slots)
//! - [`plan_ops`]: Plan lifecycle operations (create with day generation,
//!   partial update with day regeneration, delete)
//! - [`activity_ops`]: Activity mutations (add with conflict advisory,
//!   bulk replace, move, patch, remove)
//! - [`day_ops`]: Day scheduling operations (progress, free slots,
//!   compaction, automatic breaks, slot grid)
//!
//! ## Design Principles
//!
//! 1. **Async First**: All operations are async; blocking store access
//!    runs on the blocking thread pool
//! 2. **Validate Before Writing**: Parameter validation and not-found
//!    checks happen before any mutation, so failed operations leave the
//!    store untouched
//! 3. **Pure Engine, Impure Edges**: Scheduling logic lives in
//!    [`crate::schedule`] as pure functions; this layer feeds it store
//!    data and persists the results
//! 4. **Advisory Conflicts**: Overlap detection is surfaced, never
//!    enforced
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use sojourn_core::{params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Lisbon Getaway".to_string(),
//!         destination: Some("Lisbon".to_string()),
//!         start_date: "2024-06-01".to_string(),
//!         end_date: "2024-06-03".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(plan.days.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod activity_ops;
pub mod builder;
pub mod day_handlers;
pub mod day_ops;
pub mod plan_handlers;
pub mod plan_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing plans, days, and activities.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

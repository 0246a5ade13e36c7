//! Display formatting functions and result types.
//!
//! This module provides helper functions for formatting collections and
//! wrapper types for operation results, enabling consistent formatting
//! across different output contexts (lists, operations, etc.).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! The Display architecture combines direct Display implementations on
//! domain models with wrapper types for collections and operation results.
//! This approach provides both idiomatic Rust patterns and context-specific
//! formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Plan, DayPlan, │───▶│ & Result Types  │───▶│    Output       │
//! │  Activity)      │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, Activities,
//!   Slots)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, ActivityAdded)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Design Principles
//!
//! 1. **Markdown Output**: All formatters produce markdown for rich
//!    terminal display
//! 2. **Separation of Concerns**: Business logic in models, presentation in
//!    wrappers
//! 3. **Consistent Structure**: Headers, metadata, timeline lines follow
//!    standard patterns

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Activities, PlanSummaries, Slots};
pub use datetime::{LocalDateTime, ShortDate};
pub use results::{ActivityAdded, CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

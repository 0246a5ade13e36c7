//! The timeline scheduling engine.
//!
//! Pure, synchronous functions over activity lists: wall-clock arithmetic,
//! ordering, conflict detection, schedule compaction, automatic break
//! insertion, and per-day aggregation. Every function here is a
//! referentially transparent transform from input values to output values;
//! no I/O, no shared state. Persistence of the results is the
//! [`crate::planner`] layer's concern.
//!
//! Times are naive 24h `HH:mm` strings with no timezone. The arithmetic in
//! [`clock`] does not validate them: callers pass well-formed strings, and
//! malformed input yields unspecified (but non-panicking) results.

pub mod aggregate;
pub mod arrange;
pub mod clock;

pub use aggregate::{day_progress, find_free_slots, generate_time_slots, total_duration, TimeSlot};
pub use arrange::{
    assign_order, compact_schedule, find_conflict, insert_breaks, reorder, sort_by_time,
};

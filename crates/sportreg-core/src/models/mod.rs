//! Data models for workouts, plans, and their stored record forms.
//!
//! The core domain models of the workout tracking system. A stored record
//! is one of two variants — a bare [`Workout`] or a multi-day [`Plan`] —
//! distinguished by an explicit discriminator ([`record::KIND_FIELD`])
//! rather than by probing for field presence. The [`Occurrence`] type is
//! the normalized, dated unit both variants flatten into.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation logic.

pub mod exercise;
pub mod filters;
pub mod occurrence;
pub mod plan;
pub mod record;
pub mod workout;


// Re-export all public types at the models level
pub use exercise::{DurationUnit, Exercise, Instrument, Reps};
pub use filters::{RecordFilter, SortOrder};
pub use occurrence::Occurrence;
pub use plan::{Plan, PlanDay};
pub use record::{Record, RecordKind};
pub use workout::Workout;

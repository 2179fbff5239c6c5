//! High-level tracker API for managing workout history.
//!
//! This module provides the main [`Tracker`] interface for the workout
//! tracking system. The tracker coordinates between the outer layers and
//! the store, wiring the pure normalization core
//! ([`crate::normalize`]) to stored records.
//!
//! Each operation is request-scoped: a synchronous read, a pure compute
//! step, and an optional write, hopping to a blocking task for SQLite
//! work. There is no shared mutable state between operations and no
//! locking; two concurrent re-schedules for the same user can both clone
//! the same completed record. That window is accepted rather than guarded.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sportreg_core::{params::PendingWorkouts, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new().build().await?;
//!
//! let pending = tracker
//!     .pending_workouts(&PendingWorkouts {
//!         username: "alice".to_string(),
//!     })
//!     .await?;
//! for occurrence in &pending {
//!     println!("{}: {} exercises", occurrence.date, occurrence.exercises.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

pub mod builder;
pub mod plan_ops;
pub mod report_ops;
pub mod workout_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface for managing workout history.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) timezone: TimeZone,
}

impl Tracker {
    /// Creates a new tracker with the given database path and reference
    /// timezone.
    pub(crate) fn new(db_path: PathBuf, timezone: TimeZone) -> Self {
        Self { db_path, timezone }
    }

    /// The current date in the reference timezone. Used only as the
    /// default for caller-omitted reschedule dates.
    pub(crate) fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.timezone.clone()).date()
    }
}

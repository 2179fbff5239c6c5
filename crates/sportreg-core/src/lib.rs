//! Core library for the Sportreg workout tracking application.
//!
//! This crate provides the core business logic for tracking workout
//! history: the workout/plan value models, the normalization core that
//! flattens multi-day plans into dated occurrences and clones completed
//! records for re-scheduling, the document-store adapter, and the
//! markdown report formatting.
//!
//! # Record Model
//!
//! A user's partition holds two record variants: bare [`models::Workout`]
//! sessions and multi-day [`models::Plan`] records whose day offsets are
//! resolved against an anchor date. The [`normalize`] module merges both
//! variants into one dated [`models::Occurrence`] view and builds the
//! clone-and-reset records used for re-scheduling; it is pure and never
//! mutates stored data.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use sportreg_core::{
//!     models::{Exercise, Reps, Workout},
//!     params::{InsertWorkout, PendingWorkouts},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Store a workout for a user
//! let params = InsertWorkout {
//!     username: "alice".to_string(),
//!     workout: Workout {
//!         date: date(2024, 1, 5),
//!         exercises: vec![Exercise {
//!             name: "squat".to_string(),
//!             sets: 5,
//!             reps: Reps::Count(5),
//!             instruments: None,
//!             rest_minutes: "3".to_string(),
//!             instruction: None,
//!             comments: None,
//!         }],
//!         completed: false,
//!         post_workout_comments: None,
//!     },
//! };
//! let id = tracker.insert_workout(&params).await?;
//! println!("stored workout {id}");
//!
//! // List the user's pending occurrences
//! let pending = tracker
//!     .pending_workouts(&PendingWorkouts {
//!         username: "alice".to_string(),
//!     })
//!     .await?;
//! for occurrence in &pending {
//!     println!("{}", occurrence.date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod normalize;
pub mod params;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use display::{InsertResult, Language, Occurrences, Report, RescheduleResult};
pub use error::{Result, TrackerError};
pub use models::{
    Exercise, Instrument, Occurrence, Plan, PlanDay, Record, RecordFilter, RecordKind, Reps,
    SortOrder, Workout,
};
pub use store::Store;
pub use tracker::{Tracker, TrackerBuilder};

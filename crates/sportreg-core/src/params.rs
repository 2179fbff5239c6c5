//! Parameter structures for tracker operations.
//!
//! Shared, interface-agnostic parameter structures passed from the outer
//! layers (CLI today, anything else tomorrow) into the core. Each carries
//! the username the operation is scoped to — the storage partition key —
//! and nothing framework-specific, so interface layers can wrap them with
//! their own derives and convert via `From`/`Into`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Plan, Workout};

/// Parameters for inserting a new workout record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertWorkout {
    /// Storage partition key
    pub username: String,
    /// The workout to store
    pub workout: Workout,
}

/// Parameters for inserting a new plan record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPlan {
    /// Storage partition key
    pub username: String,
    /// The plan to store
    pub plan: Plan,
}

/// Parameters for the merged pending-occurrences view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingWorkouts {
    /// Storage partition key
    pub username: String,
}

/// Parameters for the last-completed lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LastCompleted {
    /// Storage partition key
    pub username: String,
}

/// Parameters for re-scheduling the most recent completed record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reschedule {
    /// Storage partition key
    pub username: String,
    /// Date for the new pending record; defaults to the current date in
    /// the tracker's reference timezone
    pub date: Option<Date>,
}

/// Parameters for rendering the history report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Storage partition key
    pub username: String,
    /// Two-letter report language code (`es` or `en`)
    pub lang: String,
}

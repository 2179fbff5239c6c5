//! Dated occurrence model: the unit of schedulable work.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Exercise, PlanDay, Workout};

/// One dated, schedulable unit of exercise work.
///
/// Either a standalone workout or one flattened day of a plan. A flattened
/// day carries a concrete calendar date; the `day` offset it came from is
/// resolved exactly once, at flatten time, and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Occurrence {
    /// Resolved calendar date
    pub date: Date,

    /// Exercises in prescribed performance order
    pub exercises: Vec<Exercise>,

    /// Whether the occurrence has been performed
    pub completed: bool,

    /// Post-session remarks; always absent for flattened plan days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_workout_comments: Option<String>,
}

impl From<Workout> for Occurrence {
    fn from(workout: Workout) -> Self {
        Self {
            date: workout.date,
            exercises: workout.exercises,
            completed: workout.completed,
            post_workout_comments: workout.post_workout_comments,
        }
    }
}

impl Occurrence {
    /// Build an occurrence from a plan day and its resolved date. The day
    /// offset is dropped here and never travels further.
    pub fn from_plan_day(day: PlanDay, date: Date) -> Self {
        Self {
            date,
            exercises: day.exercises,
            completed: day.completed,
            post_workout_comments: None,
        }
    }
}

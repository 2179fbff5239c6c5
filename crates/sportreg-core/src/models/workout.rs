//! Workout model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Exercise;
use crate::error::Result;

/// One dated training session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Calendar date of the session. Only day resolution is meaningful;
    /// there are no time-of-day semantics.
    pub date: Date,

    /// Exercises in prescribed performance order
    pub exercises: Vec<Exercise>,

    /// Whether the session has been performed
    #[serde(default)]
    pub completed: bool,

    /// Remarks recorded after the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_workout_comments: Option<String>,
}

impl Workout {
    /// Validate every exercise prescription in the session.
    pub fn validate(&self) -> Result<()> {
        for exercise in &self.exercises {
            exercise.validate()?;
        }
        Ok(())
    }
}

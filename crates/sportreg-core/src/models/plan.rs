//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Exercise;
use crate::error::{Result, TrackerError};

/// One day-indexed workout inside a plan.
///
/// `day` is a 1-based offset from the plan's anchor date: day 1 is the
/// anchor date itself, day N is anchor + (N - 1) calendar days. The offset
/// is resolved to a concrete date exactly once, when the plan is flattened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDay {
    /// 1-based offset from the plan's anchor date
    pub day: i64,

    /// Exercises in prescribed performance order
    pub exercises: Vec<Exercise>,

    /// Whether this day's session has been performed
    #[serde(default)]
    pub completed: bool,
}

/// A multi-day training plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Anchor date the day offsets are resolved against
    pub date: Date,

    /// Day-records in input order; not guaranteed to be day-sorted
    pub plan: Vec<PlanDay>,

    /// Guidance covering the whole plan. Older schema revisions stored
    /// this as `general_comments`; both names deserialize into this field.
    #[serde(
        default,
        alias = "general_comments",
        skip_serializing_if = "Option::is_none"
    )]
    pub general_instructions: Option<String>,

    /// Remarks recorded after the plan finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_plan_comments: Option<String>,
}

impl Plan {
    /// Validate every day-record: offsets must be 1-based and every
    /// exercise prescription well-formed. Duplicate `day` values are
    /// allowed; each one is tracked as its own occurrence.
    pub fn validate(&self) -> Result<()> {
        for day in &self.plan {
            if day.day < 1 {
                return Err(TrackerError::InvalidDay { day: day.day });
            }
            for exercise in &day.exercises {
                exercise.validate()?;
            }
        }
        Ok(())
    }
}

//! Stored record variants and the discriminator that separates them.

use std::str::FromStr;

use jiff::civil::Date;
use serde_json::Value;

use super::{Plan, Workout};
use crate::error::{Result, TrackerError};

/// Name of the discriminator field on a stored document.
pub const KIND_FIELD: &str = "type";

/// Discriminator value marking the plan variant.
pub const PLAN_KIND: &str = "plan";

/// Type-safe enumeration of stored record kinds.
///
/// On the wire, a bare workout has no discriminator field at all; only the
/// plan variant carries `type: "plan"`. This enum is the queryable form of
/// that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A bare workout session (the default variant, no discriminator)
    Workout,

    /// A multi-day plan (`type: "plan"`)
    Plan,
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workout" => Ok(RecordKind::Workout),
            "plan" => Ok(RecordKind::Plan),
            _ => Err(format!("Invalid record kind: {s}")),
        }
    }
}

impl RecordKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Workout => "workout",
            RecordKind::Plan => PLAN_KIND,
        }
    }
}

/// A raw stored record: either a bare workout or a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Workout(Workout),
    Plan(Plan),
}

impl Record {
    /// Decode a stored document, dispatching on the discriminator field.
    ///
    /// Absence of the field selects the workout variant; `"plan"` selects
    /// the plan variant; any other value is rejected rather than probed
    /// for a matching shape.
    pub fn from_document(document: Value) -> Result<Self> {
        let kind = match document.get(KIND_FIELD) {
            None => None,
            Some(value) => Some(
                value
                    .as_str()
                    .ok_or_else(|| TrackerError::UnknownRecordKind {
                        kind: value.to_string(),
                    })?
                    .to_string(),
            ),
        };

        match kind.as_deref() {
            None => Ok(Record::Workout(serde_json::from_value(document)?)),
            Some(PLAN_KIND) => Ok(Record::Plan(serde_json::from_value(document)?)),
            Some(other) => Err(TrackerError::UnknownRecordKind {
                kind: other.to_string(),
            }),
        }
    }

    /// Encode the record as a stored document, attaching the discriminator
    /// to the plan variant.
    pub fn to_document(&self) -> Result<Value> {
        match self {
            Record::Workout(workout) => Ok(serde_json::to_value(workout)?),
            Record::Plan(plan) => {
                let mut document = serde_json::to_value(plan)?;
                if let Value::Object(ref mut fields) = document {
                    fields.insert(KIND_FIELD.into(), Value::String(PLAN_KIND.into()));
                }
                Ok(document)
            }
        }
    }

    /// The record's calendar date: session date or plan anchor date.
    pub fn date(&self) -> Date {
        match self {
            Record::Workout(workout) => workout.date,
            Record::Plan(plan) => plan.date,
        }
    }

    /// The record's kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Workout(_) => RecordKind::Workout,
            Record::Plan(_) => RecordKind::Plan,
        }
    }

    /// The stored completion flag, for the query projection. Plans have no
    /// stored flag; their completion is derived from the day-records.
    pub fn completed_flag(&self) -> Option<bool> {
        match self {
            Record::Workout(workout) => Some(workout.completed),
            Record::Plan(_) => None,
        }
    }
}

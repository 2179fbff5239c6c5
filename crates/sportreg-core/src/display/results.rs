//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Plan, Workout};

/// Wrapper type for displaying the result of insert operations.
///
/// Echoes the generated record id back to the caller together with the
/// stored record, formatted as markdown.
pub struct InsertResult<T> {
    pub id: u64,
    pub resource: T,
}

impl<T> InsertResult<T> {
    /// Create a new InsertResult wrapper.
    pub fn new(id: u64, resource: T) -> Self {
        Self { id, resource }
    }
}

impl fmt::Display for InsertResult<Workout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout inserted successfully (ID: {})", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for InsertResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan inserted successfully (ID: {})", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of re-schedule operations.
pub struct RescheduleResult<T> {
    pub id: u64,
    pub resource: T,
}

impl<T> RescheduleResult<T> {
    /// Create a new RescheduleResult wrapper.
    pub fn new(id: u64, resource: T) -> Self {
        Self { id, resource }
    }
}

impl fmt::Display for RescheduleResult<Workout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout scheduled again (ID: {})", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for RescheduleResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan scheduled again (ID: {})", self.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

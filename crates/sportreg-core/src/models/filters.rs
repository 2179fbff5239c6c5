//! Filter types for querying stored records.

use super::RecordKind;

/// Field-equality filter for record queries.
///
/// Mirrors the store contract: a set of simple equality predicates, e.g.
/// "completed is false" or "kind is plan". Plans store no completion flag,
/// so a `completed` predicate never matches them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    /// Filter by stored completion flag
    pub completed: Option<bool>,

    /// Filter by record kind
    pub kind: Option<RecordKind>,
}

impl RecordFilter {
    /// Filter matching pending (not yet completed) workouts.
    pub fn pending_workouts() -> Self {
        Self {
            completed: Some(false),
            kind: Some(RecordKind::Workout),
        }
    }

    /// Filter matching completed workouts.
    pub fn completed_workouts() -> Self {
        Self {
            completed: Some(true),
            kind: Some(RecordKind::Workout),
        }
    }

    /// Filter matching plan records.
    pub fn plans() -> Self {
        Self {
            completed: None,
            kind: Some(RecordKind::Plan),
        }
    }
}

/// Sort direction for the record date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Newest first
    Descending,
}

impl SortOrder {
    /// SQL keyword for the direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

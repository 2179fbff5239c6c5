//! Display formatting for tracker output.
//!
//! Markdown formatting split the same way the data flows: `Display`
//! impls on the domain models for standalone output, newtype wrappers
//! for collections and operation results, and the language-aware history
//! report. All formatters produce markdown suitable for the terminal
//! renderer in the CLI crate.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::Occurrences;
pub use datetime::DayMonthYear;
pub use report::{Language, Report};
pub use results::{InsertResult, RescheduleResult};

//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Occurrence;

/// Newtype wrapper for displaying a list of pending occurrences.
///
/// Formats each occurrence with its own heading block and handles the
/// empty list gracefully.
pub struct Occurrences(pub Vec<Occurrence>);

impl Occurrences {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of occurrences in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the occurrences.
    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.0.iter()
    }
}

impl IntoIterator for Occurrences {
    type Item = Occurrence;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No pending workouts.")
        } else {
            for occurrence in &self.0 {
                writeln!(f, "{occurrence}")?;
            }
            Ok(())
        }
    }
}

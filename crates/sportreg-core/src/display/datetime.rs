//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that formats as `dd/mm/yyyy` via the `Display`
/// trait, the date format used throughout report output.
pub struct DayMonthYear<'a>(pub &'a Date);

impl fmt::Display for DayMonthYear<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%Y"))
    }
}

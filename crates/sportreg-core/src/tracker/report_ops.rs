//! History report operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    display::report::{Language, Report},
    error::{Result, TrackerError},
    models::{RecordFilter, SortOrder},
    normalize,
    params::HistoryReport,
    store::Store,
};

impl Tracker {
    /// Builds the user's full history report: every stored record, plans
    /// flattened into dated day-occurrences, newest first, rendered in
    /// the requested language via the returned value's `Display`.
    ///
    /// Fails with [`TrackerError::EmptyHistory`] when the user has no
    /// stored records at all.
    pub async fn history_report(&self, params: &HistoryReport) -> Result<Report> {
        let language: Language = params.lang.parse()?;

        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let store = Store::new(&db_path)?;

            let records = store.find_records(
                &username,
                &RecordFilter::default(),
                SortOrder::Descending,
                None,
            )?;

            if records.is_empty() {
                return Err(TrackerError::EmptyHistory { username });
            }

            let occurrences = normalize::merge_history(records)?;
            Ok(Report::new(username, language, occurrences))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

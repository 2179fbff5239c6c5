//! Plan operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Plan, Record, RecordFilter, SortOrder},
    normalize,
    params::{InsertPlan, LastCompleted, Reschedule},
    store::Store,
};

/// How many of the newest plans the fully-completed scan inspects.
///
/// "Fully completed" is derived from the day-records inside each
/// document, so the scan cannot be pushed into the store; bounding it
/// keeps the cost of the lookup fixed.
const RECENT_PLAN_SCAN_LIMIT: u32 = 10;

impl Tracker {
    /// Validates and stores a new plan record in the user's partition.
    /// Returns the generated record id.
    pub async fn insert_plan(&self, params: &InsertPlan) -> Result<u64> {
        params.plan.validate()?;

        let db_path = self.db_path.clone();
        let username = params.username.clone();
        let plan = params.plan.clone();

        task::spawn_blocking(move || {
            let mut store = Store::new(&db_path)?;
            store.insert_record(&username, &Record::Plan(plan))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the newest plan whose day-records are all completed, or
    /// `None` when no such plan exists among the most recent ones.
    pub async fn last_completed_plan(&self, params: &LastCompleted) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let store = Store::new(&db_path)?;
            find_last_completed_plan(&store, &username)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clones the most recent fully completed plan into a fresh pending
    /// plan anchored on the supplied date (or today in the reference
    /// timezone) and stores it. Day offsets are carried as-is; they
    /// resolve against the new anchor whenever the plan is flattened.
    ///
    /// Fails with [`TrackerError::NoCompletedPlan`] before any write when
    /// no fully completed plan exists.
    pub async fn reschedule_plan(&self, params: &Reschedule) -> Result<(u64, Plan)> {
        let date = params.date.unwrap_or_else(|| self.today());

        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let mut store = Store::new(&db_path)?;

            let last = find_last_completed_plan(&store, &username)?
                .ok_or(TrackerError::NoCompletedPlan)?;

            let scheduled = normalize::reschedule_plan(&last, date);
            let id = store.insert_record(&username, &Record::Plan(scheduled.clone()))?;
            Ok((id, scheduled))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Newest-first linear scan for a fully completed plan, bounded to the
/// most recent [`RECENT_PLAN_SCAN_LIMIT`] plan records.
fn find_last_completed_plan(store: &Store, username: &str) -> Result<Option<Plan>> {
    let records = store.find_records(
        username,
        &RecordFilter::plans(),
        SortOrder::Descending,
        Some(RECENT_PLAN_SCAN_LIMIT),
    )?;

    for record in records {
        if let Record::Plan(plan) = record {
            if normalize::is_plan_completed(&plan) {
                return Ok(Some(plan));
            }
        }
    }

    Ok(None)
}

//! Workout operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Occurrence, Record, RecordFilter, SortOrder, Workout},
    normalize,
    params::{InsertWorkout, LastCompleted, PendingWorkouts, Reschedule},
    store::Store,
};

impl Tracker {
    /// Validates and stores a new workout record in the user's partition.
    /// Returns the generated record id.
    pub async fn insert_workout(&self, params: &InsertWorkout) -> Result<u64> {
        params.workout.validate()?;

        let db_path = self.db_path.clone();
        let username = params.username.clone();
        let workout = params.workout.clone();

        task::spawn_blocking(move || {
            let mut store = Store::new(&db_path)?;
            store.insert_record(&username, &Record::Workout(workout))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the most recent completed workout, or `None` when the user
    /// has never completed one. Absence is a regular outcome here, not an
    /// error; re-scheduling is where it becomes one.
    pub async fn last_completed_workout(&self, params: &LastCompleted) -> Result<Option<Workout>> {
        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let store = Store::new(&db_path)?;
            find_last_completed_workout(&store, &username)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the user's pending occurrences: bare workouts not yet
    /// completed plus every pending day of every plan, flattened and
    /// merged into one list sorted ascending by resolved date.
    ///
    /// An empty result is a valid outcome.
    pub async fn pending_workouts(&self, params: &PendingWorkouts) -> Result<Vec<Occurrence>> {
        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let store = Store::new(&db_path)?;

            let workouts = store
                .find_records(
                    &username,
                    &RecordFilter::pending_workouts(),
                    SortOrder::Ascending,
                    None,
                )?
                .into_iter()
                .filter_map(|record| match record {
                    Record::Workout(workout) => Some(workout),
                    Record::Plan(_) => None,
                })
                .collect();

            let plans = store
                .find_records(&username, &RecordFilter::plans(), SortOrder::Ascending, None)?
                .into_iter()
                .filter_map(|record| match record {
                    Record::Plan(plan) => Some(plan),
                    Record::Workout(_) => None,
                })
                .collect();

            normalize::merge_pending(plans, workouts)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clones the most recent completed workout into a fresh pending
    /// session and stores it. The new session is dated with the supplied
    /// date, or today in the reference timezone when omitted.
    ///
    /// Fails with [`TrackerError::NoCompletedWorkout`] before any write
    /// when the user has no completed workout.
    pub async fn reschedule_workout(&self, params: &Reschedule) -> Result<(u64, Workout)> {
        let date = params.date.unwrap_or_else(|| self.today());

        let db_path = self.db_path.clone();
        let username = params.username.clone();

        task::spawn_blocking(move || {
            let mut store = Store::new(&db_path)?;

            let last = find_last_completed_workout(&store, &username)?
                .ok_or(TrackerError::NoCompletedWorkout)?;

            let scheduled = normalize::reschedule_workout(&last, date);
            let id = store.insert_record(&username, &Record::Workout(scheduled.clone()))?;
            Ok((id, scheduled))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Max-date lookup over completed workouts, shared by the query and the
/// re-scheduler.
fn find_last_completed_workout(store: &Store, username: &str) -> Result<Option<Workout>> {
    let mut records = store.find_records(
        username,
        &RecordFilter::completed_workouts(),
        SortOrder::Descending,
        Some(1),
    )?;

    Ok(records.pop().and_then(|record| match record {
        Record::Workout(workout) => Some(workout),
        Record::Plan(_) => None,
    }))
}

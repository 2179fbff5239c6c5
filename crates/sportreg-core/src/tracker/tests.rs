//! Tests for the tracker module.

use jiff::civil::{date, Date};
use tempfile::TempDir;

use super::*;
use crate::error::TrackerError;
use crate::models::{Exercise, Plan, PlanDay, Reps, Workout};
use crate::params::{InsertWorkout, LastCompleted, PendingWorkouts, Reschedule};

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn exercise(name: &str) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets: 3,
        reps: Reps::Count(10),
        instruments: None,
        rest_minutes: "2".to_string(),
        instruction: None,
        comments: Some("session note".to_string()),
    }
}

fn workout(on: Date, completed: bool) -> Workout {
    Workout {
        date: on,
        exercises: vec![exercise("squat"), exercise("bench press")],
        completed,
        post_workout_comments: None,
    }
}

fn plan(anchor: Date, days: &[(i64, bool)]) -> Plan {
    Plan {
        date: anchor,
        plan: days
            .iter()
            .map(|&(day, completed)| PlanDay {
                day,
                exercises: vec![exercise("row")],
                completed,
            })
            .collect(),
        general_instructions: None,
        post_plan_comments: None,
    }
}

async fn insert_workout(tracker: &Tracker, user: &str, w: Workout) -> u64 {
    tracker
        .insert_workout(&InsertWorkout {
            username: user.to_string(),
            workout: w,
        })
        .await
        .expect("Failed to insert workout")
}

#[tokio::test]
async fn test_insert_workout_returns_generated_ids() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let first = insert_workout(&tracker, "alice", workout(date(2024, 1, 1), false)).await;
    let second = insert_workout(&tracker, "alice", workout(date(2024, 1, 2), false)).await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_last_completed_workout_picks_max_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    insert_workout(&tracker, "alice", workout(date(2024, 1, 10), true)).await;
    insert_workout(&tracker, "alice", workout(date(2024, 2, 5), true)).await;
    insert_workout(&tracker, "alice", workout(date(2024, 3, 1), false)).await;

    let last = tracker
        .last_completed_workout(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed workout")
        .expect("Expected a completed workout");

    assert_eq!(last.date, date(2024, 2, 5));
}

#[tokio::test]
async fn test_last_completed_workout_none_is_not_an_error() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    insert_workout(&tracker, "alice", workout(date(2024, 1, 1), false)).await;

    let last = tracker
        .last_completed_workout(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed workout");

    assert!(last.is_none());
}

#[tokio::test]
async fn test_partitions_are_isolated_by_username() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    insert_workout(&tracker, "alice", workout(date(2024, 1, 1), true)).await;

    let last = tracker
        .last_completed_workout(&LastCompleted {
            username: "bob".to_string(),
        })
        .await
        .expect("Failed to query last completed workout");

    assert!(last.is_none());
}

#[tokio::test]
async fn test_pending_workouts_empty_is_empty() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");

    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_pending_workouts_excludes_completed() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    insert_workout(&tracker, "alice", workout(date(2024, 1, 1), true)).await;
    insert_workout(&tracker, "alice", workout(date(2024, 1, 2), false)).await;

    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].date, date(2024, 1, 2));
}

#[tokio::test]
async fn test_reschedule_workout_clones_and_resets() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    insert_workout(&tracker, "alice", workout(date(2024, 1, 5), true)).await;

    let (id, scheduled) = tracker
        .reschedule_workout(&Reschedule {
            username: "alice".to_string(),
            date: Some(date(2024, 2, 1)),
        })
        .await
        .expect("Failed to reschedule workout");

    assert!(id > 0);
    assert_eq!(scheduled.date, date(2024, 2, 1));
    assert!(!scheduled.completed);
    assert_eq!(scheduled.exercises.len(), 2);
    assert!(scheduled.exercises.iter().all(|e| e.comments.is_none()));

    // The clone is stored as a new pending record.
    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].date, date(2024, 2, 1));
}

#[tokio::test]
async fn test_reschedule_workout_without_history_fails_without_insert() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // History exists but nothing is completed.
    insert_workout(&tracker, "alice", workout(date(2024, 1, 1), false)).await;

    let result = tracker
        .reschedule_workout(&Reschedule {
            username: "alice".to_string(),
            date: Some(date(2024, 2, 1)),
        })
        .await;

    assert!(matches!(result, Err(TrackerError::NoCompletedWorkout)));

    // No partial side effect: the only pending record is the original one.
    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].date, date(2024, 1, 1));
}

#[tokio::test]
async fn test_last_completed_plan_requires_every_day_done() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&crate::params::InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true), (2, false)]),
        })
        .await
        .expect("Failed to insert plan");

    let last = tracker
        .last_completed_plan(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed plan");
    assert!(last.is_none());

    tracker
        .insert_plan(&crate::params::InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 2, 1), &[(1, true), (2, true)]),
        })
        .await
        .expect("Failed to insert plan");

    let last = tracker
        .last_completed_plan(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed plan")
        .expect("Expected a completed plan");
    assert_eq!(last.date, date(2024, 2, 1));
}

#[tokio::test]
async fn test_insert_plan_rejects_invalid_day_offset() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .insert_plan(&crate::params::InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(0, false)]),
        })
        .await;

    assert!(matches!(result, Err(TrackerError::InvalidDay { day: 0 })));
}

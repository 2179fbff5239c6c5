use jiff::civil::{date, Date};
use sportreg_core::models::{Exercise, Instrument, Plan, PlanDay, Reps, Workout};
use sportreg_core::params::{
    HistoryReport, InsertPlan, InsertWorkout, LastCompleted, PendingWorkouts, Reschedule,
};
use sportreg_core::TrackerError;

mod common;
use common::create_test_tracker;

fn exercise(name: &str) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets: 4,
        reps: Reps::Count(8),
        instruments: Some(vec![Instrument {
            name: "barbell".to_string(),
            weight: Some(40.0),
            detail: None,
        }]),
        rest_minutes: "2".to_string(),
        instruction: Some("keep the bar close".to_string()),
        comments: Some("last set was hard".to_string()),
    }
}

fn workout(on: Date, completed: bool) -> Workout {
    Workout {
        date: on,
        exercises: vec![exercise("deadlift")],
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
                exercises: vec![exercise("squat")],
                completed,
            })
            .collect(),
        general_instructions: Some("rest on the days in between".to_string()),
        post_plan_comments: None,
    }
}

#[tokio::test]
async fn test_plan_days_flatten_into_pending_view() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, false), (3, false)]),
        })
        .await
        .expect("Failed to insert plan");

    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");

    let dates: Vec<Date> = pending.iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 3)]);
}

#[tokio::test]
async fn test_pending_view_interleaves_plans_and_workouts() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, false), (5, false), (2, true)]),
        })
        .await
        .expect("Failed to insert plan");
    tracker
        .insert_workout(&InsertWorkout {
            username: "alice".to_string(),
            workout: workout(date(2024, 1, 3), false),
        })
        .await
        .expect("Failed to insert workout");

    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");

    let dates: Vec<Date> = pending.iter().map(|o| o.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 5)]
    );
}

#[tokio::test]
async fn test_reschedule_plan_end_to_end() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true), (3, true)]),
        })
        .await
        .expect("Failed to insert plan");

    let (id, scheduled) = tracker
        .reschedule_plan(&Reschedule {
            username: "alice".to_string(),
            date: Some(date(2024, 6, 1)),
        })
        .await
        .expect("Failed to reschedule plan");

    assert!(id > 0);
    assert_eq!(scheduled.date, date(2024, 6, 1));
    assert!(scheduled.plan.iter().all(|d| !d.completed));
    assert!(scheduled
        .plan
        .iter()
        .flat_map(|d| d.exercises.iter())
        .all(|e| e.comments.is_none()));
    assert_eq!(
        scheduled.general_instructions.as_deref(),
        Some("rest on the days in between")
    );

    // The clone's day offsets resolve against the new anchor at read time.
    let pending = tracker
        .pending_workouts(&PendingWorkouts {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query pending workouts");

    let dates: Vec<Date> = pending.iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![date(2024, 6, 1), date(2024, 6, 3)]);
}

#[tokio::test]
async fn test_reschedule_plan_without_completed_plan_fails() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true), (2, false)]),
        })
        .await
        .expect("Failed to insert plan");

    let result = tracker
        .reschedule_plan(&Reschedule {
            username: "alice".to_string(),
            date: Some(date(2024, 6, 1)),
        })
        .await;

    assert!(matches!(result, Err(TrackerError::NoCompletedPlan)));
}

#[tokio::test]
async fn test_completed_plan_scan_is_bounded_to_recent_plans() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // One fully completed plan, buried under ten newer incomplete ones.
    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true)]),
        })
        .await
        .expect("Failed to insert plan");
    for month in 2..=11i8 {
        tracker
            .insert_plan(&InsertPlan {
                username: "alice".to_string(),
                plan: plan(date(2024, month, 1), &[(1, false)]),
            })
            .await
            .expect("Failed to insert plan");
    }

    let last = tracker
        .last_completed_plan(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed plan");
    assert!(last.is_none(), "completed plan outside the scan bound");

    // Within the bound it is found again.
    let (_temp_dir2, tracker2) = create_test_tracker().await;
    tracker2
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true)]),
        })
        .await
        .expect("Failed to insert plan");
    for month in 2..=10i8 {
        tracker2
            .insert_plan(&InsertPlan {
                username: "alice".to_string(),
                plan: plan(date(2024, month, 1), &[(1, false)]),
            })
            .await
            .expect("Failed to insert plan");
    }

    let last = tracker2
        .last_completed_plan(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed plan");
    assert!(last.is_some());
}

#[tokio::test]
async fn test_plan_with_no_days_counts_as_completed() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[]),
        })
        .await
        .expect("Failed to insert plan");

    let last = tracker
        .last_completed_plan(&LastCompleted {
            username: "alice".to_string(),
        })
        .await
        .expect("Failed to query last completed plan");

    assert!(last.is_some(), "a plan with no day-records is vacuously complete");
}

#[tokio::test]
async fn test_history_report_flattens_and_renders() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .insert_workout(&InsertWorkout {
            username: "alice".to_string(),
            workout: workout(date(2024, 1, 5), true),
        })
        .await
        .expect("Failed to insert workout");
    tracker
        .insert_plan(&InsertPlan {
            username: "alice".to_string(),
            plan: plan(date(2024, 1, 1), &[(1, true), (10, false)]),
        })
        .await
        .expect("Failed to insert plan");

    let report = tracker
        .history_report(&HistoryReport {
            username: "alice".to_string(),
            lang: "en".to_string(),
        })
        .await
        .expect("Failed to build report");

    // Newest first, plans flattened into dated day-occurrences.
    let dates: Vec<Date> = report.occurrences().iter().map(|o| o.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 10), date(2024, 1, 5), date(2024, 1, 1)]
    );

    let output = format!("{report}");
    assert!(output.starts_with("# Workouts for alice"));
    assert!(output.contains("## 05/01/2024 :heavy_check_mark:"));
    assert!(output.contains("## 10/01/2024 :clock1:"));
    assert!(output.contains("barbell (40 kg)"));
}

#[tokio::test]
async fn test_history_report_rejects_unsupported_language() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .history_report(&HistoryReport {
            username: "alice".to_string(),
            lang: "fr".to_string(),
        })
        .await;

    match result {
        Err(TrackerError::InvalidInput { field, .. }) => assert_eq!(field, "lang"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_history_report_on_empty_history_is_an_error() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .history_report(&HistoryReport {
            username: "alice".to_string(),
            lang: "es".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(TrackerError::EmptyHistory { username }) if username == "alice"
    ));
}

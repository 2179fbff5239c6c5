//! Normalization core: plan flattening, pending-view merging, and
//! clone-and-reset for re-scheduling.
//!
//! Everything in this module is pure. Stored records come in, derived
//! values (flattened occurrence lists, reschedule clones) come out; no
//! record is ever mutated in place. The [`crate::tracker`] operations wire
//! these functions to the store.

use jiff::civil::Date;
use jiff::Span;

use crate::error::{Result, TrackerError};
use crate::models::{Exercise, Occurrence, Plan, PlanDay, Record, Workout};


/// Which day-records of a plan to include when flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// Only days not yet completed (the pending view)
    Pending,
    /// Every day, completed or not (the history view)
    All,
}

/// Resolve a 1-based day offset against a plan's anchor date.
///
/// Day 1 is the anchor date itself; day N is anchor + (N - 1) calendar
/// days. Offsets below 1 are structurally invalid stored data and fail
/// loudly rather than being coerced: a silently "fixed" offset would
/// corrupt every derived date downstream.
pub fn resolve_day_date(anchor: Date, day: i64) -> Result<Date> {
    if day < 1 {
        return Err(TrackerError::InvalidDay { day });
    }
    if day == 1 {
        return Ok(anchor);
    }
    anchor.checked_add(Span::new().days(day - 1)).map_err(|_| {
        TrackerError::invalid_input(
            "day",
            format!("day {day} does not resolve to a valid date from anchor {anchor}"),
        )
    })
}

/// Flatten a plan's day-records into dated occurrences.
///
/// Each day-record resolves to a concrete date and loses its offset in the
/// process; the resolved date is the sole temporal key downstream.
/// Duplicate `day` values are not merged; each produces its own
/// occurrence.
pub fn flatten_plan(plan: Plan, filter: DayFilter) -> Result<Vec<Occurrence>> {
    let anchor = plan.date;
    let mut occurrences = Vec::new();
    for day in plan.plan {
        if filter == DayFilter::Pending && day.completed {
            continue;
        }
        let date = resolve_day_date(anchor, day.day)?;
        occurrences.push(Occurrence::from_plan_day(day, date));
    }
    Ok(occurrences)
}

/// Whether every day-record in the plan has been completed.
///
/// A plan with no day-records counts as completed (the scan over its days
/// finds nothing pending).
pub fn is_plan_completed(plan: &Plan) -> bool {
    plan.plan.iter().all(|day| day.completed)
}

/// Merge pending plan days and pending bare workouts into one dated list.
///
/// Flattened plan occurrences are collected first, bare workouts appended
/// after, and the combined list stably sorted ascending by date — so on
/// equal dates, plan days keep their place ahead of bare workouts and
/// retrieval order is otherwise preserved.
pub fn merge_pending(plans: Vec<Plan>, workouts: Vec<Workout>) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();
    for plan in plans {
        occurrences.extend(flatten_plan(plan, DayFilter::Pending)?);
    }
    occurrences.extend(workouts.into_iter().map(Occurrence::from));
    occurrences.sort_by_key(|occurrence| occurrence.date);
    Ok(occurrences)
}

/// Flatten a user's full record set into occurrences, newest first.
///
/// Plans contribute every day-record, completed or not. Ties keep the
/// incoming retrieval order (stable sort).
pub fn merge_history(records: Vec<Record>) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();
    for record in records {
        match record {
            Record::Workout(workout) => occurrences.push(Occurrence::from(workout)),
            Record::Plan(plan) => occurrences.extend(flatten_plan(plan, DayFilter::All)?),
        }
    }
    occurrences.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(occurrences)
}

/// Clone a completed workout into a fresh pending session on a new date.
///
/// Exercises are carried verbatim — order, sets, reps, rest, instruments,
/// instruction — minus their per-session `comments`. The clone is always
/// pending and carries no post-session remarks.
pub fn reschedule_workout(last: &Workout, date: Date) -> Workout {
    Workout {
        date,
        exercises: strip_exercise_comments(&last.exercises),
        completed: false,
        post_workout_comments: None,
    }
}

/// Clone a fully completed plan into a fresh pending plan on a new anchor.
///
/// Day offsets are kept as-is; they are re-resolved against the new anchor
/// when the plan is flattened at read time, not here. Every day-record is
/// reset to pending and its exercises lose their `comments`. General
/// instructions survive the clone; post-plan remarks do not.
pub fn reschedule_plan(last: &Plan, date: Date) -> Plan {
    Plan {
        date,
        plan: last
            .plan
            .iter()
            .map(|day| PlanDay {
                day: day.day,
                exercises: strip_exercise_comments(&day.exercises),
                completed: false,
            })
            .collect(),
        general_instructions: last.general_instructions.clone(),
        post_plan_comments: None,
    }
}

fn strip_exercise_comments(exercises: &[Exercise]) -> Vec<Exercise> {
    exercises
        .iter()
        .map(|exercise| Exercise {
            comments: None,
            ..exercise.clone()
        })
        .collect()
}

//! Command handlers bridging parsed arguments and the core tracker.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::from_reader;
use sportreg_core::{
    display::{InsertResult, Occurrences, RescheduleResult},
    models::{Plan, Workout},
    params::{HistoryReport, InsertPlan, InsertWorkout, LastCompleted, PendingWorkouts, Reschedule},
    Tracker,
};

use crate::args::{PlanCommands, ReportArgs, RescheduleArgs, WorkoutCommands};
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the tracker, the renderer, and the username
/// every operation is scoped to.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    username: String,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, username: String) -> Self {
        Self {
            tracker,
            renderer,
            username,
        }
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Insert(args) => {
                let workout: Workout = read_json(&args.file)?;
                let id = self
                    .tracker
                    .insert_workout(&InsertWorkout {
                        username: self.username.clone(),
                        workout: workout.clone(),
                    })
                    .await?;
                self.renderer
                    .render(&format!("{}", InsertResult::new(id, workout)))
            }
            WorkoutCommands::Pending => self.pending().await,
            WorkoutCommands::LastCompleted => {
                let last = self
                    .tracker
                    .last_completed_workout(&LastCompleted {
                        username: self.username.clone(),
                    })
                    .await?;
                match last {
                    Some(workout) => self
                        .renderer
                        .render(&format!("# Last Completed Workout\n\n{workout}")),
                    None => self.renderer.render("There are no completed workouts.\n"),
                }
            }
            WorkoutCommands::Reschedule(RescheduleArgs { date }) => {
                let (id, workout) = self
                    .tracker
                    .reschedule_workout(&Reschedule {
                        username: self.username.clone(),
                        date,
                    })
                    .await?;
                self.renderer
                    .render(&format!("{}", RescheduleResult::new(id, workout)))
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Insert(args) => {
                let plan: Plan = read_json(&args.file)?;
                let id = self
                    .tracker
                    .insert_plan(&InsertPlan {
                        username: self.username.clone(),
                        plan: plan.clone(),
                    })
                    .await?;
                self.renderer
                    .render(&format!("{}", InsertResult::new(id, plan)))
            }
            PlanCommands::LastCompleted => {
                let last = self
                    .tracker
                    .last_completed_plan(&LastCompleted {
                        username: self.username.clone(),
                    })
                    .await?;
                match last {
                    Some(plan) => self
                        .renderer
                        .render(&format!("# Last Completed Plan\n\n{plan}")),
                    None => self.renderer.render("There are no completed plans.\n"),
                }
            }
            PlanCommands::Reschedule(RescheduleArgs { date }) => {
                let (id, plan) = self
                    .tracker
                    .reschedule_plan(&Reschedule {
                        username: self.username.clone(),
                        date,
                    })
                    .await?;
                self.renderer
                    .render(&format!("{}", RescheduleResult::new(id, plan)))
            }
        }
    }

    /// The merged pending view, also the default command.
    pub async fn pending(&self) -> Result<()> {
        let occurrences = self
            .tracker
            .pending_workouts(&PendingWorkouts {
                username: self.username.clone(),
            })
            .await?;
        self.renderer
            .render(&format!("# Pending Workouts\n\n{}", Occurrences(occurrences)))
    }

    pub async fn handle_report(&self, args: ReportArgs) -> Result<()> {
        let report = self
            .tracker
            .history_report(&HistoryReport {
                username: self.username.clone(),
                lang: args.lang,
            })
            .await?;
        self.renderer.render(&format!("{report}"))
    }
}

/// Read one JSON record body from a file, or stdin when the path is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if path == Path::new("-") {
        from_reader(io::stdin().lock()).context("Failed to parse JSON from stdin")
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open record file '{}'", path.display()))?;
        from_reader(io::BufReader::new(file))
            .with_context(|| format!("Failed to parse record file '{}'", path.display()))
    }
}

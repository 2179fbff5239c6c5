//! Command-line argument definitions using clap.
//!
//! Implements the parameter wrapper pattern: these structures carry the
//! clap-specific derives and convert into the core parameter types inside
//! the command handlers, keeping `sportreg-core` free of CLI framework
//! concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Main command-line interface for the Sportreg workout tracking tool
///
/// Sportreg tracks a user's workout history: individual sessions and
/// multi-day training plans. It supports inserting records, listing the
/// merged pending view, re-scheduling the most recent completed record,
/// and rendering the full history as a markdown report.
#[derive(Parser)]
#[command(version, about, name = "sportreg")]
pub struct Args {
    /// Username whose records to operate on (the storage partition key)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sportreg/sportreg.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sportreg CLI
///
/// The CLI is organized into three command categories:
/// - `workout`: single-session operations (insert, pending view, lookups)
/// - `plan`: multi-day plan operations
/// - `report`: render the full history as markdown
#[derive(Subcommand)]
pub enum Commands {
    /// Manage workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Render the workout history report
    #[command(alias = "r")]
    Report(ReportArgs),
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Insert a workout from a JSON file
    #[command(alias = "i")]
    Insert(InsertArgs),
    /// List pending work: unfinished workouts plus unfinished plan days,
    /// flattened and sorted by date
    #[command(aliases = ["l", "ls"])]
    Pending,
    /// Show the most recent completed workout
    #[command(alias = "last")]
    LastCompleted,
    /// Schedule the most recent completed workout again as pending
    #[command(alias = "again")]
    Reschedule(RescheduleArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Insert a plan from a JSON file
    #[command(alias = "i")]
    Insert(InsertArgs),
    /// Show the most recent fully completed plan
    #[command(alias = "last")]
    LastCompleted,
    /// Schedule the most recent fully completed plan again as pending
    #[command(alias = "again")]
    Reschedule(RescheduleArgs),
}

/// Insert a record from a JSON document
#[derive(ClapArgs)]
pub struct InsertArgs {
    /// Path to the JSON record body, or '-' to read from stdin
    pub file: PathBuf,
}

/// Re-schedule the most recent completed record
#[derive(ClapArgs)]
pub struct RescheduleArgs {
    /// Date for the new pending record (YYYY-MM-DD). Defaults to the
    /// current date in the reference timezone.
    #[arg(long)]
    pub date: Option<Date>,
}

/// Render the history report
#[derive(ClapArgs)]
pub struct ReportArgs {
    /// Report language ('es' or 'en')
    #[arg(long, default_value = "es")]
    pub lang: String,
}

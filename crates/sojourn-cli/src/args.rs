use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityCommands, DayCommands, PlanCommands};

/// Main command-line interface for the Sojourn day planning tool
///
/// Sojourn is a day and itinerary planning system: a plan spans an
/// inclusive date range, every date becomes a day, and each day holds an
/// ordered activity timeline. The CLI covers plan management, day
/// inspection (timeline, progress, free slots), and activity scheduling
/// operations (add, update, move, compact, automatic breaks).
#[derive(Parser)]
#[command(version, about, name = "sj")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sojourn/sojourn.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sojourn CLI
///
/// The CLI is organized into three main command categories:
/// - `plan`: Operations for managing plans (create, list, update, delete)
/// - `day`: Day-level views and scheduling (show, progress, free, compact)
/// - `activity`: Operations for individual activities within a day
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Inspect and schedule days
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Manage activities within a day
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
}

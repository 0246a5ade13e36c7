//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and converts it into the matching `sojourn_core::params` type via
//! `From`. CLI concerns (help text, aliases, value parsing) stay in this
//! layer while core parameter types remain interface-agnostic, and the
//! conversion is verified at compile time.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use sojourn_core::{
    params::{
        AddActivity, CompactDay, CreatePlan, DayRef, DeletePlan, FreeSlots, Id, ListPlans,
        MoveActivity, NewActivity, PatchActivity, RemoveActivity, Timeline, UpdatePlan,
    },
    OperationStatus, Planner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Create a new plan
///
/// Creates a plan spanning the inclusive date range and generates one
/// empty day per calendar date. Preferences start from defaults and can be
/// edited later.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
    /// First calendar date, YYYY-MM-DD
    #[arg(long, help = "First calendar date of the plan (YYYY-MM-DD, inclusive)")]
    pub start_date: String,
    /// Last calendar date, YYYY-MM-DD
    #[arg(long, help = "Last calendar date of the plan (YYYY-MM-DD, inclusive)")]
    pub end_date: String,
    /// Optional description providing more context about the plan
    #[arg(
        short,
        long,
        help = "Optional description providing more context about the plan"
    )]
    pub description: Option<String>,
    /// Destination of the trip or event
    #[arg(long, help = "Destination of the trip or event")]
    pub destination: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            description: val.description,
            destination: val.destination,
            start_date: val.start_date,
            end_date: val.end_date,
            preferences: None,
        }
    }
}

/// List all plans
///
/// Display either active plans (default) or archived plans based on the
/// --archived flag, most recently updated first.
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show archived plans instead of active plans
    #[arg(long, help = "Show archived plans instead of active ones")]
    pub archived: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            archived: val.archived,
        }
    }
}

/// Show details of a specific plan
///
/// Display the plan's metadata together with every day and its activity
/// timeline.
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a plan's details
///
/// Applies a partial update: only the supplied flags change. Editing the
/// date range regenerates the day set, preserving days whose dates remain
/// in range (shrinking the range drops the departed days together with
/// their activities).
#[derive(Args)]
pub struct UpdatePlanArgs {
    #[arg(help = "Unique identifier of the plan to update")]
    pub id: u64,
    #[arg(short, long, help = "Updated title for the plan")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description for the plan")]
    pub description: Option<String>,
    #[arg(long, help = "Updated destination for the plan")]
    pub destination: Option<String>,
    #[arg(
        short,
        long,
        help = "New status for the plan (draft, active, completed, archived)"
    )]
    pub status: Option<PlanStatusArg>,
    #[arg(long, help = "New first calendar date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[arg(long, help = "New last calendar date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
}

impl From<UpdatePlanArgs> for UpdatePlan {
    fn from(val: UpdatePlanArgs) -> Self {
        UpdatePlan {
            id: val.id,
            title: val.title,
            description: val.description,
            destination: val.destination,
            status: val.status.map(|s| s.to_string()),
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Update a plan's details or date range
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Day commands
// ============================================================================

/// Arguments addressing one day within a plan
#[derive(Args)]
pub struct DayRefArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day within the plan")]
    pub day_id: String,
}

impl From<DayRefArgs> for DayRef {
    fn from(val: DayRefArgs) -> Self {
        DayRef {
            plan_id: val.plan_id,
            day_id: val.day_id,
        }
    }
}

/// Find free slots within a day
///
/// Walks the day between the plan's wake-up and sleep times and reports
/// every gap at least the minimum duration long.
#[derive(Args)]
pub struct FreeSlotsArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day within the plan")]
    pub day_id: String,
    #[arg(long, help = "Minimum slot length in minutes (default 30)")]
    pub min_duration: Option<u32>,
}

impl From<FreeSlotsArgs> for FreeSlots {
    fn from(val: FreeSlotsArgs) -> Self {
        FreeSlots {
            plan_id: val.plan_id,
            day_id: val.day_id,
            min_duration: val.min_duration,
        }
    }
}

/// Render a day as a fixed-width slot grid
#[derive(Args)]
pub struct TimelineArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day within the plan")]
    pub day_id: String,
    #[arg(long, help = "Slot width in minutes (default 30)")]
    pub slot_duration: Option<u32>,
}

impl From<TimelineArgs> for Timeline {
    fn from(val: TimelineArgs) -> Self {
        Timeline {
            plan_id: val.plan_id,
            day_id: val.day_id,
            slot_duration: val.slot_duration,
        }
    }
}

/// Compact a day's schedule
///
/// Shifts every activity's start to the previous activity's end, removing
/// all gaps. Durations and relative order are untouched.
#[derive(Args)]
pub struct CompactDayArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day within the plan")]
    pub day_id: String,
    #[arg(
        long,
        help = "Start time of the compacted timeline (HH:mm); defaults to the plan's wake-up time"
    )]
    pub start: Option<String>,
}

impl From<CompactDayArgs> for CompactDay {
    fn from(val: CompactDayArgs) -> Self {
        CompactDay {
            plan_id: val.plan_id,
            day_id: val.day_id,
            day_start: val.start,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Show a day's activity timeline, sorted by start time
    #[command(alias = "s")]
    Show(DayRefArgs),
    /// Show a day's completion progress
    #[command(alias = "p")]
    Progress(DayRefArgs),
    /// Find free slots within a day
    #[command(alias = "f")]
    Free(FreeSlotsArgs),
    /// Render a day as a fixed-width slot grid
    #[command(alias = "t")]
    Timeline(TimelineArgs),
    /// Compact a day's schedule to remove gaps
    #[command(alias = "c")]
    Compact(CompactDayArgs),
    /// Insert automatic rest breaks per the plan's preferences
    #[command(alias = "b")]
    Breaks(DayRefArgs),
}

// ============================================================================
// Activity commands
// ============================================================================

/// Add a new activity to a day
///
/// Overlaps with existing activities are reported as a warning but never
/// block the add.
#[derive(Args)]
pub struct AddActivityArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day to add the activity to")]
    pub day_id: String,
    /// Title of the activity
    pub title: String,
    #[arg(long = "at", help = "Start time as a 24h HH:mm string")]
    pub start_time: String,
    #[arg(long, help = "Duration in minutes")]
    pub duration: u32,
    #[arg(short = 'k', long = "type", help = "Activity category")]
    pub kind: Option<ActivityTypeArg>,
    #[arg(short, long, help = "Optional detailed description of the activity")]
    pub description: Option<String>,
    #[arg(short, long, help = "Where the activity takes place")]
    pub location: Option<String>,
    #[arg(long, help = "Estimated cost")]
    pub cost: Option<f64>,
    #[arg(long, help = "Mark the activity as externally suggested")]
    pub suggested: bool,
}

impl From<AddActivityArgs> for AddActivity {
    fn from(val: AddActivityArgs) -> Self {
        AddActivity {
            plan_id: val.plan_id,
            day_id: val.day_id,
            activity: NewActivity {
                id: None,
                title: val.title,
                kind: val.kind.map(|k| k.to_string()),
                start_time: val.start_time,
                duration: val.duration,
                description: val.description,
                location: val.location,
                cost: val.cost,
                status: None,
                order: None,
                ai_suggested: val.suggested,
            },
        }
    }
}

/// Update an activity's fields
///
/// Only the supplied flags change; everything else is untouched. Position
/// cannot be edited here; use `activity move` instead.
#[derive(Args)]
pub struct UpdateActivityArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day containing the activity")]
    pub day_id: String,
    #[arg(help = "Identifier of the activity to update")]
    pub activity_id: String,
    #[arg(
        short,
        long,
        help = "New status (planned, in-progress, completed, skipped, postponed)"
    )]
    pub status: Option<ActivityStatusArg>,
    #[arg(short, long, help = "Updated title for the activity")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description for the activity")]
    pub description: Option<String>,
    #[arg(short = 'k', long = "type", help = "Updated activity category")]
    pub kind: Option<ActivityTypeArg>,
    #[arg(long = "at", help = "Updated start time (HH:mm)")]
    pub start_time: Option<String>,
    #[arg(long, help = "Updated duration in minutes")]
    pub duration: Option<u32>,
    #[arg(short, long, help = "Updated location")]
    pub location: Option<String>,
    #[arg(long, help = "Updated estimated cost")]
    pub cost: Option<f64>,
}

impl From<UpdateActivityArgs> for PatchActivity {
    fn from(val: UpdateActivityArgs) -> Self {
        PatchActivity {
            plan_id: val.plan_id,
            day_id: val.day_id,
            activity_id: val.activity_id,
            title: val.title,
            description: val.description,
            kind: val.kind.map(|k| k.to_string()),
            start_time: val.start_time,
            duration: val.duration,
            location: val.location,
            cost: val.cost,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Move an activity to a new position within its day
///
/// Positions are 0-indexed; every activity is renumbered to its new
/// position afterwards.
#[derive(Args)]
pub struct MoveActivityArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day containing the activity")]
    pub day_id: String,
    #[arg(help = "Current 0-based position of the activity")]
    pub from_index: usize,
    #[arg(help = "Target 0-based position for the activity")]
    pub to_index: usize,
}

impl From<MoveActivityArgs> for MoveActivity {
    fn from(val: MoveActivityArgs) -> Self {
        MoveActivity {
            plan_id: val.plan_id,
            day_id: val.day_id,
            from_index: val.from_index,
            to_index: val.to_index,
        }
    }
}

/// Remove an activity from a day
#[derive(Args)]
pub struct RemoveActivityArgs {
    #[arg(help = "Unique identifier of the owning plan")]
    pub plan_id: u64,
    #[arg(help = "Identifier of the day containing the activity")]
    pub day_id: String,
    #[arg(help = "Identifier of the activity to remove")]
    pub activity_id: String,
}

impl From<RemoveActivityArgs> for RemoveActivity {
    fn from(val: RemoveActivityArgs) -> Self {
        RemoveActivity {
            plan_id: val.plan_id,
            day_id: val.day_id,
            activity_id: val.activity_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add a new activity to a day
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// Update an activity's status or details
    #[command(alias = "u")]
    Update(UpdateActivityArgs),
    /// Move an activity to a new position within its day
    #[command(alias = "m")]
    Move(MoveActivityArgs),
    /// Remove an activity from a day
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveActivityArgs),
}

/// Command-line argument representation of plan status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PlanStatusArg {
    /// Plan is still being put together
    Draft,
    /// Plan is currently in use
    Active,
    /// All days of the plan are done
    Completed,
    /// Archive the plan, hiding it from the default list
    Archived,
}

impl std::fmt::Display for PlanStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatusArg::Draft => write!(f, "draft"),
            PlanStatusArg::Active => write!(f, "active"),
            PlanStatusArg::Completed => write!(f, "completed"),
            PlanStatusArg::Archived => write!(f, "archived"),
        }
    }
}

/// Command-line argument representation of activity status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ActivityStatusArg {
    /// Scheduled but not started
    Planned,
    /// Currently happening
    InProgress,
    /// Done
    Completed,
    /// Chosen to skip
    Skipped,
    /// Moved to later
    Postponed,
}

impl std::fmt::Display for ActivityStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityStatusArg::Planned => write!(f, "planned"),
            ActivityStatusArg::InProgress => write!(f, "in-progress"),
            ActivityStatusArg::Completed => write!(f, "completed"),
            ActivityStatusArg::Skipped => write!(f, "skipped"),
            ActivityStatusArg::Postponed => write!(f, "postponed"),
        }
    }
}

/// Command-line argument representation of activity categories
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ActivityTypeArg {
    Activity,
    Meal,
    Travel,
    Rest,
    Entertainment,
    Sightseeing,
    Shopping,
    Sports,
    Wellness,
    Social,
    Work,
    Custom,
}

impl std::fmt::Display for ActivityTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActivityTypeArg::Activity => "activity",
            ActivityTypeArg::Meal => "meal",
            ActivityTypeArg::Travel => "travel",
            ActivityTypeArg::Rest => "rest",
            ActivityTypeArg::Entertainment => "entertainment",
            ActivityTypeArg::Sightseeing => "sightseeing",
            ActivityTypeArg::Shopping => "shopping",
            ActivityTypeArg::Sports => "sports",
            ActivityTypeArg::Wellness => "wellness",
            ActivityTypeArg::Social => "social",
            ActivityTypeArg::Work => "work",
            ActivityTypeArg::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Command dispatch
// ============================================================================

/// CLI command dispatcher holding the planner and renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI dispatcher.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Handle a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self.planner.create_plan_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                match self.planner.show_plan(&params).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!("Plan with ID {} not found", params.id))
                            .to_string(),
                    ),
                }
            }
            PlanCommands::Update(args) => {
                let result = self.planner.update_plan_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Delete(args) => {
                let params: DeletePlan = args.into();
                match self.planner.delete_plan(&params).await? {
                    Some(plan) => self
                        .renderer
                        .render(&sojourn_core::DeleteResult::new(plan).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!("Plan with ID {} not found", params.id))
                            .to_string(),
                    ),
                }
            }
        }
    }

    /// Handle listing plans with a title header.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.planner.list_plans_summary(params).await?;
        let title = if params.archived {
            "# Archived Plans"
        } else {
            "# Active Plans"
        };
        self.renderer
            .render(&format!("{title}\n\n{summaries}"))
    }

    /// Handle a `day` subcommand.
    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Show(args) => {
                let activities = self.planner.day_schedule(&args.into()).await?;
                self.renderer.render(&activities.to_string())
            }
            DayCommands::Progress(args) => {
                let progress = self.planner.day_progress(&args.into()).await?;
                self.renderer.render(&progress.to_string())
            }
            DayCommands::Free(args) => {
                let slots = self.planner.free_slots_display(&args.into()).await?;
                self.renderer.render(&slots.to_string())
            }
            DayCommands::Timeline(args) => {
                let slots = self.planner.day_timeline_display(&args.into()).await?;
                self.renderer.render(&slots.to_string())
            }
            DayCommands::Compact(args) => {
                let compacted = self.planner.compact_day(&args.into()).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Compacted {} activities",
                        compacted.len()
                    ))
                    .to_string(),
                )?;
                self.renderer
                    .render(&sojourn_core::Activities(compacted).to_string())
            }
            DayCommands::Breaks(args) => {
                let with_breaks = self.planner.insert_day_breaks(&args.into()).await?;
                let inserted = with_breaks.iter().filter(|a| a.is_break).count();
                self.renderer.render(
                    &OperationStatus::success(format!("{inserted} break(s) in the timeline"))
                        .to_string(),
                )?;
                self.renderer
                    .render(&sojourn_core::Activities(with_breaks).to_string())
            }
        }
    }

    /// Handle an `activity` subcommand.
    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => {
                let added = self.planner.add_activity(&args.into()).await?;
                self.renderer.render(&added.to_string())
            }
            ActivityCommands::Update(args) => {
                let result = self.planner.patch_activity_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            ActivityCommands::Move(args) => {
                let moved = self.planner.move_activity(&args.into()).await?;
                self.renderer
                    .render(&sojourn_core::Activities(moved).to_string())
            }
            ActivityCommands::Remove(args) => {
                let params: RemoveActivity = args.into();
                self.planner.remove_activity(&params).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Removed activity '{}'",
                        params.activity_id
                    ))
                    .to_string(),
                )
            }
        }
    }
}

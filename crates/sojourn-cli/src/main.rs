//! Sojourn CLI Application
//!
//! Command-line interface for the Sojourn day and itinerary planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sojourn_core::{params::ListPlans, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Sojourn started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        None => cli.list_plans(&ListPlans { archived: false }).await,
    }
}

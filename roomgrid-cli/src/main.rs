mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roomgrid")]
#[command(about = "Weekly room-booking planner fed by OCR'd confirmation photos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new empty week to the planner
    AddWeek,

    /// Delete a week (remaining weeks are renumbered)
    DeleteWeek { week: u32 },

    /// Clear a week's bookings and photos, keeping the week
    Clear { week: u32 },

    /// Import a confirmation photo: attach it, recognize it, place the booking
    Import {
        week: u32,

        /// Path to the confirmation image
        image: PathBuf,
    },

    /// Remove a single booking cell
    Remove {
        week: u32,

        /// Day of week (e.g. "Tuesday")
        day: String,

        /// Slot time (e.g. "2:00pm")
        time: String,
    },

    /// List the photos attached to a week
    Photos { week: u32 },

    /// Remove one of a week's photos by its listed position
    RemovePhoto { week: u32, index: usize },

    /// Show the booking grid
    Show {
        /// Only this week (all weeks when omitted)
        week: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::AddWeek => commands::weeks::add(),
        Commands::DeleteWeek { week } => commands::weeks::delete(week),
        Commands::Clear { week } => commands::weeks::clear(week),
        Commands::Import { week, image } => commands::import::run(week, &image).await,
        Commands::Remove { week, day, time } => commands::remove::run(week, &day, &time),
        Commands::Photos { week } => commands::photos::list(week),
        Commands::RemovePhoto { week, index } => commands::photos::remove(week, index),
        Commands::Show { week } => commands::show::run(week),
    }
}

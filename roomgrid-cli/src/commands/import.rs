//! Import a confirmation photo and place the booking it describes.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use roomgrid_core::pipeline::{import_photo, ImportOutcome};
use roomgrid_core::recognizer::Recognizer;
use roomgrid_core::Planner;

use super::create_spinner;
use crate::render::{render_week, Render};

pub async fn run(week: u32, image: &Path) -> Result<()> {
    let mut planner = Planner::load()?;
    let recognizer = Recognizer::from_name(&planner.config().recognizer);

    let spinner = create_spinner(format!("Reading {}", image.display()));
    let outcome = import_photo(&mut planner, week, image, &recognizer).await;
    spinner.finish_and_clear();

    match outcome? {
        ImportOutcome::Placed(info) => {
            println!("Booked {}", info.render());
            println!();
            let grid = planner.week(week)?;
            println!("{}", render_week(grid, planner.slot_labels()));
        }
        ImportOutcome::RecognitionFailed => {
            println!(
                "{}",
                "Recognition failed. The photo was saved; try again with a clearer image.".red()
            );
        }
        ImportOutcome::InvalidBooking(e) => {
            println!("{}", e.to_string().yellow());
        }
    }

    Ok(())
}

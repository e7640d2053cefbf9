//! Show the booking grid.

use anyhow::Result;
use owo_colors::OwoColorize;

use roomgrid_core::Planner;

use crate::render::render_week;

pub fn run(week: Option<u32>) -> Result<()> {
    let planner = Planner::load()?;

    if planner.weeks().is_empty() {
        println!(
            "{}",
            "No weeks yet. Start with:\n  roomgrid add-week".dimmed()
        );
        return Ok(());
    }

    match week {
        Some(number) => {
            let grid = planner.week(number)?;
            println!("{}", render_week(grid, planner.slot_labels()));
        }
        None => {
            for (i, grid) in planner.weeks().iter().enumerate() {
                println!("{}", render_week(grid, planner.slot_labels()));
                if i < planner.weeks().len() - 1 {
                    println!();
                }
            }
        }
    }

    Ok(())
}

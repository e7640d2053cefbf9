//! Week management: add, delete, clear.

use anyhow::Result;
use owo_colors::OwoColorize;
use roomgrid_core::Planner;

pub fn add() -> Result<()> {
    let mut planner = Planner::load()?;
    let week_number = planner.add_week();
    planner.flush()?;

    println!("Added {}", format!("week {}", week_number).bold());
    Ok(())
}

pub fn delete(week: u32) -> Result<()> {
    let mut planner = Planner::load()?;
    planner.delete_week(week)?;
    planner.flush()?;

    println!("Deleted week {}", week);
    if !planner.weeks().is_empty() {
        println!(
            "{}",
            format!("Remaining weeks renumbered 1..{}", planner.weeks().len()).dimmed()
        );
    }
    Ok(())
}

pub fn clear(week: u32) -> Result<()> {
    let mut planner = Planner::load()?;
    planner.clear_week(week)?;
    planner.flush()?;

    println!("Cleared week {}", week);
    Ok(())
}

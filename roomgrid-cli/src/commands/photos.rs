//! Photo attachments on a week.

use anyhow::Result;
use owo_colors::OwoColorize;

use roomgrid_core::Planner;

pub fn list(week: u32) -> Result<()> {
    let planner = Planner::load()?;
    let grid = planner.week(week)?;

    if grid.photos.is_empty() {
        println!("{}", format!("No photos on week {}", week).dimmed());
        return Ok(());
    }

    println!("{}", format!("Photos on week {}", week).bold());
    for (index, photo) in grid.photos.iter().enumerate() {
        println!("   {}  {}", index, describe(photo).dimmed());
    }
    Ok(())
}

pub fn remove(week: u32, index: usize) -> Result<()> {
    let mut planner = Planner::load()?;
    planner.delete_photo(week, index)?;
    planner.flush()?;

    println!("Removed photo {} from week {}", index, week);
    Ok(())
}

/// Summarize a data-URL photo reference without dumping its payload.
fn describe(photo: &str) -> String {
    let mime = photo
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("unknown");
    let payload = photo.split(',').nth(1).unwrap_or("");
    // Base64 expands by 4/3, so this undercounts padding slightly.
    let approx_bytes = payload.len() * 3 / 4;

    format!("{} (~{} KB)", mime, approx_bytes.div_ceil(1024))
}

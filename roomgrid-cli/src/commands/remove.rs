//! Remove a single booking cell.

use anyhow::Result;

use roomgrid_core::timeslot::{parse_clock, slot_label, DAYS_OF_WEEK};
use roomgrid_core::Planner;

pub fn run(week: u32, day: &str, time: &str) -> Result<()> {
    let mut planner = Planner::load()?;

    let day_index = DAYS_OF_WEEK
        .iter()
        .position(|d| d.eq_ignore_ascii_case(day))
        .ok_or_else(|| anyhow::anyhow!("Unknown day '{}'. Expected e.g. \"Tuesday\"", day))?;

    let label = parse_clock(time)
        .map(slot_label)
        .ok_or_else(|| anyhow::anyhow!("Invalid time '{}'. Expected e.g. \"2:00pm\"", time))?;
    let slot_index = planner
        .slot_labels()
        .iter()
        .position(|l| *l == label)
        .ok_or_else(|| anyhow::anyhow!("'{}' is not a slot on the grid", label))?;

    planner
        .week_mut(week)?
        .clear_booking(day_index, slot_index)?;
    planner.flush()?;

    println!(
        "Cleared {} {} on week {}",
        DAYS_OF_WEEK[day_index], label, week
    );
    Ok(())
}

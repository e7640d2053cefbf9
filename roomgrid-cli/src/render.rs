//! Terminal rendering for roomgrid types.

use chrono::Duration;
use owo_colors::OwoColorize;

use roomgrid_core::booking::BookingInfo;
use roomgrid_core::grid::WeekGrid;
use roomgrid_core::timeslot::{parse_clock, slot_label, DAYS_OF_WEEK};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for BookingInfo {
    fn render(&self) -> String {
        let room = self.room.as_deref().unwrap_or("?");
        let day = self.day_of_week.as_deref().unwrap_or("?");
        let date = self.date.as_deref().unwrap_or("?");
        let start = self.start_time.as_deref().unwrap_or("?");
        let end = self.end_time.as_deref().unwrap_or("?");

        format!(
            "{} on {}, {} ({} - {})",
            room.green().bold(),
            day,
            date,
            start,
            end
        )
    }
}

/// One contiguous highlighted run in a day row.
struct BookingRun<'a> {
    room: &'a str,
    start: usize,
    end: usize,
}

fn booking_runs<'a>(row: &'a [roomgrid_core::grid::GridCell]) -> Vec<BookingRun<'a>> {
    let mut runs: Vec<BookingRun> = Vec::new();

    for (slot, cell) in row.iter().enumerate() {
        if !cell.highlighted {
            continue;
        }
        match runs.last_mut() {
            Some(run) if run.end + 1 == slot && run.room == cell.content => run.end = slot,
            _ => runs.push(BookingRun {
                room: &cell.content,
                start: slot,
                end: slot,
            }),
        }
    }

    runs
}

/// The end boundary of a run: the label after its last covered slot.
fn run_end_label(labels: &[String], last_slot: usize) -> String {
    if let Some(next) = labels.get(last_slot + 1) {
        return next.clone();
    }
    parse_clock(&labels[last_slot])
        .map(|t| slot_label(t + Duration::minutes(30)))
        .unwrap_or_else(|| labels[last_slot].clone())
}

/// Render a week as one line per booking run, plus a photo count.
pub fn render_week(grid: &WeekGrid, labels: &[String]) -> String {
    let mut lines = vec![format!("Week {}", grid.week_number).bold().to_string()];
    let mut any = false;

    for (day_index, row) in grid.cells.iter().enumerate() {
        for run in booking_runs(row) {
            any = true;
            lines.push(format!(
                "   {:<10} {} - {}  {}",
                DAYS_OF_WEEK[day_index],
                labels[run.start],
                run_end_label(labels, run.end),
                run.room.green().bold()
            ));
        }
    }

    if !any {
        lines.push(format!("   {}", "(no bookings)".dimmed()));
    }

    if !grid.photos.is_empty() {
        let label = if grid.photos.len() == 1 {
            "photo"
        } else {
            "photos"
        };
        lines.push(format!(
            "   {}",
            format!("({} {})", grid.photos.len(), label).dimmed()
        ));
    }

    lines.join("\n")
}

//! Weekly booking grid and placement.
//!
//! A `WeekGrid` is an ordered matrix of cells indexed by (day row, slot
//! column). Placement maps a parsed `BookingInfo` onto a contiguous run of
//! cells and marks them occupied.

use serde::{Deserialize, Serialize};

use crate::booking::BookingInfo;
use crate::error::{RoomGridError, RoomGridResult};
use crate::timeslot::{end_boundary_label, parse_clock, slot_label, DAYS_OF_WEEK};

/// One (day, slot) cell. Empty content and no highlight means free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub content: String,
    pub highlighted: bool,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && !self.highlighted
    }

    pub fn reset(&mut self) {
        self.content.clear();
        self.highlighted = false;
    }
}

/// One week's bookings: 7 day rows of slot cells, plus the photos that
/// were imported for this week (opaque data-URL references).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub week_number: u32,
    pub cells: Vec<Vec<GridCell>>,
    pub photos: Vec<String>,
}

impl WeekGrid {
    /// Create an empty grid: one row per weekday, `slot_count` columns each.
    pub fn new(week_number: u32, slot_count: usize) -> Self {
        WeekGrid {
            week_number,
            cells: vec![vec![GridCell::default(); slot_count]; DAYS_OF_WEEK.len()],
            photos: Vec::new(),
        }
    }

    /// Map a parsed booking onto this grid.
    ///
    /// The day row is the exact match of `day_of_week` against the fixed
    /// week; the start column is the canonical label of the start time, and
    /// the end column is the label of the slot 30 minutes before the end
    /// boundary (labels denote the start of each half hour, so the end time
    /// must be converted to the last fully covered slot). Every cell from
    /// start to end inclusive gets the room label and a highlight, silently
    /// overwriting whatever was there.
    pub fn place(&mut self, info: &BookingInfo, slot_labels: &[String]) -> RoomGridResult<()> {
        let day_index = info
            .day_of_week
            .as_deref()
            .and_then(|day| DAYS_OF_WEEK.iter().position(|d| *d == day));

        let (Some(day_index), Some(start), Some(end)) =
            (day_index, info.start_time.as_deref(), info.end_time.as_deref())
        else {
            return Err(RoomGridError::InvalidDay);
        };

        let start_column = parse_clock(start)
            .map(slot_label)
            .and_then(|label| slot_labels.iter().position(|s| *s == label));
        let end_column = parse_clock(end)
            .map(end_boundary_label)
            .and_then(|label| slot_labels.iter().position(|s| *s == label));

        let (Some(start_column), Some(end_column)) = (start_column, end_column) else {
            return Err(RoomGridError::InvalidTimeSlot);
        };

        let room = info.room.as_deref().unwrap_or("?");
        for column in start_column..=end_column {
            let cell = &mut self.cells[day_index][column];
            cell.content = room.to_string();
            cell.highlighted = true;
        }

        Ok(())
    }

    /// Clear a single booking cell back to free.
    pub fn clear_booking(&mut self, day_index: usize, slot_index: usize) -> RoomGridResult<()> {
        let cell = self
            .cells
            .get_mut(day_index)
            .ok_or(RoomGridError::InvalidDay)?
            .get_mut(slot_index)
            .ok_or(RoomGridError::InvalidTimeSlot)?;
        cell.reset();
        Ok(())
    }

    /// Clear every cell and drop all photos.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.reset();
            }
        }
        self.photos.clear();
    }

    /// True when no cell is occupied and no photo is attached.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.cells.iter().flatten().all(GridCell::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::parse_booking_text;
    use crate::timeslot::generate_slots;
    use chrono::NaiveTime;

    fn slots() -> Vec<String> {
        generate_slots(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        )
    }

    fn highlighted(grid: &WeekGrid) -> Vec<(usize, usize)> {
        grid.cells
            .iter()
            .enumerate()
            .flat_map(|(day, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.highlighted)
                    .map(move |(slot, _)| (day, slot))
            })
            .collect()
    }

    #[test]
    fn test_place_fills_covered_slots_only() {
        let labels = slots();
        let mut grid = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("Tuesday, June 10, 2025 room LG.03 2:00pm - 3:00pm");

        grid.place(&info, &labels).unwrap();

        // Tuesday is row 1; 02:00 PM and 02:30 PM are covered, 03:00 PM
        // (the end boundary itself) stays free.
        let two_pm = labels.iter().position(|l| l == "02:00 PM").unwrap();
        assert_eq!(highlighted(&grid), vec![(1, two_pm), (1, two_pm + 1)]);
        assert_eq!(grid.cells[1][two_pm].content, "LG.03");
        assert!(!grid.cells[1][two_pm + 2].highlighted);
    }

    #[test]
    fn test_place_is_idempotent() {
        let labels = slots();
        let mut grid = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("Friday, June 13, 2025 G.05 9:00am - 10:30am");

        grid.place(&info, &labels).unwrap();
        let once = grid.clone();
        grid.place(&info, &labels).unwrap();
        assert_eq!(grid, once);
    }

    #[test]
    fn test_place_without_date_is_invalid_day() {
        let labels = slots();
        let mut grid = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("LG.03 2:00pm - 3:00pm");

        let err = grid.place(&info, &labels).unwrap_err();
        assert!(matches!(err, RoomGridError::InvalidDay));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_place_outside_grid_hours_is_invalid_slot() {
        let labels = slots();
        let mut grid = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("Monday, June 9, 2025 G.01 6:00am - 7:00am");

        let err = grid.place(&info, &labels).unwrap_err();
        assert!(matches!(err, RoomGridError::InvalidTimeSlot));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_booking_resets_cell() {
        let labels = slots();
        let mut grid = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("Tuesday, June 10, 2025 LG.03 2:00pm - 3:00pm");
        grid.place(&info, &labels).unwrap();

        let two_pm = labels.iter().position(|l| l == "02:00 PM").unwrap();
        grid.clear_booking(1, two_pm).unwrap();
        grid.clear_booking(1, two_pm + 1).unwrap();
        assert!(grid.is_empty());
    }
}

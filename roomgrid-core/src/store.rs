//! Durable week-grid state.
//!
//! The whole planner is one JSON value on disk: an ordered list of week
//! snapshots. Every mutation anywhere re-snapshots everything and replaces
//! the file wholesale; every load is a full rebuild. There are no deltas
//! and no merging.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RoomGridError, RoomGridResult};
use crate::grid::{GridCell, WeekGrid};
use crate::timeslot::DAYS_OF_WEEK;

const STATE_FILE: &str = "table_data.json";

/// Highlight marker recorded for occupied cells.
const HIGHLIGHT_COLOR: &str = "lime";
/// Background recorded for the day-label column.
const DAY_LABEL_COLOR: &str = "white";

/// One cell as persisted. `background_color` is empty for free cells,
/// "lime" for highlighted ones, "white" for day-label cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCell {
    pub content: String,
    pub background_color: String,
}

/// One week as persisted. Each row's first cell is the day label; the
/// remaining cells line up with the generated slot columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWeek {
    pub week_number: u32,
    pub rows: Vec<Vec<PersistedCell>>,
    pub photos: Vec<String>,
}

/// Materialize every grid into the persisted structure.
pub fn snapshot(grids: &[WeekGrid]) -> Vec<PersistedWeek> {
    grids
        .iter()
        .map(|grid| PersistedWeek {
            week_number: grid.week_number,
            rows: grid
                .cells
                .iter()
                .zip(DAYS_OF_WEEK)
                .map(|(row, day)| {
                    let mut cells = Vec::with_capacity(row.len() + 1);
                    cells.push(PersistedCell {
                        content: (*day).to_string(),
                        background_color: DAY_LABEL_COLOR.to_string(),
                    });
                    cells.extend(row.iter().map(|cell| PersistedCell {
                        content: cell.content.clone(),
                        background_color: if cell.highlighted {
                            HIGHLIGHT_COLOR.to_string()
                        } else {
                            String::new()
                        },
                    }));
                    cells
                })
                .collect(),
            photos: grid.photos.clone(),
        })
        .collect()
}

/// Rebuild grids from the persisted structure.
///
/// Weeks recorded before their first booking may have no rows at all;
/// those come back as empty grids. Rows are padded to the current slot
/// count so the column invariant holds after a config change.
pub fn restore(persisted: Vec<PersistedWeek>, slot_count: usize) -> Vec<WeekGrid> {
    persisted
        .into_iter()
        .map(|week| {
            let mut grid = WeekGrid::new(week.week_number, slot_count);
            grid.photos = week.photos;

            for (day_index, row) in week.rows.into_iter().enumerate().take(DAYS_OF_WEEK.len()) {
                // First cell is the day label, the rest are slot cells.
                for (slot_index, cell) in row.into_iter().skip(1).enumerate().take(slot_count) {
                    grid.cells[day_index][slot_index] = GridCell {
                        highlighted: cell.background_color == HIGHLIGHT_COLOR,
                        content: cell.content,
                    };
                }
            }

            grid
        })
        .collect()
}

/// File-backed store for the persisted planner state.
pub struct Store {
    path: PathBuf,
    slot_count: usize,
}

impl Store {
    /// A store writing `table_data.json` under `data_dir`.
    pub fn new(data_dir: &Path, slot_count: usize) -> Self {
        Store {
            path: data_dir.join(STATE_FILE),
            slot_count,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and rebuild all grids. A missing state file is an empty
    /// planner, not an error.
    pub fn load(&self) -> RoomGridResult<Vec<WeekGrid>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let persisted: Vec<PersistedWeek> = serde_json::from_str(&content)
            .map_err(|e| RoomGridError::Serialization(e.to_string()))?;

        tracing::debug!(weeks = persisted.len(), "loaded planner state");
        Ok(restore(persisted, self.slot_count))
    }

    /// Snapshot every grid and replace the state file wholesale.
    /// Written to a temp file then renamed, so readers never observe a
    /// partial write.
    pub fn save(&self, grids: &[WeekGrid]) -> RoomGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let persisted = snapshot(grids);
        let content = serde_json::to_string(&persisted)
            .map_err(|e| RoomGridError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        tracing::debug!(weeks = grids.len(), path = %self.path.display(), "flushed planner state");
        Ok(())
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

    fn sample_grids(labels: &[String]) -> Vec<WeekGrid> {
        let mut week1 = WeekGrid::new(1, labels.len());
        let info = parse_booking_text("Tuesday, June 10, 2025 LG.03 2:00pm - 3:00pm");
        week1.place(&info, labels).unwrap();
        week1.photos.push("data:image/png;base64,AAAA".to_string());

        let week2 = WeekGrid::new(2, labels.len());
        vec![week1, week2]
    }

    #[test]
    fn test_snapshot_layout() {
        let labels = slots();
        let grids = sample_grids(&labels);
        let persisted = snapshot(&grids);

        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted[0].week_number, 1);
        assert_eq!(persisted[0].rows.len(), 7);

        // First column is the day label on a white background.
        let tuesday = &persisted[0].rows[1];
        assert_eq!(tuesday.len(), labels.len() + 1);
        assert_eq!(tuesday[0].content, "Tuesday");
        assert_eq!(tuesday[0].background_color, "white");

        let two_pm = labels.iter().position(|l| l == "02:00 PM").unwrap();
        assert_eq!(tuesday[two_pm + 1].content, "LG.03");
        assert_eq!(tuesday[two_pm + 1].background_color, "lime");
        assert_eq!(tuesday[two_pm + 3].background_color, "");
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let labels = slots();
        let grids = sample_grids(&labels);

        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path(), labels.len());
        store.save(&grids).unwrap();

        assert_eq!(store.load().unwrap(), grids);
    }

    #[test]
    fn test_missing_state_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path(), slots().len());
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let labels = slots();
        let mut grids = sample_grids(&labels);

        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path(), labels.len());
        store.save(&grids).unwrap();

        // Clearing the booking and re-saving must be reflected on reload.
        let two_pm = labels.iter().position(|l| l == "02:00 PM").unwrap();
        grids[0].clear_booking(1, two_pm).unwrap();
        grids[0].clear_booking(1, two_pm + 1).unwrap();
        store.save(&grids).unwrap();

        let reloaded = store.load().unwrap();
        assert!(reloaded[0].cells[1][two_pm].is_empty());
        assert_eq!(reloaded, grids);
    }

    #[test]
    fn test_restore_pads_short_rows() {
        let labels = slots();
        let persisted = vec![PersistedWeek {
            week_number: 1,
            rows: vec![vec![
                PersistedCell {
                    content: "Monday".into(),
                    background_color: "white".into(),
                },
                PersistedCell {
                    content: "G.01".into(),
                    background_color: "lime".into(),
                },
            ]],
            photos: vec![],
        }];

        let grids = restore(persisted, labels.len());
        assert_eq!(grids[0].cells.len(), 7);
        assert_eq!(grids[0].cells[0].len(), labels.len());
        assert!(grids[0].cells[0][0].highlighted);
        assert_eq!(grids[0].cells[0][0].content, "G.01");
        assert!(grids[0].cells[0][1].is_empty());
    }
}

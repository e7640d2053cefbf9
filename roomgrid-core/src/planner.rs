//! The planner: every week grid plus its backing store.
//!
//! All mutation goes through this type so that the full-replace write
//! policy holds: callers mutate, then `flush`, and the store re-snapshots
//! everything.

use crate::booking::BookingInfo;
use crate::config::RoomGridConfig;
use crate::error::{RoomGridError, RoomGridResult};
use crate::grid::WeekGrid;
use crate::store::Store;

pub struct Planner {
    config: RoomGridConfig,
    slot_labels: Vec<String>,
    store: Store,
    weeks: Vec<WeekGrid>,
}

impl Planner {
    /// Load config and restore all weeks from the store.
    pub fn load() -> RoomGridResult<Self> {
        let config = RoomGridConfig::load()?;
        Self::open(config)
    }

    /// Open a planner against a specific configuration.
    pub fn open(config: RoomGridConfig) -> RoomGridResult<Self> {
        let slot_labels = config.slot_labels()?;
        let store = Store::new(&config.data_path(), slot_labels.len());
        let weeks = store.load()?;

        Ok(Planner {
            config,
            slot_labels,
            store,
            weeks,
        })
    }

    pub fn config(&self) -> &RoomGridConfig {
        &self.config
    }

    pub fn slot_labels(&self) -> &[String] {
        &self.slot_labels
    }

    pub fn weeks(&self) -> &[WeekGrid] {
        &self.weeks
    }

    pub fn week(&self, week_number: u32) -> RoomGridResult<&WeekGrid> {
        self.weeks
            .iter()
            .find(|w| w.week_number == week_number)
            .ok_or(RoomGridError::WeekNotFound(week_number))
    }

    pub fn week_mut(&mut self, week_number: u32) -> RoomGridResult<&mut WeekGrid> {
        self.weeks
            .iter_mut()
            .find(|w| w.week_number == week_number)
            .ok_or(RoomGridError::WeekNotFound(week_number))
    }

    /// Append a new empty week and return its number.
    pub fn add_week(&mut self) -> u32 {
        let week_number = self.weeks.len() as u32 + 1;
        self.weeks
            .push(WeekGrid::new(week_number, self.slot_labels.len()));
        week_number
    }

    /// Remove a week. Remaining weeks are renumbered sequentially, the
    /// same way the snapshot has always recorded them.
    pub fn delete_week(&mut self, week_number: u32) -> RoomGridResult<()> {
        let index = self
            .weeks
            .iter()
            .position(|w| w.week_number == week_number)
            .ok_or(RoomGridError::WeekNotFound(week_number))?;
        self.weeks.remove(index);

        for (i, week) in self.weeks.iter_mut().enumerate() {
            week.week_number = i as u32 + 1;
        }
        Ok(())
    }

    /// Reset a week's cells and photos without removing the week.
    pub fn clear_week(&mut self, week_number: u32) -> RoomGridResult<()> {
        self.week_mut(week_number)?.clear();
        Ok(())
    }

    /// Place a parsed booking onto a week.
    pub fn place(&mut self, week_number: u32, info: &BookingInfo) -> RoomGridResult<()> {
        let index = self
            .weeks
            .iter()
            .position(|w| w.week_number == week_number)
            .ok_or(RoomGridError::WeekNotFound(week_number))?;
        let labels = &self.slot_labels;
        self.weeks[index].place(info, labels)
    }

    /// Remove one photo from a week by position.
    pub fn delete_photo(&mut self, week_number: u32, photo_index: usize) -> RoomGridResult<()> {
        let week = self.week_mut(week_number)?;
        if photo_index >= week.photos.len() {
            return Err(RoomGridError::PhotoNotFound(photo_index, week_number));
        }
        week.photos.remove(photo_index);
        Ok(())
    }

    /// Re-snapshot everything to the store (full replace).
    pub fn flush(&self) -> RoomGridResult<()> {
        self.store.save(&self.weeks)
    }
}

//! Global roomgrid configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::{RoomGridError, RoomGridResult};
use crate::timeslot::{generate_slots, parse_clock};

static DEFAULT_DATA_DIR: &str = "~/.local/share/roomgrid";
static DEFAULT_DAY_START: &str = "08:00 AM";
static DEFAULT_DAY_END: &str = "09:00 PM";
static DEFAULT_RECOGNIZER: &str = "tesseract";
static DEFAULT_LANGUAGE: &str = "eng";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_day_start() -> String {
    DEFAULT_DAY_START.to_string()
}

fn default_day_end() -> String {
    DEFAULT_DAY_END.to_string()
}

fn default_recognizer() -> String {
    DEFAULT_RECOGNIZER.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Global configuration at ~/.config/roomgrid/config.toml
#[derive(Deserialize, Clone)]
pub struct RoomGridConfig {
    /// Where the planner state file and photos live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// First slot of the day, 12-hour clock.
    #[serde(default = "default_day_start")]
    pub day_start: String,

    /// End boundary of the day, 12-hour clock.
    #[serde(default = "default_day_end")]
    pub day_end: String,

    /// Recognizer provider name; resolved to a `roomgrid-provider-<name>`
    /// binary on PATH.
    #[serde(default = "default_recognizer")]
    pub recognizer: String,

    /// Recognition language passed to the provider.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for RoomGridConfig {
    fn default() -> Self {
        RoomGridConfig {
            data_dir: default_data_dir(),
            day_start: default_day_start(),
            day_end: default_day_end(),
            recognizer: default_recognizer(),
            language: default_language(),
        }
    }
}

impl RoomGridConfig {
    pub fn config_path() -> RoomGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RoomGridError::Config("Could not determine config directory".into()))?
            .join("roomgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented default on first run.
    pub fn load() -> RoomGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: RoomGridConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| RoomGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RoomGridError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// The ordered slot-label sequence for this configuration's day range.
    pub fn slot_labels(&self) -> RoomGridResult<Vec<String>> {
        let start = self.parse_boundary(&self.day_start)?;
        let end = self.parse_boundary(&self.day_end)?;
        Ok(generate_slots(start, end))
    }

    fn parse_boundary(&self, s: &str) -> RoomGridResult<NaiveTime> {
        parse_clock(s).ok_or_else(|| {
            RoomGridError::Config(format!(
                "Invalid clock time '{}'. Expected e.g. \"08:00 AM\"",
                s
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RoomGridResult<()> {
        let contents = format!(
            "\
# roomgrid configuration

# Where your planner state lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Bookable hours (30-minute slots are generated between these):
# day_start = \"{DEFAULT_DAY_START}\"
# day_end = \"{DEFAULT_DAY_END}\"

# OCR provider binary suffix (roomgrid-provider-<name>) and language:
# recognizer = \"{DEFAULT_RECOGNIZER}\"
# language = \"{DEFAULT_LANGUAGE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RoomGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RoomGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_labels() {
        let config = RoomGridConfig::default();
        let labels = config.slot_labels().unwrap();
        assert_eq!(labels.first().map(String::as_str), Some("08:00 AM"));
        assert_eq!(labels.last().map(String::as_str), Some("09:00 PM"));
    }

    #[test]
    fn test_invalid_boundary_is_config_error() {
        let config = RoomGridConfig {
            day_start: "8 o'clock".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.slot_labels(),
            Err(RoomGridError::Config(_))
        ));
    }
}

//! Error types for the roomgrid ecosystem.

use thiserror::Error;

/// Errors that can occur in roomgrid operations.
#[derive(Error, Debug)]
pub enum RoomGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Week {0} not found")]
    WeekNotFound(u32),

    #[error("Photo {0} not found on week {1}")]
    PhotoNotFound(usize, u32),

    #[error("Could not find a valid booking day in the recognized text")]
    InvalidDay,

    #[error("Invalid time slot in the booking information")]
    InvalidTimeSlot,

    #[error("Recognizer error: {0}")]
    Recognition(String),

    #[error("Recognizer '{0}' not found in PATH")]
    RecognizerNotInstalled(String),

    #[error("Recognizer request timed out after {0}s")]
    RecognizerTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for roomgrid operations.
pub type RoomGridResult<T> = Result<T, RoomGridError>;

//! Core types and logic for the roomgrid booking planner.
//!
//! This crate provides everything the CLI and recognizer providers share:
//! - the weekly grid model and booking placement
//! - booking confirmation text parsing
//! - the JSON state store (full-snapshot persistence)
//! - the recognizer provider protocol and subprocess boundary

pub mod booking;
pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod planner;
pub mod protocol;
pub mod recognizer;
pub mod room;
pub mod store;
pub mod timeslot;

pub use booking::{parse_booking_text, BookingInfo};
pub use error::{RoomGridError, RoomGridResult};
pub use grid::{GridCell, WeekGrid};
pub use planner::Planner;

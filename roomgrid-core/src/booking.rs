//! Booking confirmation text parsing.
//!
//! The recognizer hands us raw OCR output; this module extracts the
//! structured booking fields from it. Parsing is pure and total: fields
//! that cannot be found are simply `None`, and validating them before use
//! is the placement engine's job.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::room::match_room;

/// "2:00pm - 3:00pm", with optional whitespace around the dash and inside
/// each clock reading.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2}:\d{2}\s*[ap]m)\s*-\s*(\d{1,2}:\d{2}\s*[ap]m)").unwrap()
});

/// "Tuesday, June 10, 2025": weekday, then the date proper.
static DATE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\w+),\s+(\w+\s+\d{1,2},\s+\d{4})").unwrap());

/// Fields extracted from one recognized confirmation. Transient: consumed
/// by the placement engine, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingInfo {
    pub room: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub date: Option<String>,
    pub day_of_week: Option<String>,
}

/// Extract booking fields from raw recognized text.
///
/// Captured time strings are kept verbatim; canonicalization happens at
/// placement time.
pub fn parse_booking_text(text: &str) -> BookingInfo {
    let room = match_room(text).map(String::from);

    let (start_time, end_time) = match TIME_RANGE.captures(text) {
        Some(captures) => (
            Some(captures[1].to_string()),
            Some(captures[2].to_string()),
        ),
        None => (None, None),
    };

    let (day_of_week, date) = match DATE_LINE.captures(text) {
        Some(captures) => (
            Some(captures[1].to_string()),
            Some(captures[2].to_string()),
        ),
        None => (None, None),
    };

    BookingInfo {
        room,
        start_time,
        end_time,
        date,
        day_of_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_confirmation() {
        let text = "Booking confirmed\nTuesday, June 10, 2025\nRoom: LG.03\n2:00pm - 3:00pm";
        let info = parse_booking_text(text);

        assert_eq!(info.room.as_deref(), Some("LG.03"));
        assert_eq!(info.start_time.as_deref(), Some("2:00pm"));
        assert_eq!(info.end_time.as_deref(), Some("3:00pm"));
        assert_eq!(info.date.as_deref(), Some("June 10, 2025"));
        assert_eq!(info.day_of_week.as_deref(), Some("Tuesday"));
    }

    #[test]
    fn test_parse_spaced_time_range() {
        let info = parse_booking_text("10:30 AM - 11:00 AM in G.02");
        assert_eq!(info.start_time.as_deref(), Some("10:30 AM"));
        assert_eq!(info.end_time.as_deref(), Some("11:00 AM"));
        assert_eq!(info.room.as_deref(), Some("G.02"));
        assert_eq!(info.date, None);
        assert_eq!(info.day_of_week, None);
    }

    #[test]
    fn test_parse_is_total_on_garbage() {
        let info = parse_booking_text("\u{fffd}\u{fffd} ;;; no booking here 9999");
        assert_eq!(
            info,
            BookingInfo {
                room: None,
                start_time: None,
                end_time: None,
                date: None,
                day_of_week: None,
            }
        );
    }

    #[test]
    fn test_room_priority_over_text_order() {
        let info = parse_booking_text("LG.01 is nicer than G.01");
        assert_eq!(info.room.as_deref(), Some("G.01"));
    }

    #[test]
    fn test_time_without_range_is_ignored() {
        let info = parse_booking_text("doors open 9:00am");
        assert_eq!(info.start_time, None);
        assert_eq!(info.end_time, None);
    }
}

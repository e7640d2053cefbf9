//! Time-slot labels for the weekly grid.
//!
//! A slot is a fixed 30-minute-wide column. Labels use the 12-hour clock
//! with meridiem ("08:00 AM"), and the label denotes the *start* of the
//! half hour it covers.

use chrono::{Duration, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed week rows, in grid order.
pub const DAYS_OF_WEEK: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Slot width in minutes.
pub const SLOT_MINUTES: i64 = 30;

static CLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})\s*([ap])\.?m\.?\s*$").unwrap());

/// Format a time as a canonical slot label ("02:00 PM").
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Parse a 12-hour clock string ("2:00pm", "02:00 PM", "2:00 pm").
/// Returns None for anything that is not a valid clock reading.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let captures = CLOCK_PATTERN.captures(s)?;
    let hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    if hour == 0 || hour > 12 {
        return None;
    }

    let is_pm = captures[3].eq_ignore_ascii_case("p");
    let hour24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0)
}

/// Generate the ordered slot-label sequence between `start` and `end`.
///
/// Emits a label every 30 minutes while strictly before `end`, then appends
/// `end`'s own label if the last emitted label differs, so both boundary
/// endpoints are always represented as columns. `start >= end` produces at
/// most the single `end` label.
pub fn generate_slots(start: NaiveTime, end: NaiveTime) -> Vec<String> {
    let mut slots = Vec::new();
    let mut current = start;

    while current < end {
        slots.push(slot_label(current));
        let (next, wrapped) = current.overflowing_add_signed(Duration::minutes(SLOT_MINUTES));
        if wrapped != 0 {
            break;
        }
        current = next;
    }

    if slots.last().map(String::as_str) != Some(slot_label(end).as_str()) {
        slots.push(slot_label(end));
    }

    slots
}

/// The label of the slot that a booking's end time last fully covers.
///
/// Slot labels denote the start of each half hour, so an end boundary maps
/// to the label 30 minutes before it.
pub fn end_boundary_label(end: NaiveTime) -> String {
    let minutes = end.hour() as i64 * 60 + end.minute() as i64 - SLOT_MINUTES;
    let wrapped = minutes.rem_euclid(24 * 60);
    let time = NaiveTime::from_hms_opt(wrapped as u32 / 60, wrapped as u32 % 60, 0)
        .unwrap_or(end);
    slot_label(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_clock_variants() {
        assert_eq!(parse_clock("2:00pm"), Some(t(14, 0)));
        assert_eq!(parse_clock("02:00 PM"), Some(t(14, 0)));
        assert_eq!(parse_clock("8:30 am"), Some(t(8, 30)));
        assert_eq!(parse_clock("12:00am"), Some(t(0, 0)));
        assert_eq!(parse_clock("12:00pm"), Some(t(12, 0)));
        assert_eq!(parse_clock("13:00pm"), None);
        assert_eq!(parse_clock("lunch"), None);
    }

    #[test]
    fn test_generate_slots_full_day() {
        let slots = generate_slots(t(8, 0), t(21, 0));
        assert_eq!(slots.first().map(String::as_str), Some("08:00 AM"));
        assert_eq!(slots.last().map(String::as_str), Some("09:00 PM"));
        assert_eq!(slots.len(), 27);

        // Strictly increasing in 30-minute steps until the final boundary.
        for pair in slots.windows(2) {
            let a = parse_clock(&pair[0]).unwrap();
            let b = parse_clock(&pair[1]).unwrap();
            assert!(a < b);
        }
    }

    #[test]
    fn test_generate_slots_ragged_end() {
        // Span not a multiple of 30 minutes: the end boundary still gets
        // its own column.
        let slots = generate_slots(t(17, 0), t(18, 15));
        assert_eq!(slots, vec!["05:00 PM", "05:30 PM", "06:00 PM", "06:15 PM"]);
    }

    #[test]
    fn test_generate_slots_degenerate_range() {
        assert_eq!(generate_slots(t(9, 0), t(9, 0)), vec!["09:00 AM"]);
        assert_eq!(generate_slots(t(10, 0), t(9, 0)), vec!["09:00 AM"]);
    }

    #[test]
    fn test_end_boundary_label() {
        assert_eq!(end_boundary_label(t(15, 0)), "02:30 PM");
        assert_eq!(end_boundary_label(t(15, 30)), "03:00 PM");
    }
}

//! The fixed set of bookable rooms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical room list. Order matters: when recognized text mentions more
/// than one room code, the one earliest in this list wins, regardless of
/// where each code appears in the text.
pub const AVAILABLE_ROOMS: &[&str] = &[
    "G.01", "G.02", "G.03", "G.04", "G.05", "G.07", "L1.01", "L1.02", "LG.01", "LG.02", "LG.03",
    "LG.04", "LG.05", "LG.06", "LG.07", "LG.08", "LG.09", "LG.10",
];

/// Whole-word matchers for each room code, compiled once in canonical order.
static ROOM_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    AVAILABLE_ROOMS
        .iter()
        .map(|room| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(room));
            // Patterns are built from the static list above, so compilation
            // cannot fail at runtime.
            (*room, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Find the first room (in canonical list order) mentioned in `text`.
pub fn match_room(text: &str) -> Option<&'static str> {
    ROOM_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(room, _)| *room)
}

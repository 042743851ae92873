// CourtScout - core/parser.rs
//
// Turns the free-text "number of courts" field into a court count and type.
// Pure function; never fails.

use crate::core::model::{CourtInfo, CourtType};
use regex::Regex;
use std::sync::OnceLock;

/// First run of ASCII digits. `\d` would also match non-ASCII digits.
fn digit_run() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is a valid regex"))
}

/// Parse a court description such as "4 Indoor/Outdoor courts".
///
/// - `count` is the first maximal digit run (0 when there is none; saturates
///   at `u32::MAX` for absurdly long runs).
/// - `court_type` comes from case-insensitive "indoor"/"outdoor" substrings:
///   both present -> `Both`, one present -> that one, neither -> `Unknown`.
///
/// Absent or empty input yields `{ count: 0, court_type: Unknown }`.
pub fn parse_court_string(text: Option<&str>) -> CourtInfo {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return CourtInfo::default();
    };

    let count = digit_run()
        .find(text)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0);

    let lower = text.to_lowercase();
    let indoor = lower.contains("indoor");
    let outdoor = lower.contains("outdoor");

    let court_type = match (indoor, outdoor) {
        (true, true) => CourtType::Both,
        (true, false) => CourtType::Indoor,
        (false, true) => CourtType::Outdoor,
        (false, false) => CourtType::Unknown,
    };

    CourtInfo { count, court_type }
}

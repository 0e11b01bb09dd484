use once_cell::sync::Lazy;
use regex::Regex;

use fd_core::ids::TrackingNumber;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Split free text into an explicit, ordered sequence of tracking numbers.
///
/// This is the only place the free-text contract is interpreted: commas,
/// whitespace and newlines separate candidates, empties are dropped, first
/// occurrence order is preserved, and repeats within one paste collapse to
/// a single candidate. Everything downstream takes the explicit sequence.
pub fn parse_tracking_input(raw: &str) -> Vec<TrackingNumber> {
    let mut seen = std::collections::HashSet::new();
    SEPARATORS
        .split(raw)
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| seen.insert(candidate.to_string()))
        .map(TrackingNumber::from)
        .collect()
}

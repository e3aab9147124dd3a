//! Sibling name normalization.
//!
//! A colliding name is split on `_`. A numeric last segment is incremented,
//! anything else gets `_1` appended. This repeats until the name is free.

/// The next name to try after `name` collided.
pub fn next_candidate(name: &str) -> String {
    let mut segments: Vec<&str> = name.split('_').collect();
    let last = segments.pop().unwrap_or_default();

    match parse_index(last).and_then(|index| index.checked_add(1)) {
        Some(next) => format!("{}_{next}", segments.join("_")),
        None => format!("{name}_1"),
    }
}

/// Resolve `name` against the set of taken names.
pub fn unique_name(name: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = name.to_string();
    while is_taken(&candidate) {
        candidate = next_candidate(&candidate);
    }
    candidate
}

fn parse_index(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_candidate_appends_suffix() {
        assert_eq!(next_candidate("Panel"), "Panel_1");
        assert_eq!(next_candidate("left_panel"), "left_panel_1");
        assert_eq!(next_candidate("Panel_"), "Panel__1");
    }

    #[test]
    fn test_next_candidate_increments_numeric_suffix() {
        assert_eq!(next_candidate("Panel_1"), "Panel_2");
        assert_eq!(next_candidate("left_panel_9"), "left_panel_10");
        assert_eq!(next_candidate("7"), "_8");
    }

    #[test]
    fn test_unique_name_retries_until_free() {
        let taken = ["Panel", "Panel_1", "Panel_2"];
        let name = unique_name("Panel", |n| taken.contains(&n));
        assert_eq!(name, "Panel_3");
    }

    #[test]
    fn test_unique_name_keeps_free_name() {
        assert_eq!(unique_name("Console", |_| false), "Console");
    }

    #[test]
    fn test_huge_suffix_is_not_numeric() {
        let name = "Panel_99999999999999999999999";
        assert_eq!(next_candidate(name), format!("{name}_1"));
        let max = format!("Panel_{}", u64::MAX);
        assert_eq!(next_candidate(&max), format!("{max}_1"));
    }

    #[test]
    fn test_rejoin_keeps_inner_underscores() {
        // Only the numeric tail changes; earlier separators stay `_`.
        assert_eq!(next_candidate("left_panel_1"), "left_panel_2");
        assert_eq!(next_candidate("a__2"), "a__3");
    }
}

#![allow(dead_code)]

use respan::{Match, Matches, Pattern};

/// Compile a pattern with default options, panicking with context on failure.
#[track_caller]
pub fn compile(pattern: &str) -> Pattern {
    match Pattern::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("Failed to compile pattern {}: {}", pattern, e),
    }
}

/// Compile a pattern with a flag string.
#[track_caller]
pub fn compilef(pattern: &str, flags: &str) -> Pattern {
    match Pattern::with_options(pattern, flags) {
        Ok(re) => re,
        Err(e) => panic!(
            "Failed to compile pattern {} with flags {}: {}",
            pattern, flags, e
        ),
    }
}

/// Format a Match by inserting commas between the total match and all
/// capture groups.
pub fn format_match(m: &Match, input: &str) -> String {
    let mut result = m.as_str(input).to_string();
    for capture in m.captures() {
        result.push(',');
        result.push_str(capture.as_str(input));
    }
    result
}

/// All whole-match texts of a collection.
pub fn match_texts(found: &Matches) -> Vec<String> {
    (0..found.len()).map(|i| found.text(i).to_string()).collect()
}

/// All whole-match ranges of a collection.
pub fn match_ranges(found: &Matches) -> Vec<std::ops::Range<usize>> {
    found.iter().map(|m| m.range()).collect()
}

//! Tests for the search operations on Pattern.

mod common;
use common::{compile, compilef, format_match, match_ranges, match_texts};
use respan::{MatchOptions, Pattern};

#[test]
fn test_is_match() {
    let re = compile(r"\d+");
    assert!(!re.is_match("abc"));
    assert!(re.is_match("abc123"));
    assert!(re.is_match("123abc"));
}

#[test]
fn test_is_match_in_range() {
    let re = compile(r"\d+");
    let text = "abc123def";
    assert!(re.is_match_in(text, .., MatchOptions::default()));
    assert!(!re.is_match_in(text, ..3, MatchOptions::default()));
    assert!(re.is_match_in(text, 3.., MatchOptions::default()));
    assert!(!re.is_match_in(text, 6.., MatchOptions::default()));
}

#[test]
fn test_first_match() {
    let re = compile(r"\d+");
    let text = "abc123def456";
    let m = re.first_match(text).unwrap();
    assert_eq!(m.range(), 3..6);
    assert_eq!(m.as_str(text), "123");
    assert!(re.first_match("no digits").is_none());
}

#[test]
fn test_first_match_in_resumes_later() {
    let re = compile(r"\d+");
    let text = "abc123def456";
    let m = re
        .first_match_in(text, 6.., MatchOptions::default())
        .unwrap();
    assert_eq!(m.as_str(text), "456");
}

#[test]
fn test_phone_number_captures() {
    let re = compile(r"(\d{4})-(\d{3})-(\d{3})");
    let text = "4499-999-888 4491-111-444";
    let found = re.matches(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found.text(0), "4499-999-888");
    assert_eq!(found.capture_text(0, 0), "4499");
    assert_eq!(found.capture_text(0, 1), "999");
    assert_eq!(found.capture_text(0, 2), "888");
    assert_eq!(format_match(&found[1], text), "4491-111-444,4491,111,444");
}

#[test]
fn test_optional_group_sentinel() {
    let re = compile(r"(\+|-)?([0-9]+)");
    let text = "-987.0";
    let found = re.matches(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found.text(0), "-987");
    assert_eq!(found.capture_text(0, 0), "-");
    assert_eq!(found.capture_text(0, 1), "987");
    // The second number has no sign: its first capture is the sentinel,
    // anchored at the match start.
    assert_eq!(found.text(1), "0");
    assert_eq!(found.capture_text(1, 0), "");
    assert!(!found[1].capture(0).participated());
    assert_eq!(found[1].capture(0).range(), found[1].start()..found[1].start());
    assert_eq!(found.capture_text(1, 1), "0");
}

#[test]
fn test_capture_count_is_fixed() {
    let re = compile(r"(a)(b)?(c)?");
    assert_eq!(re.capture_count(), 3);
    for m in &re.matches("a ab abc") {
        assert_eq!(m.captures().len(), 3);
    }
}

#[test]
fn test_matches_is_deterministic() {
    let re = compile(r"\w+");
    let text = "the quick brown fox";
    let first = re.matches(text);
    let second = re.matches(text);
    assert_eq!(match_ranges(&first), match_ranges(&second));
    assert_eq!(match_texts(&first), match_texts(&second));
}

#[test]
fn test_matches_ordered_and_non_overlapping() {
    let re = compile(r"\w+");
    let found = re.matches("one two three four five");
    assert!(found.len() >= 2);
    for window in match_ranges(&found).windows(2) {
        assert!(window[0].end <= window[1].start);
    }
    // Every span lies within the searched range.
    let bounded = re.matches_in("one two three", 4..13, MatchOptions::default());
    for m in &bounded {
        assert!(m.start() >= 4 && m.end() <= 13);
    }
}

#[test]
fn test_matches_in_one_sided_ranges() {
    let re = compile("a");
    let text = "banana";
    assert_eq!(re.matches(text).len(), 3);
    assert_eq!(re.matches_in(text, ..3, MatchOptions::default()).len(), 1);
    assert_eq!(re.matches_in(text, 2.., MatchOptions::default()).len(), 2);
    // An inclusive end takes the whole character at that offset.
    assert_eq!(re.matches_in(text, ..=3, MatchOptions::default()).len(), 2);
    assert_eq!(re.matches_in(text, 2..4, MatchOptions::default()).len(), 1);
}

#[test]
fn test_is_exact_match() {
    let email = r"[\w.+-]+@[\w-]+\.[\w.]+";
    let re = compile(email);
    assert!(re.matches("user@example.com").is_exact_match());
    assert!(!re.matches("user@example.com ").is_exact_match());
    assert!(!re.matches("no email here").is_exact_match());
    // Two matches are never exact, even though both are emails.
    assert!(!re.matches("a@b.com c@d.com").is_exact_match());
}

#[test]
fn test_zero_length_match_text() {
    let re = compile("x*");
    let found = re.matches("ab");
    assert!(!found.is_empty());
    assert_eq!(found[0].range(), 0..0);
    // Extraction of an empty match is an empty string, not an error.
    assert_eq!(found.text(0), "");
}

#[test]
fn test_empty_subject() {
    let re = compile("a");
    let found = re.matches("");
    assert!(found.is_empty());
    assert_eq!(found.len(), 0);
    assert!(!re.is_match(""));
}

#[test]
fn test_matches_retains_subject_and_pattern() {
    let re = compile(r"\d+");
    let found = re.matches("a1b22");
    assert_eq!(found.subject(), "a1b22");
    assert_eq!(found.pattern(), r"\d+");
    assert_eq!(found.dropped(), 0);
}

#[test]
fn test_case_insensitive_flag() {
    let re = compilef("hello", "i");
    let found = re.matches("HELLO world Hello");
    assert_eq!(match_texts(&found), vec!["HELLO", "Hello"]);
}

#[test]
fn test_anchors_match_lines_flag() {
    let re = compilef("^test", "m");
    let found = re.matches("hello\ntest world\ntest again");
    assert_eq!(found.len(), 2);
}

#[test]
fn test_extended_flag_strips_whitespace_and_comments() {
    let re = compilef("\\d{4} - \\d{2}  # a date prefix\n - \\d{2}", "x");
    let m = re.first_match("on 2023-12-25 we ship").unwrap();
    assert_eq!(m.range(), 3..13);
}

#[test]
fn test_options_display_roundtrip() {
    let options = respan::Options::from("imsxu");
    assert!(options.case_insensitive);
    assert!(options.anchors_match_lines);
    assert!(options.dot_matches_all);
    assert!(options.extended);
    assert!(options.unicode);
    assert_eq!(options.to_string(), "imsxu");
    // Unknown letters are skipped.
    assert_eq!(respan::Options::from("gz"), respan::Options::default());
}

#[test]
fn test_anchored_search() {
    let anchored = MatchOptions {
        anchored: true,
        ..MatchOptions::default()
    };
    let re = compile(r"\d+");
    assert!(re.is_match_in("123abc", .., anchored));
    assert!(!re.is_match_in("abc123", .., anchored));
    // Anchoring binds to the range start, not the subject start.
    assert!(re.is_match_in("abc123", 3.., anchored));
    let found = re.matches_in("12 34", .., anchored);
    assert_eq!(found.len(), 1);
    assert_eq!(found.text(0), "12");
}

#[test]
fn test_opaque_bounds_anchor_at_range_end() {
    let re = compile("o$");
    // Truncated at the range end, "foo" ends in 'o' and $ anchors there.
    let m = re
        .first_match_in("foo bar", ..3, MatchOptions::default())
        .unwrap();
    assert_eq!(m.range(), 2..3);
    // With transparent bounds the engine sees the whole subject and finds
    // nothing.
    let transparent = MatchOptions {
        transparent_bounds: true,
        ..MatchOptions::default()
    };
    assert!(re.first_match_in("foo bar", ..3, transparent).is_none());
}

#[test]
fn test_transparent_bounds_discard_overrunning_match() {
    let re = compile(r"\d+");
    let transparent = MatchOptions {
        transparent_bounds: true,
        ..MatchOptions::default()
    };
    // The engine matches "1234" which overruns the range end at 3.
    let found = re.matches_in("1234", ..3, transparent);
    assert!(found.is_empty());
    // Opaque bounds truncate instead.
    let found = re.matches_in("1234", ..3, MatchOptions::default());
    assert_eq!(match_texts(&found), vec!["123"]);
}

#[test]
fn test_enumerate_visits_in_order() {
    let re = compile(r"\d+");
    let mut seen = Vec::new();
    re.enumerate_matches("a1b22c333", .., MatchOptions::default(), |m| {
        seen.push(m.range());
        true
    });
    assert_eq!(seen, vec![1..2, 3..5, 6..9]);
}

#[test]
fn test_enumerate_stops_early() {
    let re = compile(r"\d+");
    let mut seen = 0;
    re.enumerate_matches("a1b22c333", .., MatchOptions::default(), |_| {
        seen += 1;
        seen < 2
    });
    assert_eq!(seen, 2);
}

#[test]
fn test_enumerate_progress_cancels() {
    let re = compile(r"\d+");
    let mut seen = 0;
    let mut checkpoints = 0;
    re.enumerate_matches_with_progress(
        "a1b22c333",
        ..,
        MatchOptions::default(),
        || {
            checkpoints += 1;
            checkpoints <= 2
        },
        |_| {
            seen += 1;
            true
        },
    );
    // The third checkpoint cancelled before the third match was produced.
    assert_eq!(checkpoints, 3);
    assert_eq!(seen, 2);
}

#[test]
fn test_enumerate_progress_cancels_immediately() {
    let re = compile(r"\d+");
    let mut seen = 0;
    re.enumerate_matches_with_progress(
        "a1b22c333",
        ..,
        MatchOptions::default(),
        || false,
        |_| {
            seen += 1;
            true
        },
    );
    assert_eq!(seen, 0);
}

#[test]
fn test_pattern_accessors() {
    let re = compilef(r"(a)(b)", "i");
    assert_eq!(re.source(), r"(a)(b)");
    assert_eq!(re.capture_count(), 2);
    assert!(re.options().case_insensitive);
}

#[test]
fn test_pattern_from_str() {
    let re: Pattern = r"\d+".parse().unwrap();
    assert!(re.is_match("42"));
    assert!("(".parse::<Pattern>().is_err());
}

#[test]
fn test_group_accessor_convention() {
    let re = compile(r"(\d{4})-(\d{2})?");
    let text = "2023-";
    let m = re.first_match(text).unwrap();
    // Index 0 is the total match; capture groups start at 1.
    assert_eq!(m.group(0), Some(0..5));
    assert_eq!(m.group(1), Some(0..4));
    assert_eq!(m.group(2), None);
}

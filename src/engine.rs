//! Boundary to the matching engine.
//!
//! Everything on the far side of this module speaks UTF-16 code units. The
//! engine is consumed as an opaque collaborator: patterns go in, raw offset
//! ranges come out, and nothing of its representation escapes to the public
//! API.

use crate::api::{MatchOptions, Options, PatternError};
use core::ops::Range;
use std::borrow::Cow;

/// One raw engine result: the whole-match range plus per-group ranges, all in
/// UTF-16 code units. `None` is the engine's marker for a group that did not
/// participate in the match.
#[derive(Debug, Clone)]
pub(crate) struct RawMatch {
    pub range: Range<usize>,
    pub groups: Vec<Option<Range<usize>>>,
}

impl From<regress::Match> for RawMatch {
    fn from(m: regress::Match) -> Self {
        RawMatch {
            range: m.range.clone(),
            groups: m.captures,
        }
    }
}

/// Compile `source` with `options` mapped onto the engine's flags.
/// The engine's diagnostic is preserved verbatim in the error.
pub(crate) fn compile(source: &str, options: &Options) -> Result<regress::Regex, PatternError> {
    let pattern: Cow<str> = if options.extended {
        Cow::Owned(strip_extended(source))
    } else {
        Cow::Borrowed(source)
    };
    let mut flags = regress::Flags::default();
    flags.icase = options.case_insensitive;
    flags.multiline = options.anchors_match_lines;
    flags.dot_all = options.dot_matches_all;
    flags.unicode = options.unicode;
    regress::Regex::with_flags(pattern.as_ref(), flags)
        .map_err(|e| PatternError::new(source, &e.to_string()))
}

/// Raw matches within `raw_range` of `units`, in engine order, honoring
/// `options`. With opaque bounds (the default) the buffer is truncated at the
/// range end so `$` anchors there; with transparent bounds the engine sees
/// the whole buffer and matches overrunning the range end are discarded.
pub(crate) fn find_from<'a>(
    re: &'a regress::Regex,
    units: &'a [u16],
    raw_range: Range<usize>,
    options: MatchOptions,
) -> RawMatches<'a> {
    let haystack = if options.transparent_bounds {
        units
    } else {
        &units[..raw_range.end]
    };
    RawMatches {
        inner: Box::new(re.find_from_utf16(haystack, raw_range.start)),
        end: raw_range.end,
        anchor: if options.anchored {
            Some(raw_range.start)
        } else {
            None
        },
        done: false,
    }
}

/// Iterator over the raw results of one search call.
pub(crate) struct RawMatches<'a> {
    inner: Box<dyn Iterator<Item = regress::Match> + 'a>,
    end: usize,
    anchor: Option<usize>,
    done: bool,
}

impl Iterator for RawMatches<'_> {
    type Item = RawMatch;

    fn next(&mut self) -> Option<RawMatch> {
        if self.done {
            return None;
        }
        for m in self.inner.by_ref() {
            let range = m.range.clone();
            if let Some(at) = self.anchor {
                // Anchored searches admit only a match beginning exactly at
                // the range start.
                self.done = true;
                if range.start == at && range.end <= self.end {
                    return Some(m.into());
                }
                return None;
            }
            // Past the range end nothing further can qualify. An empty match
            // exactly at the end still counts.
            if range.start > self.end || (range.start == self.end && range.end > self.end) {
                break;
            }
            if range.end > self.end {
                // Overruns the range end; skip it and keep scanning.
                continue;
            }
            return Some(m.into());
        }
        self.done = true;
        None
    }
}

/// Count the capture groups of a pattern the way the engine's parser will:
/// `(` opens a group unless followed by `?`, except for the named form
/// `(?<name>`. Escapes and character classes never open groups. Derived once
/// at compile time so every match can be held to the same capture count.
pub(crate) fn count_captures(source: &str) -> usize {
    let bytes = source.as_bytes();
    let mut count = 0;
    let mut in_class = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            b'(' if !in_class => {
                if bytes.get(i + 1) != Some(&b'?') {
                    count += 1;
                } else if bytes.get(i + 2) == Some(&b'<')
                    && !matches!(bytes.get(i + 3), Some(&b'=') | Some(&b'!'))
                {
                    // Named capture (?<name>...); lookbehind is (?<= / (?<!.
                    count += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}

/// Strip unescaped whitespace and `#`-comments from a pattern written in
/// extended syntax. The engine has no extended mode of its own; this is pure
/// pattern-text preprocessing. Escapes and character classes are preserved
/// verbatim.
fn strip_extended(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '#' if !in_class => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            c if !in_class && c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_captures() {
        assert_eq!(count_captures(r"abc"), 0);
        assert_eq!(count_captures(r"(a)(b)"), 2);
        assert_eq!(count_captures(r"(a(b))"), 2);
        assert_eq!(count_captures(r"(?:a)"), 0);
        assert_eq!(count_captures(r"(?=a)(?!b)"), 0);
        assert_eq!(count_captures(r"(?<=x)(?<!y)"), 0);
        assert_eq!(count_captures(r"(?<year>\d{4})"), 1);
        assert_eq!(count_captures(r"\(a\)"), 0);
        assert_eq!(count_captures(r"[(](a)[)]"), 1);
        assert_eq!(count_captures(r"(\d{4})-(\d{3})-(\d{3})"), 3);
        assert_eq!(count_captures(r"(\+|-)?([0-9]+)"), 2);
    }

    #[test]
    fn test_strip_extended() {
        assert_eq!(strip_extended("a b\tc"), "abc");
        assert_eq!(strip_extended("a # trailing comment\nb"), "ab");
        assert_eq!(strip_extended("a # comment with no newline"), "a");
        // Classes and escapes keep their spacing.
        assert_eq!(strip_extended(r"[a b]"), "[a b]");
        assert_eq!(strip_extended(r"a\ b"), r"a\ b");
        assert_eq!(strip_extended(r"[#]x # real comment"), "[#]x");
    }
}

//! The result model: captures, matches, and match collections.
//!
//! Values here are built once per search call from raw engine output and are
//! immutable afterwards. All ranges are native byte ranges, safe for slicing
//! the subject directly.

use crate::engine::RawMatch;
use crate::translate::Subject;
use core::ops::{Index, Range};

/// One capture group's span within the subject text.
///
/// A group that did not participate in the match (an optional group in a
/// not-taken branch, for example) is represented by the empty-capture
/// sentinel: a zero-length range anchored at the start of the whole match,
/// with [`participated`](Capture::participated) returning `false`. Groups are
/// never omitted, so group `i` of the pattern is always capture `i - 1` of
/// every match the pattern produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    range: Range<usize>,
    participated: bool,
}

impl Capture {
    fn matched(range: Range<usize>) -> Self {
        Capture {
            range,
            participated: true,
        }
    }

    fn sentinel(at: usize) -> Self {
        Capture {
            range: at..at,
            participated: false,
        }
    }

    /// The captured native range. Empty for the sentinel.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Starting byte offset of the capture in the subject.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Ending byte offset of the capture in the subject.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether the group took part in the match. `false` marks the
    /// empty-capture sentinel.
    #[inline]
    pub fn participated(&self) -> bool {
        self.participated
    }

    /// The captured text. Empty for non-participating groups.
    #[inline]
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }
}

/// A portion of the subject which matched the pattern, along with its
/// captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    range: Range<usize>,
    captures: Vec<Capture>,
}

impl Match {
    /// The total native range of the match. Note this may be empty, if the
    /// pattern matched an empty string.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Starting byte offset of the match in the subject.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Ending byte offset of the match in the subject.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The matched text.
    #[inline]
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }

    /// The captures, one per capture group of the pattern. Group 1 of the
    /// pattern is index 0.
    #[inline]
    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    /// Capture at `index` (group `index + 1` of the pattern). Panics past the
    /// pattern's capture count.
    #[inline]
    pub fn capture(&self, index: usize) -> &Capture {
        &self.captures[index]
    }

    /// Access a group by number, using the convention of the engine's
    /// `group()`: index 0 is the total match, index 1 the first capture
    /// group. Returns `None` for a non-participating group; panics past the
    /// pattern's capture count.
    pub fn group(&self, index: usize) -> Option<Range<usize>> {
        if index == 0 {
            Some(self.range())
        } else {
            let capture = &self.captures[index - 1];
            if capture.participated() {
                Some(capture.range())
            } else {
                None
            }
        }
    }
}

/// Transform one raw engine result into a `Match`, translating every range to
/// native addressing.
///
/// An untranslatable whole-match range drops the entire result (logged, never
/// an error); an untranslatable or absent group range becomes the sentinel.
pub(crate) fn build_match(raw: &RawMatch, subject: &Subject) -> Option<Match> {
    let range = match subject.to_native(raw.range.clone()) {
        Ok(range) => range,
        Err(_) => {
            log::warn!(
                "dropping match at raw offsets {}..{}: not on a scalar boundary",
                raw.range.start,
                raw.range.end
            );
            return None;
        }
    };
    let mut captures = Vec::with_capacity(raw.groups.len());
    for (i, group) in raw.groups.iter().enumerate() {
        let capture = match group {
            None => Capture::sentinel(range.start),
            Some(group_raw) => match subject.to_native(group_raw.clone()) {
                Ok(group_range) => Capture::matched(group_range),
                Err(_) => {
                    log::debug!(
                        "group {} at raw offsets {}..{} not on a scalar boundary; padding with sentinel",
                        i + 1,
                        group_raw.start,
                        group_raw.end
                    );
                    Capture::sentinel(range.start)
                }
            },
        };
        captures.push(capture);
    }
    Some(Match { range, captures })
}

/// An immutable, ordered collection of the matches found by one search call.
///
/// The collection retains its own copy of the subject text and the pattern
/// source, so text extraction does not require re-passing the subject. It can
/// be indexed and iterated any number of times.
#[derive(Debug, Clone)]
pub struct Matches {
    subject: String,
    pattern: String,
    items: Vec<Match>,
    dropped: usize,
}

impl Matches {
    pub(crate) fn new(subject: &str, pattern: &str, items: Vec<Match>, dropped: usize) -> Self {
        Matches {
            subject: subject.to_string(),
            pattern: pattern.to_string(),
            items,
            dropped,
        }
    }

    /// Number of matches found.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The match at `index`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Match> {
        self.items.iter()
    }

    /// The retained subject text the matches index into.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Source text of the pattern that produced this collection.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text of the match at `index`. Panics out of bounds.
    pub fn text(&self, index: usize) -> &str {
        self.items[index].as_str(&self.subject)
    }

    /// Text of capture `capture` (group `capture + 1` of the pattern) of the
    /// match at `index`. Empty for non-participating groups. Panics when
    /// either index is out of bounds.
    pub fn capture_text(&self, index: usize, capture: usize) -> &str {
        self.items[index].capture(capture).as_str(&self.subject)
    }

    /// True iff exactly one match exists and it spans the entire subject.
    pub fn is_exact_match(&self) -> bool {
        self.items.len() == 1 && self.items[0].range() == (0..self.subject.len())
    }

    /// Number of raw engine results that were discarded because their
    /// whole-match range could not be translated to native addressing.
    /// Normally zero; a nonzero count explains a match-count discrepancy
    /// against the engine's own reckoning.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Index<usize> for Matches {
    type Output = Match;

    fn index(&self, index: usize) -> &Match {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a Match;
    type IntoIter = core::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

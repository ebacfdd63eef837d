//! Resumable forward search.
//!
//! A [`Cursor`] is an immutable snapshot of a search position: the pattern,
//! the match options in use, and the current match. Advancing never mutates
//! the cursor; it produces a new one (or `None` when the search is
//! exhausted). This keeps the pattern itself free of iterator state, so one
//! compiled pattern can serve any number of interleaved "find next" sessions.

use crate::api::{MatchOptions, Pattern};
use crate::model::Match;

/// An immutable position in an incremental search.
///
/// ```
/// use respan::Pattern;
/// let re = Pattern::new("ab").unwrap();
/// let cur = re.cursor("ab ab", Default::default()).unwrap();
/// assert_eq!(cur.current().range(), 0..2);
/// let cur = cur.next("ab ab", false).unwrap();
/// assert_eq!(cur.current().range(), 3..5);
/// assert!(cur.next("ab ab", false).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'p> {
    pattern: &'p Pattern,
    options: MatchOptions,
    current: Match,
}

impl Pattern {
    /// Position a cursor at the first match in `subject`, or `None` if there
    /// is no match.
    #[inline]
    pub fn cursor<'p>(&'p self, subject: &str, options: MatchOptions) -> Option<Cursor<'p>> {
        self.cursor_from(subject, 0, options)
    }

    /// Position a cursor at the first match at or after `start`. Returns
    /// `None` if there is no match, or if `start` is at or past the end of
    /// the subject.
    pub fn cursor_from<'p>(
        &'p self,
        subject: &str,
        start: usize,
        options: MatchOptions,
    ) -> Option<Cursor<'p>> {
        if start >= subject.len() {
            return None;
        }
        let current = self.first_match_in(subject, start.., options)?;
        Some(Cursor {
            pattern: self,
            options,
            current,
        })
    }
}

impl<'p> Cursor<'p> {
    /// The match the cursor is positioned at.
    #[inline]
    pub fn current(&self) -> &Match {
        &self.current
    }

    /// The pattern this cursor searches with.
    #[inline]
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// The match options this cursor searches with.
    #[inline]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// A cursor at the next match after the current one, searching to the
    /// subject end. With `looping`, an exhausted forward search restarts from
    /// the subject start (yielding the same match a fresh
    /// [`cursor`](Pattern::cursor) call would); otherwise it yields `None`.
    pub fn next(&self, subject: &str, looping: bool) -> Option<Cursor<'p>> {
        let mut resume = self.current.end();
        if self.current.range().is_empty() {
            // Step past an empty match so the search always makes progress.
            resume += subject[resume..].chars().next().map_or(1, char::len_utf8);
        }
        self.advance(subject, resume, looping)
    }

    /// A cursor at the first match at or after `start`, ignoring the current
    /// position. Looping applies as in [`next`](Cursor::next).
    #[inline]
    pub fn next_from(&self, subject: &str, start: usize, looping: bool) -> Option<Cursor<'p>> {
        self.advance(subject, start, looping)
    }

    fn advance(&self, subject: &str, start: usize, looping: bool) -> Option<Cursor<'p>> {
        let forward = if start >= subject.len() {
            None
        } else {
            self.pattern.first_match_in(subject, start.., self.options)
        };
        match forward {
            Some(current) => Some(Cursor {
                pattern: self.pattern,
                options: self.options,
                current,
            }),
            None if looping => self.pattern.cursor(subject, self.options),
            None => None,
        }
    }
}

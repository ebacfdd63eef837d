//! The public search facade.

use crate::engine;
use crate::model::{build_match, Match, Matches};
use crate::template;
use crate::translate::{normalize_bounds, Subject};
use core::fmt;
use core::ops::{Range, RangeBounds};
use core::str::FromStr;
use thiserror::Error;

/// Error produced when a pattern fails to compile. The engine's diagnostic
/// text is preserved unchanged and available via
/// [`message`](PatternError::message).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pattern /{pattern}/: {message}")]
pub struct PatternError {
    pattern: String,
    message: String,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, message: &str) -> Self {
        PatternError {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }

    /// The pattern source that failed to compile.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The engine's original diagnostic.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Flags used to control pattern compilation. The default is case-sensitive,
/// single-line, non-extended matching.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// If set, make the pattern case-insensitive. The 'i' flag.
    pub case_insensitive: bool,

    /// If set, `^` and `$` match at line separators, not just the subject
    /// boundaries. The 'm' flag.
    pub anchors_match_lines: bool,

    /// If set, `.` matches line separators as well as any other character.
    /// The 's' flag.
    pub dot_matches_all: bool,

    /// If set, unescaped whitespace and `#`-comments in the pattern are
    /// ignored. The 'x' flag.
    pub extended: bool,

    /// If set, the pattern uses Unicode semantics, including Unicode word
    /// boundaries. The 'u' flag.
    pub unicode: bool,
}

impl Options {
    /// Construct an Options from an iterator of flag characters.
    /// Unsupported flags are silently skipped.
    pub fn new<T: Iterator<Item = char>>(chars: T) -> Self {
        let mut result = Self::default();
        for c in chars {
            match c {
                'i' => {
                    result.case_insensitive = true;
                }
                'm' => {
                    result.anchors_match_lines = true;
                }
                's' => {
                    result.dot_matches_all = true;
                }
                'x' => {
                    result.extended = true;
                }
                'u' => {
                    result.unicode = true;
                }
                _ => {
                    // Silently skip unsupported flags.
                }
            }
        }
        result
    }
}

impl From<&str> for Options {
    /// Construct an Options from a flag string such as `"im"`.
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.case_insensitive {
            f.write_str("i")?;
        }
        if self.anchors_match_lines {
            f.write_str("m")?;
        }
        if self.dot_matches_all {
            f.write_str("s")?;
        }
        if self.extended {
            f.write_str("x")?;
        }
        if self.unicode {
            f.write_str("u")?;
        }
        Ok(())
    }
}

/// Flags applying to a single search call. The default searches the supplied
/// range with opaque bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Admit only a match that begins exactly at the start of the search
    /// range.
    pub anchored: bool,

    /// Match against the whole subject and discard matches that overrun the
    /// search range, instead of truncating the subject at the range end.
    ///
    /// With truncation (the default) `$` anchors at the range end. With
    /// transparent bounds, lookahead can see past the range end, and a match
    /// overrunning the end is skipped rather than re-attempted with a shorter
    /// alternative. Lookbehind can see before the range start in both modes.
    pub transparent_bounds: bool,
}

/// A compiled pattern, the entry point for every search operation.
///
/// Compilation happens once, at construction; a `Pattern` is immutable
/// afterwards and may be shared freely across threads and concurrent
/// searches. All ranges accepted and produced by its operations are native
/// byte ranges into the subject, never the engine's code-unit offsets.
///
/// ```
/// use respan::Pattern;
/// let re = Pattern::new(r"\d{4}").unwrap();
/// assert!(re.is_match("2020-20-05"));
/// ```
#[derive(Debug)]
pub struct Pattern {
    re: regress::Regex,
    source: String,
    options: Options,
    capture_count: usize,
}

impl Pattern {
    /// Compile `pattern` with the default options. Fails with a
    /// [`PatternError`] if the syntax is invalid.
    #[inline]
    pub fn new(pattern: &str) -> Result<Pattern, PatternError> {
        Self::with_options(pattern, Options::default())
    }

    /// Compile `pattern` with `options`, which may be given as an [`Options`]
    /// value or a flag string.
    ///
    /// ```
    /// use respan::Pattern;
    /// let re = Pattern::with_options("hello", "i").unwrap();
    /// assert!(re.is_match("Say HELLO"));
    /// ```
    pub fn with_options<O>(pattern: &str, options: O) -> Result<Pattern, PatternError>
    where
        O: Into<Options>,
    {
        let options = options.into();
        let re = engine::compile(pattern, &options)?;
        Ok(Pattern {
            re,
            source: pattern.to_string(),
            options,
            capture_count: engine::count_captures(pattern),
        })
    }

    /// The pattern source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The options the pattern was compiled with.
    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Number of capture groups in the pattern, fixed at compile time. Every
    /// match this pattern produces carries exactly this many captures.
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Whether `text` contains at least one match. Short-circuits at the
    /// first engine hit without materializing a result model; prefer this
    /// over `first_match(..).is_some()` when the match itself is not needed.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_in(text, .., MatchOptions::default())
    }

    /// Like [`is_match`](Pattern::is_match), restricted to `range` of `text`.
    pub fn is_match_in<R>(&self, text: &str, range: R, options: MatchOptions) -> bool
    where
        R: RangeBounds<usize>,
    {
        let subject = Subject::new(text);
        let raw = subject.to_raw(normalize_bounds(text, range));
        let found = engine::find_from(&self.re, subject.units(), raw, options)
            .next()
            .is_some();
        found
    }

    /// The first match in `text`, or `None`.
    #[inline]
    pub fn first_match(&self, text: &str) -> Option<Match> {
        self.first_match_in(text, .., MatchOptions::default())
    }

    /// Like [`first_match`](Pattern::first_match), restricted to `range` of
    /// `text`. Builds exactly one [`Match`].
    pub fn first_match_in<R>(&self, text: &str, range: R, options: MatchOptions) -> Option<Match>
    where
        R: RangeBounds<usize>,
    {
        let subject = Subject::new(text);
        let raw = subject.to_raw(normalize_bounds(text, range));
        let found = engine::find_from(&self.re, subject.units(), raw, options)
            .find_map(|raw_match| build_match(&raw_match, &subject));
        found
    }

    /// All matches in `text`, eagerly enumerated.
    #[inline]
    pub fn matches(&self, text: &str) -> Matches {
        self.matches_in(text, .., MatchOptions::default())
    }

    /// Like [`matches`](Pattern::matches), restricted to `range` of `text`.
    /// Any of the standard range forms works, so searches bounded on one side
    /// need no separate entry point; an inclusive end extends through the
    /// whole character at that offset.
    ///
    /// ```
    /// use respan::{MatchOptions, Pattern};
    /// let re = Pattern::new("a").unwrap();
    /// let found = re.matches_in("banana", ..3, MatchOptions::default());
    /// assert_eq!(found.len(), 1);
    /// ```
    pub fn matches_in<R>(&self, text: &str, range: R, options: MatchOptions) -> Matches
    where
        R: RangeBounds<usize>,
    {
        let subject = Subject::new(text);
        let raw = subject.to_raw(normalize_bounds(text, range));
        let mut items = Vec::new();
        let mut dropped = 0;
        for raw_match in engine::find_from(&self.re, subject.units(), raw, options) {
            match build_match(&raw_match, &subject) {
                Some(m) => items.push(m),
                None => dropped += 1,
            }
        }
        Matches::new(text, &self.source, items, dropped)
    }

    /// Streaming enumeration. `on_match` is invoked for each match in order;
    /// returning `false` stops the search before the next match is produced.
    pub fn enumerate_matches<R, F>(
        &self,
        text: &str,
        range: R,
        options: MatchOptions,
        mut on_match: F,
    ) where
        R: RangeBounds<usize>,
        F: FnMut(&Match) -> bool,
    {
        self.enumerate_inner(
            text,
            normalize_bounds(text, range),
            options,
            None,
            &mut |m| on_match(m),
        );
    }

    /// Streaming enumeration with cooperative cancellation. `progress` is
    /// additionally invoked at each engine checkpoint (before every match
    /// attempt); returning `false` cancels the search. Cancellation is
    /// cooperative only: there is no preemption and no timeout, and the eager
    /// [`matches`](Pattern::matches) form cannot be cancelled at all.
    pub fn enumerate_matches_with_progress<R, P, F>(
        &self,
        text: &str,
        range: R,
        options: MatchOptions,
        mut progress: P,
        mut on_match: F,
    ) where
        R: RangeBounds<usize>,
        P: FnMut() -> bool,
        F: FnMut(&Match) -> bool,
    {
        self.enumerate_inner(
            text,
            normalize_bounds(text, range),
            options,
            Some(&mut progress),
            &mut |m| on_match(m),
        );
    }

    fn enumerate_inner(
        &self,
        text: &str,
        range: Range<usize>,
        options: MatchOptions,
        mut progress: Option<&mut dyn FnMut() -> bool>,
        on_match: &mut dyn FnMut(&Match) -> bool,
    ) {
        let subject = Subject::new(text);
        let raw = subject.to_raw(range);
        let mut raw_matches = engine::find_from(&self.re, subject.units(), raw, options);
        loop {
            if let Some(p) = progress.as_mut() {
                if !p() {
                    return;
                }
            }
            let raw_match = match raw_matches.next() {
                Some(raw_match) => raw_match,
                None => return,
            };
            match build_match(&raw_match, &subject) {
                Some(m) => {
                    if !on_match(&m) {
                        return;
                    }
                }
                None => continue,
            }
        }
    }

    /// Replace every match in `text` with the expansion of `template`,
    /// returning the new string. Non-matching text is preserved verbatim.
    ///
    /// `template` uses the `$` grammar described at [`escape_template`]; pass
    /// a literal through that function first to substitute it verbatim.
    ///
    /// ```
    /// use respan::Pattern;
    /// let re = Pattern::new(r"\d+").unwrap();
    /// assert_eq!(re.replace_all("a1b22", "[$0]"), "a[1]b[22]");
    /// ```
    ///
    /// [`escape_template`]: crate::escape_template
    #[inline]
    pub fn replace_all(&self, text: &str, template: &str) -> String {
        self.replace_all_in(text, .., template, MatchOptions::default())
    }

    /// Like [`replace_all`](Pattern::replace_all), restricted to `range` of
    /// `text`. Text outside the range is never modified.
    pub fn replace_all_in<R>(
        &self,
        text: &str,
        range: R,
        template: &str,
        options: MatchOptions,
    ) -> String
    where
        R: RangeBounds<usize>,
    {
        self.replace_inner(
            text,
            normalize_bounds(text, range),
            template,
            options,
            usize::MAX,
        )
    }

    /// Replace only the leftmost match.
    #[inline]
    pub fn replace_first(&self, text: &str, template: &str) -> String {
        self.replace_inner(text, 0..text.len(), template, MatchOptions::default(), 1)
    }

    fn replace_inner(
        &self,
        text: &str,
        range: Range<usize>,
        template: &str,
        options: MatchOptions,
        limit: usize,
    ) -> String {
        let subject = Subject::new(text);
        let raw = subject.to_raw(range);
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut replaced = 0;
        for raw_match in engine::find_from(&self.re, subject.units(), raw, options) {
            if replaced == limit {
                break;
            }
            let m = match build_match(&raw_match, &subject) {
                Some(m) => m,
                None => continue,
            };
            out.push_str(&text[last..m.start()]);
            template::expand(template, &m, text, &mut out);
            last = m.end();
            replaced += 1;
        }
        out.push_str(&text[last..]);
        out
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Attempts to compile a string into a pattern.
    #[inline]
    fn from_str(s: &str) -> Result<Self, PatternError> {
        Self::new(s)
    }
}

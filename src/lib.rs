/*!

# respan - regex match results in native string ranges

This crate searches text through a regular-expression engine that addresses
its input in UTF-16 code units, and presents every match and capture as a
range of UTF-8 byte offsets on `char` boundaries - the only offsets that are
safe to slice a Rust `&str` with. The engine (the `regress` crate) is treated
as an opaque collaborator; what lives here is the range translation, the
result model, and a small set of search conveniences on top.

# Example: test if a string contains a match

```rust
use respan::Pattern;
let re = Pattern::new(r"\d{4}").unwrap();
assert!(re.is_match("2020-20-05"));
```

# Example: ranges survive multi-code-unit scalars

Emoji and other astral scalars occupy two UTF-16 code units but four UTF-8
bytes. Ranges returned by this crate always slice correctly:

```rust
use respan::Pattern;
let text = "\u{1f31f} year 2020";
let re = Pattern::new(r"\d{4}").unwrap();
let m = re.first_match(text).unwrap();
assert_eq!(&text[m.range()], "2020");
```

# Example: capture groups keep their shape

Every match carries exactly one capture per group of the pattern. A group
that did not participate is padded with an empty sentinel rather than
omitted, so group indexes never shift:

```rust
use respan::Pattern;
let re = Pattern::new(r"(\+|-)?([0-9]+)").unwrap();
let found = re.matches("-987.0");
assert_eq!(found.len(), 2);
assert_eq!(found.capture_text(0, 0), "-");
// The second number has no sign; its first capture is the empty sentinel.
assert_eq!(found.capture_text(1, 0), "");
assert!(!found[1].capture(0).participated());
```

# Example: substitution

```rust
use respan::Pattern;
let re = Pattern::new(r"(\w+)@\w+\.\w+").unwrap();
let out = re.replace_all("a@b.com, c@d.com", "<$1>");
assert_eq!(out, "<a>, <c>");
```

To substitute a literal string verbatim, escape it first with
[`escape_template`].

# Incremental search

[`Pattern::cursor`] begins a resumable forward search for "find next"
workflows; see [`Cursor`]. Cursors are plain immutable values, so a pattern
can serve several interleaved search sessions at once.

# Concurrency

A [`Pattern`] is immutable once compiled and every operation takes `&self`;
instances may be shared across threads without coordination. Result values
([`Match`], [`Matches`], [`Capture`], [`Cursor`]) are plain data, created per
call and never mutated.

*/

#![warn(clippy::all)]

pub use crate::api::{MatchOptions, Options, Pattern, PatternError};
pub use crate::cursor::Cursor;
pub use crate::model::{Capture, Match, Matches};
pub use crate::template::{escape, escape_template};

mod api;
mod cursor;
mod engine;
mod model;
mod template;
mod translate;

//! Path patterns for addressing nodes inside a document.
//!
//! A path such as `"users.list.1.score"` is split on a single separator byte
//! (default `b'.'`) into [`Segment`]s. Segments made only of ASCII digits are
//! *numeric* and address sequence indices; every other segment is a mapping
//! key. The path consisting of the separator alone addresses the whole
//! document.
//!
//! # Usage
//!
//! ```rust
//! use pathdoc::path::Pattern;
//!
//! let pattern = Pattern::parse("users.list.1", b'.').expect("non-empty path");
//! let kinds: Vec<bool> = pattern.segments().iter().map(|s| s.is_numeric()).collect();
//! assert_eq!(kinds, vec![false, false, true]);
//!
//! assert!(Pattern::parse(".", b'.').expect("root").is_root());
//! assert!(Pattern::parse("", b'.').is_none());
//! ```
//!
//! Lookup lives in [`resolve`], writes in [`mutate`].

use std::fmt;

mod errors;
pub mod mutate;
pub mod resolve;

pub use errors::PathError;
pub use resolve::Mode;

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: u8 = b'.';

/// The character a separator byte splits on.
///
/// Bytes above `0x7f` map to the Latin-1 code point of the same value, so a
/// separator can never cut a UTF-8 sequence in half.
pub fn separator_char(separator: u8) -> char {
    char::from(separator)
}

/// Returns true if `segment` is non-empty and made only of ASCII digits.
///
/// ```rust
/// # use pathdoc::path::is_numeric;
/// assert!(is_numeric("0"));
/// assert!(is_numeric("007"));
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("-1"));
/// assert!(!is_numeric("1a"));
/// ```
pub fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `path` is exactly the separator, the whole-document path.
pub fn is_root_path(path: &str, separator: u8) -> bool {
    let mut chars = path.chars();
    chars.next() == Some(separator_char(separator)) && chars.next().is_none()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Key,
    Index(usize),
    /// All digits, but too large for `usize`
    Overflow,
}

/// One separator-delimited piece of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    raw: &'a str,
    kind: SegmentKind,
}

impl<'a> Segment<'a> {
    /// Classifies a raw segment.
    pub fn new(raw: &'a str) -> Self {
        let kind = if is_numeric(raw) {
            raw.parse()
                .map_or(SegmentKind::Overflow, SegmentKind::Index)
        } else {
            SegmentKind::Key
        };
        Segment { raw, kind }
    }

    /// The segment text exactly as it appeared in the path.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The parsed sequence index, if the segment is numeric and fits `usize`.
    pub fn index(&self) -> Option<usize> {
        match self.kind {
            SegmentKind::Index(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self.kind, SegmentKind::Key)
    }

    /// True for an all-digit segment that does not fit `usize`.
    pub fn is_overflowed(&self) -> bool {
        matches!(self.kind, SegmentKind::Overflow)
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.raw
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// A path split into segments.
///
/// Consecutive separators produce empty segments, which are ordinary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Pattern<'a> {
    /// Splits `path` on `separator`.
    ///
    /// Returns `None` for the empty path. The separator alone yields the
    /// root pattern with no segments.
    pub fn parse(path: &'a str, separator: u8) -> Option<Self> {
        if path.is_empty() {
            return None;
        }

        let segments = if is_root_path(path, separator) {
            Vec::new()
        } else {
            path.split(separator_char(separator))
                .map(Segment::new)
                .collect()
        };

        Some(Pattern {
            source: path,
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True for the whole-document pattern.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&Segment<'a>> {
        self.segments.first()
    }

    /// The original path text.
    pub fn display(&self) -> &'a str {
        self.source
    }
}

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

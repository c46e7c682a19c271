//! Byte ranges into program text.
//!
//! Offsets are `u32`: half the size of a `Range<usize>`, and no program this
//! front end reads comes close to 4 GiB. `end` is exclusive.

use std::fmt;
use std::ops::Range;

/// Where a token or node came from, as `start..end` byte offsets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for trees built by hand rather than parsed.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert lexer offsets; anything past `u32::MAX` pins to `u32::MAX`.
    pub fn from_range(range: Range<usize>) -> Self {
        let narrow = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span::new(narrow(range.start), narrow(range.end))
    }

    /// Zero-width span at `offset`, used for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Indexable range, for slicing the source text.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        (self.start as usize)..(self.end as usize)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// Spans show up in every AST dump; keep them as compact as `Display`.
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

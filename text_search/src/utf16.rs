// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A range expressed as a UTF-16 `location` and `length`.
///
/// This is the shape rich-text hosts built on UTF-16 strings use for their ranges. Convert to
/// and from byte-based [`TextRange`](crate::TextRange)s with
/// [`TextSearch::utf16_range`](crate::TextSearch::utf16_range) and
/// [`TextSearch::text_range`](crate::TextSearch::text_range).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Range {
    /// Offset of the first code unit.
    pub location: usize,
    /// Number of code units.
    pub length: usize,
}

impl Utf16Range {
    /// Creates a range from a location and a length.
    #[inline]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// The offset one past the last code unit.
    #[inline]
    pub const fn end(self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns `true` if the range covers no code units.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `offset` lies inside the range.
    #[inline]
    pub const fn contains(self, offset: usize) -> bool {
        offset >= self.location && offset < self.end()
    }

    /// Returns this range as `location..end`.
    #[inline]
    pub const fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }
}

impl From<Range<usize>> for Utf16Range {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl From<Utf16Range> for Range<usize> {
    #[inline]
    fn from(range: Utf16Range) -> Self {
        range.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::Utf16Range;

    #[test]
    fn end_and_contains() {
        let range = Utf16Range::new(11, 8);
        assert_eq!(range.end(), 19);
        assert!(range.contains(11));
        assert!(range.contains(18));
        assert!(!range.contains(19));
        assert!(!Utf16Range::new(3, 0).contains(3));
    }

    #[test]
    fn converts_from_ranges() {
        assert_eq!(Utf16Range::from(2..5), Utf16Range::new(2, 3));
        assert_eq!(core::ops::Range::from(Utf16Range::new(2, 3)), 2..5);
        assert_eq!(Utf16Range::new(usize::MAX, 4).end(), usize::MAX);
    }
}

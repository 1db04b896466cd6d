// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::grapheme_index::GraphemeIndex;
use crate::{Endpoint, Error};

/// A validated byte range into a text.
///
/// Carries the invariants that positions in a [`TextSearch`](crate::TextSearch) need:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on grapheme cluster boundaries
///
/// A `TextRange` does not record which text it was validated against. Only reuse it with the
/// text it came from.
///
/// ## Example
///
/// ```
/// use text_search::TextSearch;
///
/// let text = TextSearch::new("cafe\u{301} au lait");
/// // The accent combines with the "e" before it, so 4 is inside a cluster.
/// assert!(text.range(0..4).is_err());
/// let cafe = text.range(0..6).unwrap();
/// assert_eq!(&text.as_str()[cafe.as_range()], "cafe\u{301}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the byte offset `index` lies inside the range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range(
    index: &GraphemeIndex,
    text_len: usize,
    range: &Range<usize>,
) -> Result<TextRange, Error> {
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.end > text_len {
        return Err(Error::invalid_bounds(range.start, range.end, text_len));
    }
    for (which, at) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if let Some(cluster) = index.enclosing_cluster(at) {
            return Err(Error::not_on_grapheme_boundary(
                range.start,
                range.end,
                text_len,
                which,
                at,
                cluster,
            ));
        }
    }
    Ok(TextRange::new_unchecked(range.start, range.end))
}

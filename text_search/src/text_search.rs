// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::grapheme_index::GraphemeIndex;
use crate::text_range::validate_range;
use crate::{Error, Matches, SearchMatch, SearchOptions, SearchPattern, TextRange, Utf16Range};

/// A text prepared for grapheme-aware searching.
///
/// `TextSearch` owns its text together with the byte and UTF-16 offsets of every grapheme
/// cluster boundary. Positions are byte offsets on cluster boundaries ([`TextRange`]); UTF-16
/// ranges ([`Utf16Range`]) are produced and consumed for interop with UTF-16 based hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSearch {
    text: String,
    index: GraphemeIndex,
}

impl TextSearch {
    /// Prepares `text` for searching.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = GraphemeIndex::new(&text);
        Self { text, index }
    }

    /// Borrow the text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the text, dropping the boundary tables.
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the text in UTF-16 code units.
    #[inline]
    pub fn utf16_len(&self) -> usize {
        self.index.utf16_len()
    }

    /// Number of grapheme clusters (user-perceived characters) in the text.
    #[inline]
    pub fn grapheme_count(&self) -> usize {
        self.index.cluster_count()
    }

    /// The range covering the whole text.
    #[inline]
    pub fn full_range(&self) -> TextRange {
        TextRange::new_unchecked(0, self.text.len())
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        validate_range(&self.index, self.text.len(), &range)
    }

    /// Converts a byte offset on a cluster boundary into a count of clusters from the start.
    ///
    /// Returns `None` if `byte` is inside a cluster or past the end.
    #[inline]
    pub fn grapheme_offset(&self, byte: usize) -> Option<usize> {
        self.index.boundary_of_byte(byte)
    }

    /// The byte offset reached by advancing `graphemes` clusters from the start.
    ///
    /// Returns `None` if the text has fewer clusters.
    #[inline]
    pub fn byte_offset(&self, graphemes: usize) -> Option<usize> {
        self.index.byte_at(graphemes)
    }

    /// The UTF-16 offset of a byte offset.
    ///
    /// Offsets inside a cluster resolve to the start of that cluster; offsets past the end resolve
    /// to the UTF-16 length.
    pub fn utf16_offset(&self, byte: usize) -> usize {
        self.index
            .utf16_at(self.index.floor_byte(byte))
            .unwrap_or_else(|| self.utf16_len())
    }

    /// Translates a range into UTF-16 units.
    ///
    /// `None` stands for the whole text.
    ///
    /// ```
    /// use text_search::{TextSearch, Utf16Range};
    ///
    /// let text = TextSearch::new("🇯🇵 flag");
    /// assert_eq!(text.utf16_range(None), Utf16Range::new(0, 9));
    /// let flag = text.range(9..13).unwrap();
    /// assert_eq!(text.utf16_range(Some(flag)), Utf16Range::new(5, 4));
    /// ```
    pub fn utf16_range(&self, range: Option<TextRange>) -> Utf16Range {
        let range = range.unwrap_or_else(|| self.full_range());
        let start = self.utf16_offset(range.start());
        let end = self.utf16_offset(range.end()).max(start);
        Utf16Range::new(start, end - start)
    }

    /// Translates a UTF-16 range into a byte range on cluster boundaries.
    ///
    /// `None` stands for the whole text. A location past the end of the text falls back to the
    /// start of the text, and the end of the range is clamped to the end of the text. Offsets that
    /// land inside a cluster are widened to cover the whole cluster.
    ///
    /// ```
    /// use text_search::{TextSearch, Utf16Range};
    ///
    /// let text = TextSearch::new("Swift is a powerful language");
    /// let range = text.text_range(Some(Utf16Range::new(11, 8)));
    /// assert_eq!(&text.as_str()[range.as_range()], "powerful");
    ///
    /// let clamped = text.text_range(Some(Utf16Range::new(20, 100)));
    /// assert_eq!(&text.as_str()[clamped.as_range()], "language");
    /// ```
    pub fn text_range(&self, range: Option<Utf16Range>) -> TextRange {
        let Some(range) = range else {
            return self.full_range();
        };
        let utf16_len = self.utf16_len();
        let (lower, end) = if range.location > utf16_len {
            (0, range.length)
        } else {
            (self.index.floor_utf16(range.location), range.end())
        };
        let upper = self.index.ceil_utf16(end.min(utf16_len)).max(lower);
        let start = self.index.byte_at(lower).unwrap_or(0);
        let end = self.index.byte_at(upper).unwrap_or(self.text.len());
        TextRange::new_unchecked(start, end)
    }

    /// Iterates over the matches of `pattern` in the whole text.
    #[inline]
    pub fn matches<'a>(&'a self, pattern: &'a SearchPattern) -> Matches<'a> {
        Matches::new(self, pattern, self.full_range())
    }

    /// Iterates over the matches of `pattern` inside `range`.
    #[inline]
    pub fn matches_in<'a>(&'a self, pattern: &'a SearchPattern, range: TextRange) -> Matches<'a> {
        Matches::new(self, pattern, range)
    }

    /// Calls `f` for every match of `pattern` and returns the number of matches.
    ///
    /// ```
    /// use text_search::{SearchOptions, TextSearch};
    ///
    /// let text = TextSearch::new("Swift, swift, SWIFT");
    /// let mut seen = Vec::new();
    /// let count = text
    ///     .enumerate_matches("swift", SearchOptions::RELAXED, |found| {
    ///         seen.push(found.range().start());
    ///     })
    ///     .unwrap();
    /// assert_eq!(count, 3);
    /// // `RELAXED` walks backwards.
    /// assert_eq!(seen, [14, 7, 0]);
    /// ```
    pub fn enumerate_matches(
        &self,
        pattern: &str,
        options: SearchOptions,
        mut f: impl FnMut(SearchMatch<'_>),
    ) -> Result<usize, Error> {
        let pattern = SearchPattern::new(pattern, options)?;
        let mut count = 0;
        for found in self.matches(&pattern) {
            f(found);
            count += 1;
        }
        Ok(count)
    }

    /// Returns a copy of the text with every match of `pattern` replaced by the output of `f`.
    ///
    /// Matches are visited from the end of the text towards its start, whatever the direction in
    /// `options`, so each replacement leaves the ranges of the matches still to be visited intact.
    /// `f` sees every match with its range in the original text.
    ///
    /// ```
    /// use text_search::{SearchOptions, TextSearch};
    ///
    /// let text = TextSearch::new("Swift code is Swift");
    /// let replaced = text
    ///     .replace_matches("swift", SearchOptions::CASE_INSENSITIVE, |_| "Objective-C")
    ///     .unwrap();
    /// assert_eq!(replaced.as_str(), "Objective-C code is Objective-C");
    /// assert_eq!(text.as_str(), "Swift code is Swift");
    /// ```
    pub fn replace_matches<F, R>(
        &self,
        pattern: &str,
        options: SearchOptions,
        mut f: F,
    ) -> Result<Self, Error>
    where
        F: FnMut(&SearchMatch<'_>) -> R,
        R: AsRef<str>,
    {
        let pattern = SearchPattern::new(pattern, options | SearchOptions::BACKWARDS)?;
        let mut output = self.text.clone();
        let mut count = 0_usize;
        for found in self.matches(&pattern) {
            let replacement = f(&found);
            output.replace_range(found.range().as_range(), replacement.as_ref());
            count += 1;
        }
        log::debug!("replaced {count} matches of {:?}", pattern.as_str());
        Ok(Self::new(output))
    }

    pub(crate) fn grapheme_index(&self) -> &GraphemeIndex {
        &self.index
    }
}

impl From<String> for TextSearch {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextSearch {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for TextSearch {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TextSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

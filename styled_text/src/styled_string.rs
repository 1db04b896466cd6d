// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use text_search::{Error, TextRange, TextSearch, Utf16Range};
use text_style::{Attribute, AttributeKey};

use crate::runs::Runs;

/// A text with style [`Attribute`]s applied to ranges of it.
///
/// Attributes are stored as spans in the order they were added. Where spans of the same
/// [`AttributeKey`] overlap, the span added last wins. Ranges are byte ranges on grapheme cluster
/// boundaries; the text itself never changes.
///
/// ```
/// use styled_text::StyledString;
/// use text_style::{Attribute, AttributeKey, Color};
///
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// let mut text = StyledString::new("Hello world");
/// text.add_attribute_bytes(6..11, Attribute::ForegroundColor(red))
///     .unwrap();
///
/// assert_eq!(text.attribute(AttributeKey::ForegroundColor, 0), None);
/// assert_eq!(
///     text.attribute(AttributeKey::ForegroundColor, 6),
///     Some(&Attribute::ForegroundColor(red))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledString {
    search: TextSearch,
    pub(crate) spans: Vec<(TextRange, Attribute)>,
}

impl StyledString {
    /// Creates a string with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            search: TextSearch::new(text),
            spans: Vec::new(),
        }
    }

    /// Borrow the text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.search.as_str()
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.search.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
    }

    /// Length of the text in UTF-16 code units.
    #[inline]
    pub fn utf16_len(&self) -> usize {
        self.search.utf16_len()
    }

    /// The text prepared for searching and range translation.
    #[inline]
    pub fn search(&self) -> &TextSearch {
        &self.search
    }

    /// Validates a byte `range` against the text.
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        self.search.range(range)
    }

    /// Applies `attribute` to `range`.
    ///
    /// `range` must come from this string. Empty ranges are ignored.
    pub fn add_attribute(&mut self, range: TextRange, attribute: Attribute) {
        if range.is_empty() {
            return;
        }
        log::trace!("{:?} on {:?}", attribute.key(), range.as_range());
        self.spans.push((range, attribute));
    }

    /// Applies `attribute` to a byte `range`, validating it first.
    pub fn add_attribute_bytes(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<(), Error> {
        let range = self.search.range(range)?;
        self.add_attribute(range, attribute);
        Ok(())
    }

    /// Applies `attribute` to a UTF-16 `range`.
    ///
    /// The range is translated with [`TextSearch::text_range`], so it is clamped to the text and
    /// widened to whole grapheme clusters.
    pub fn add_attribute_utf16(&mut self, range: Utf16Range, attribute: Attribute) {
        let range = self.search.text_range(Some(range));
        self.add_attribute(range, attribute);
    }

    /// The effective attribute for `key` at byte offset `at`.
    pub fn attribute(&self, key: AttributeKey, at: usize) -> Option<&Attribute> {
        self.spans
            .iter()
            .rev()
            .find(|(range, attribute)| attribute.key() == key && range.contains(at))
            .map(|(_, attribute)| attribute)
    }

    /// The effective attribute for `key` at `at`, together with the longest range around `at` over
    /// which the effective value for `key` is equal to it.
    ///
    /// ```
    /// use styled_text::StyledString;
    /// use text_style::{Attribute, AttributeKey};
    ///
    /// let mut text = StyledString::new("one two three");
    /// text.add_attribute_bytes(0..7, Attribute::Kern(1.0)).unwrap();
    /// text.add_attribute_bytes(4..13, Attribute::Kern(1.0)).unwrap();
    /// let (_, range) = text.attribute_with_range(AttributeKey::Kern, 2).unwrap();
    /// assert_eq!(range.as_range(), 0..13);
    /// ```
    pub fn attribute_with_range(
        &self,
        key: AttributeKey,
        at: usize,
    ) -> Option<(&Attribute, TextRange)> {
        let value = self.attribute(key, at)?;
        let mut boundaries: Vec<usize> = self
            .spans
            .iter()
            .filter(|(_, attribute)| attribute.key() == key)
            .flat_map(|(range, _)| [range.start(), range.end()])
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        // `at` lies inside a span of `key`, so it has a boundary on each side.
        let upper = boundaries.partition_point(|&b| b <= at);
        let mut lo = upper.saturating_sub(1);
        let mut hi = upper.min(boundaries.len().saturating_sub(1));
        while lo > 0 && self.attribute(key, boundaries[lo - 1]) == Some(value) {
            lo -= 1;
        }
        while hi + 1 < boundaries.len() && self.attribute(key, boundaries[hi]) == Some(value) {
            hi += 1;
        }
        Some((value, TextRange::new_unchecked(boundaries[lo], boundaries[hi])))
    }

    /// The effective attribute for `key` at a UTF-16 offset.
    ///
    /// Offsets inside a grapheme cluster resolve to the start of that cluster. Returns `None` at
    /// or past the end of the text.
    pub fn attribute_at_utf16(&self, key: AttributeKey, utf16_offset: usize) -> Option<&Attribute> {
        if utf16_offset >= self.utf16_len() {
            return None;
        }
        let at = self
            .search
            .text_range(Some(Utf16Range::new(utf16_offset, 0)))
            .start();
        self.attribute(key, at)
    }

    /// The effective attribute of every key at `at`, ordered by key.
    pub fn attributes_at(&self, at: usize) -> impl Iterator<Item = &Attribute> + '_ {
        AttributeKey::ALL
            .into_iter()
            .filter_map(move |key| self.attribute(key, at))
    }

    /// Iterates over the spans in the order they were added.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (TextRange, &Attribute)> {
        self.spans.iter().map(|(range, attribute)| (*range, attribute))
    }

    /// Contiguous runs covering the text, each with its effective attributes.
    ///
    /// Adjacent runs with equal attributes are merged.
    #[inline]
    pub fn runs(&self) -> Runs<'_> {
        Runs::new(self)
    }

    /// Returns the number of spans applied.
    #[inline]
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Removes all spans, retaining allocated storage.
    #[inline]
    pub fn clear_attributes(&mut self) {
        self.spans.clear();
    }
}

impl From<&str> for StyledString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for StyledString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

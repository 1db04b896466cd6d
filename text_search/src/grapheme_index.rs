// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapheme cluster boundaries of a text, in both byte and UTF-16 units.

use core::ops::Range;

use icu_segmenter::GraphemeClusterSegmenter;

/// Boundary table for a text.
///
/// `bytes[i]` and `utf16[i]` are the byte and UTF-16 offsets of the `i`th cluster boundary. Both
/// tables start at `0`, end at the text length and are strictly increasing, so there is always one
/// more boundary than there are clusters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GraphemeIndex {
    bytes: Vec<usize>,
    utf16: Vec<usize>,
}

impl GraphemeIndex {
    pub(crate) fn new(text: &str) -> Self {
        let segmenter = GraphemeClusterSegmenter::new();
        let mut bytes: Vec<usize> = Vec::with_capacity(text.len() + 1);
        bytes.push(0);
        // The segmenter reports both ends of the text; keep the table strictly increasing.
        for boundary in segmenter.segment_str(text) {
            if boundary > *bytes.last().unwrap_or(&0) {
                bytes.push(boundary);
            }
        }
        if *bytes.last().unwrap_or(&0) != text.len() {
            bytes.push(text.len());
        }

        let mut utf16 = Vec::with_capacity(bytes.len());
        let mut units = 0;
        utf16.push(0);
        for pair in bytes.windows(2) {
            units += text[pair[0]..pair[1]]
                .chars()
                .map(char::len_utf16)
                .sum::<usize>();
            utf16.push(units);
        }

        Self { bytes, utf16 }
    }

    /// Number of grapheme clusters.
    pub(crate) fn cluster_count(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Length of the text in UTF-16 code units.
    pub(crate) fn utf16_len(&self) -> usize {
        self.utf16.last().copied().unwrap_or(0)
    }

    /// Byte range of the `cluster`th cluster.
    pub(crate) fn cluster(&self, cluster: usize) -> Range<usize> {
        self.bytes[cluster]..self.bytes[cluster + 1]
    }

    /// Boundary ordinal of a byte offset, if it lies on a boundary.
    pub(crate) fn boundary_of_byte(&self, byte: usize) -> Option<usize> {
        self.bytes.binary_search(&byte).ok()
    }

    /// Byte offset of the `boundary`th boundary.
    pub(crate) fn byte_at(&self, boundary: usize) -> Option<usize> {
        self.bytes.get(boundary).copied()
    }

    /// UTF-16 offset of the `boundary`th boundary.
    pub(crate) fn utf16_at(&self, boundary: usize) -> Option<usize> {
        self.utf16.get(boundary).copied()
    }

    /// Byte range of the cluster containing `byte`.
    ///
    /// Returns `None` when `byte` is a boundary or past the end of the text.
    pub(crate) fn enclosing_cluster(&self, byte: usize) -> Option<Range<usize>> {
        match self.bytes.binary_search(&byte) {
            Ok(_) => None,
            Err(next) if next < self.bytes.len() => Some(self.bytes[next - 1]..self.bytes[next]),
            Err(_) => None,
        }
    }

    /// The last boundary at or before `byte`, as a boundary ordinal.
    pub(crate) fn floor_byte(&self, byte: usize) -> usize {
        match self.bytes.binary_search(&byte) {
            Ok(boundary) => boundary,
            Err(next) => next - 1,
        }
    }

    /// The last boundary at or before the UTF-16 offset `unit`, as a boundary ordinal.
    pub(crate) fn floor_utf16(&self, unit: usize) -> usize {
        match self.utf16.binary_search(&unit) {
            Ok(boundary) => boundary,
            Err(next) => next - 1,
        }
    }

    /// The first boundary at or after the UTF-16 offset `unit`, as a boundary ordinal.
    ///
    /// Offsets past the end resolve to the final boundary.
    pub(crate) fn ceil_utf16(&self, unit: usize) -> usize {
        match self.utf16.binary_search(&unit) {
            Ok(boundary) => boundary,
            Err(next) => next.min(self.utf16.len() - 1),
        }
    }

    /// The first boundary at or after `byte`, as a boundary ordinal.
    pub(crate) fn ceil_byte(&self, byte: usize) -> usize {
        match self.bytes.binary_search(&byte) {
            Ok(boundary) => boundary,
            Err(next) => next.min(self.bytes.len() - 1),
        }
    }

    /// Moves `byte` back to the start of its cluster.
    pub(crate) fn snap_down(&self, byte: usize) -> usize {
        self.bytes[self.floor_byte(byte)]
    }

    /// Moves `byte` forward to the end of its cluster, clamped to the text length.
    pub(crate) fn snap_up(&self, byte: usize) -> usize {
        self.bytes[self.ceil_byte(byte)]
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_search::{TextRange, Utf16Range};
use text_style::{Attribute, AttributeKey};

use crate::StyledString;

const KEY_COUNT: usize = AttributeKey::ALL.len();

/// A contiguous range of text with its effective attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun<'a> {
    /// The byte range in the text.
    pub range: TextRange,
    /// The same range in UTF-16 code units.
    pub utf16: Utf16Range,
    /// The effective attribute of every key set on this range, ordered by key.
    pub attributes: Vec<&'a Attribute>,
}

impl<'a> StyleRun<'a> {
    /// The effective attribute for `key` on this run.
    pub fn attribute(&self, key: AttributeKey) -> Option<&'a Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key() == key)
            .copied()
    }
}

/// Per-segment runs, split at every span boundary.
#[derive(Clone, Debug)]
struct Segments<'a> {
    styled: &'a StyledString,
    boundaries: Vec<usize>,
    // Span ids sorted by the boundary index where they start, and where they end.
    starts: Vec<(usize, usize)>,
    ends: Vec<(usize, usize)>,
    next_start: usize,
    next_end: usize,
    // Ids of the spans covering the current segment, in the order they were added.
    active: Vec<usize>,
    index: usize,
}

impl<'a> Segments<'a> {
    fn new(styled: &'a StyledString) -> Self {
        let mut boundaries = Vec::with_capacity(2 + styled.spans_len() * 2);
        boundaries.push(0);
        boundaries.push(styled.len());
        for (range, _) in styled.spans() {
            boundaries.push(range.start());
            boundaries.push(range.end());
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut starts = Vec::with_capacity(styled.spans_len());
        let mut ends = Vec::with_capacity(styled.spans_len());
        for (id, (range, _)) in styled.spans().enumerate() {
            let (Ok(start), Ok(end)) = (
                boundaries.binary_search(&range.start()),
                boundaries.binary_search(&range.end()),
            ) else {
                continue;
            };
            starts.push((start, id));
            ends.push((end, id));
        }
        starts.sort_unstable();
        ends.sort_unstable();

        Self {
            styled,
            boundaries,
            starts,
            ends,
            next_start: 0,
            next_end: 0,
            active: Vec::new(),
            index: 0,
        }
    }

    fn update_active_for_boundary(&mut self, boundary: usize) {
        while let Some(&(at, id)) = self.ends.get(self.next_end) {
            if at > boundary {
                break;
            }
            if let Ok(ix) = self.active.binary_search(&id) {
                self.active.remove(ix);
            }
            self.next_end += 1;
        }
        while let Some(&(at, id)) = self.starts.get(self.next_start) {
            if at > boundary {
                break;
            }
            if let Err(ix) = self.active.binary_search(&id) {
                self.active.insert(ix, id);
            }
            self.next_start += 1;
        }
    }

    fn attributes_for_current_segment(&self) -> Vec<&'a Attribute> {
        let spans = &self.styled.spans;
        let mut picked: [Option<&'a Attribute>; KEY_COUNT] = [None; KEY_COUNT];
        let mut remaining = KEY_COUNT;
        for &id in self.active.iter().rev() {
            let attribute = &spans[id].1;
            let slot = &mut picked[attribute.key() as usize];
            if slot.is_none() {
                *slot = Some(attribute);
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }
        picked.into_iter().flatten().collect()
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = StyleRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index + 1 < self.boundaries.len() {
            self.update_active_for_boundary(self.index);
            let start = self.boundaries[self.index];
            let end = self.boundaries[self.index + 1];
            self.index += 1;
            if start == end {
                continue;
            }
            return Some(StyleRun {
                range: TextRange::new_unchecked(start, end),
                utf16: Utf16Range::default(),
                attributes: self.attributes_for_current_segment(),
            });
        }
        None
    }
}

/// An iterator over the attribute runs of a [`StyledString`].
///
/// Created by [`StyledString::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    inner: Segments<'a>,
    pending: Option<StyleRun<'a>>,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(styled: &'a StyledString) -> Self {
        Self {
            inner: Segments::new(styled),
            pending: None,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = StyleRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        while let Some(next_run) = self.inner.next() {
            if next_run.range.start() == run.range.end() && next_run.attributes == run.attributes {
                run.range = TextRange::new_unchecked(run.range.start(), next_run.range.end());
                continue;
            }
            self.pending = Some(next_run);
            break;
        }

        run.utf16 = self.inner.styled.search().utf16_range(Some(run.range));
        Some(run)
    }
}

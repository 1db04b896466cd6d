// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-overlapping match iteration.

use regex::Regex;

use crate::fold::FoldedClusters;
use crate::grapheme_index::GraphemeIndex;
use crate::pattern::PatternKind;
use crate::{SearchOptions, SearchPattern, TextRange, TextSearch};

/// A single match produced by [`Matches`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchMatch<'a> {
    pattern: &'a str,
    text: &'a str,
    range: TextRange,
}

impl<'a> SearchMatch<'a> {
    /// The pattern that produced this match, as written by the caller.
    #[inline]
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// The matched slice of the searched text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Where the match lies in the searched text.
    #[inline]
    pub fn range(&self) -> TextRange {
        self.range
    }
}

/// Iterator over the non-overlapping matches of a [`SearchPattern`] in a [`TextSearch`].
///
/// Forward iteration resumes after the end of each match. With [`SearchOptions::BACKWARDS`] the
/// last match in the remaining range is produced first, and the range then shrinks to end where
/// that match started.
///
/// Created by [`TextSearch::matches`] and [`TextSearch::matches_in`].
#[derive(Debug)]
pub struct Matches<'a> {
    text: &'a str,
    index: &'a GraphemeIndex,
    pattern: &'a SearchPattern,
    state: State<'a>,
}

#[derive(Debug)]
enum State<'a> {
    Literal {
        haystack: FoldedClusters,
        needle: &'a FoldedClusters,
        // Boundary ordinals of the part of the range not yet searched.
        lo: usize,
        hi: usize,
        backwards: bool,
    },
    Regex {
        regex: &'a Regex,
        range: TextRange,
        // Offset into the range slice where the next search starts.
        pos: usize,
    },
    Collected(Vec<TextRange>),
    Done,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(
        search: &'a TextSearch,
        pattern: &'a SearchPattern,
        range: TextRange,
    ) -> Self {
        let text = search.as_str();
        let index = search.grapheme_index();
        let backwards = pattern.options().contains(SearchOptions::BACKWARDS);
        let end = index.snap_down(range.end());
        let range = TextRange::new_unchecked(index.snap_down(range.start()).min(end), end);
        let state = match pattern.kind() {
            PatternKind::Literal(needle) if needle.is_empty() => State::Done,
            PatternKind::Literal(needle) => State::Literal {
                haystack: FoldedClusters::new(text, index, pattern.options()),
                needle,
                lo: index.floor_byte(range.start()),
                hi: index.floor_byte(range.end()),
                backwards,
            },
            PatternKind::Regex(regex) if backwards => {
                let mut pos = 0;
                let mut found = Vec::new();
                while let Some(hit) = next_regex(text, index, regex, range, &mut pos) {
                    found.push(hit);
                }
                State::Collected(found)
            }
            PatternKind::Regex(regex) => State::Regex {
                regex,
                range,
                pos: 0,
            },
        };
        Self {
            text,
            index,
            pattern,
            state,
        }
    }

    fn make_match(&self, range: TextRange) -> SearchMatch<'a> {
        log::trace!("{:?} matched at {:?}", self.pattern.as_str(), range.as_range());
        SearchMatch {
            pattern: self.pattern.as_str(),
            text: &self.text[range.as_range()],
            range,
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = SearchMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let range = match &mut self.state {
            State::Done => None,
            State::Literal {
                haystack,
                needle,
                lo,
                hi,
                backwards,
            } => next_literal(self.index, haystack, needle, lo, hi, *backwards),
            State::Regex { regex, range, pos } => {
                next_regex(self.text, self.index, regex, *range, pos)
            }
            State::Collected(found) => found.pop(),
        };
        match range {
            Some(range) => Some(self.make_match(range)),
            None => {
                self.state = State::Done;
                None
            }
        }
    }
}

fn next_literal(
    index: &GraphemeIndex,
    haystack: &FoldedClusters,
    needle: &FoldedClusters,
    lo: &mut usize,
    hi: &mut usize,
    backwards: bool,
) -> Option<TextRange> {
    let width = needle.len();
    if *lo + width > *hi {
        return None;
    }
    let last_start = *hi - width;
    let found = if backwards {
        (*lo..=last_start)
            .rev()
            .find(|&at| haystack.matches_at(at, needle))
    } else {
        (*lo..=last_start).find(|&at| haystack.matches_at(at, needle))
    };
    let Some(at) = found else {
        *lo = *hi;
        return None;
    };
    if backwards {
        *hi = at;
    } else {
        *lo = at + width;
    }
    let start = index.byte_at(at)?;
    let end = index.byte_at(at + width)?;
    Some(TextRange::new_unchecked(start, end))
}

/// Finds the next non-empty match in `range` at or after `pos` and advances `pos` past it.
///
/// The haystack is the slice of `range` alone, so anchors such as `^`, `$` and `\b` see the range
/// bounds as the text bounds. `pos` is relative to the start of `range`. Matches are widened to
/// whole grapheme clusters.
fn next_regex(
    text: &str,
    index: &GraphemeIndex,
    regex: &Regex,
    range: TextRange,
    pos: &mut usize,
) -> Option<TextRange> {
    let haystack = &text[range.as_range()];
    let base = range.start();
    while *pos <= haystack.len() {
        let found = regex.find_at(haystack, *pos)?;
        if found.is_empty() {
            // Step over one character so the search makes progress.
            let step = haystack[found.end()..].chars().next()?.len_utf8();
            *pos = found.end() + step;
            continue;
        }
        let start = index.snap_down(base + found.start());
        let stop = index.snap_up(base + found.end());
        *pos = stop - base;
        return Some(TextRange::new_unchecked(start, stop));
    }
    None
}

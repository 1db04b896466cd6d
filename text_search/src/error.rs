// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Rich error type for search and range operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the context needed to report it: the attempted
/// range and text length for range errors, or the pattern and compiler message for pattern errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    detail: Detail,
}

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    Range {
        start: usize,
        end: usize,
        len: usize,
        boundary: Option<BoundaryInfo>,
    },
    Pattern {
        pattern: Box<str>,
        message: Box<str>,
    },
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range provided by the caller, for range errors.
    pub fn range(&self) -> Option<Range<usize>> {
        match &self.detail {
            Detail::Range { start, end, .. } => Some(*start..*end),
            Detail::Pattern { .. } => None,
        }
    }

    /// The length in bytes of the text at the time of a range error.
    pub fn text_len(&self) -> Option<usize> {
        match &self.detail {
            Detail::Range { len, .. } => Some(*len),
            Detail::Pattern { .. } => None,
        }
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        match &self.detail {
            Detail::Range { boundary, .. } => *boundary,
            Detail::Pattern { .. } => None,
        }
    }

    /// The pattern that failed to compile, for [`ErrorKind::InvalidPattern`].
    pub fn pattern(&self) -> Option<&str> {
        match &self.detail {
            Detail::Pattern { pattern, .. } => Some(pattern),
            Detail::Range { .. } => None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::range_error(ErrorKind::InvalidBounds, start, end, len, None)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::range_error(ErrorKind::InvalidRange, start, end, len, None)
    }

    pub(crate) fn not_on_grapheme_boundary(
        start: usize,
        end: usize,
        len: usize,
        which: Endpoint,
        index: usize,
        cluster: Range<usize>,
    ) -> Self {
        Self::range_error(
            ErrorKind::NotOnGraphemeBoundary,
            start,
            end,
            len,
            Some(BoundaryInfo {
                which,
                index,
                cluster_start: cluster.start,
                cluster_end: cluster.end,
            }),
        )
    }

    pub(crate) fn invalid_pattern(pattern: &str, message: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidPattern,
            detail: Detail::Pattern {
                pattern: pattern.into(),
                message: message.into(),
            },
        }
    }

    fn range_error(
        kind: ErrorKind,
        start: usize,
        end: usize,
        len: usize,
        boundary: Option<BoundaryInfo>,
    ) -> Self {
        Self {
            kind,
            detail: Detail::Range {
                start,
                end,
                len,
                boundary,
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.detail {
            Detail::Pattern { pattern, message } => {
                write!(f, "invalid pattern {pattern:?}: {message}")
            }
            Detail::Range {
                start,
                end,
                len,
                boundary,
            } => match (self.kind, boundary) {
                (ErrorKind::InvalidRange, _) => {
                    write!(f, "invalid range {start}..{end}: start > end")
                }
                (ErrorKind::NotOnGraphemeBoundary, Some(b)) => {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {start}..{end}: {which} index {} not on grapheme boundary (cluster {}..{})",
                        b.index, b.cluster_start, b.cluster_end
                    )
                }
                (ErrorKind::NotOnGraphemeBoundary, None) => {
                    write!(f, "range {start}..{end} not on grapheme boundary")
                }
                _ => write!(f, "range {start}..{end} out of bounds for len {len}"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` fell inside a grapheme cluster.
    NotOnGraphemeBoundary,

    /// A regular expression failed to compile.
    InvalidPattern,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a grapheme cluster boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnGraphemeBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing grapheme cluster.
    pub cluster_start: usize,

    /// The end byte index (exclusive) of the enclosing grapheme cluster.
    pub cluster_end: usize,
}

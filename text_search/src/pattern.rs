// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use regex::{Regex, RegexBuilder};

use crate::fold::FoldedClusters;
use crate::grapheme_index::GraphemeIndex;
use crate::{Error, SearchOptions};

/// A pattern prepared for searching.
///
/// Literal patterns are split into grapheme clusters and folded according to their
/// [`SearchOptions`] once; regular expressions are compiled once. The same pattern can then be
/// searched for in any number of texts.
///
/// ```
/// use text_search::{SearchOptions, SearchPattern};
///
/// let literal = SearchPattern::new("swift", SearchOptions::CASE_INSENSITIVE).unwrap();
/// assert!(!literal.is_regex());
///
/// let regex = SearchPattern::new(r"swift\s+i", SearchOptions::REGULAR_EXPRESSION).unwrap();
/// assert!(regex.is_regex());
///
/// assert!(SearchPattern::new("(", SearchOptions::REGULAR_EXPRESSION).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct SearchPattern {
    source: Box<str>,
    options: SearchOptions,
    kind: PatternKind,
}

#[derive(Clone, Debug)]
pub(crate) enum PatternKind {
    Literal(FoldedClusters),
    Regex(Regex),
}

impl SearchPattern {
    /// Prepares `pattern` for searching with `options`.
    ///
    /// With [`SearchOptions::REGULAR_EXPRESSION`] the pattern is compiled as a regular expression
    /// and an invalid expression is reported as
    /// [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern). Literal patterns never
    /// fail.
    pub fn new(pattern: &str, options: SearchOptions) -> Result<Self, Error> {
        if !options.contains(SearchOptions::REGULAR_EXPRESSION) {
            return Ok(Self::literal(pattern, options));
        }
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.contains(SearchOptions::CASE_INSENSITIVE))
            .build()
            .map_err(|err| {
                log::debug!("rejecting pattern {pattern:?}: {err}");
                Error::invalid_pattern(pattern, &err.to_string())
            })?;
        log::debug!("compiled pattern {pattern:?} with {options:?}");
        Ok(Self {
            source: pattern.into(),
            options,
            kind: PatternKind::Regex(regex),
        })
    }

    /// Prepares `pattern` as a literal, ignoring [`SearchOptions::REGULAR_EXPRESSION`].
    pub fn literal(pattern: &str, options: SearchOptions) -> Self {
        let options = options.difference(SearchOptions::REGULAR_EXPRESSION);
        let index = GraphemeIndex::new(pattern);
        Self {
            source: pattern.into(),
            options,
            kind: PatternKind::Literal(FoldedClusters::new(pattern, &index, options)),
        }
    }

    /// The pattern as written by the caller.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The options the pattern was prepared with.
    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Returns `true` if the pattern is a regular expression.
    #[inline]
    pub fn is_regex(&self) -> bool {
        matches!(self.kind, PatternKind::Regex(_))
    }

    /// Returns a copy of this pattern with [`SearchOptions::BACKWARDS`] set to `backwards`.
    #[must_use]
    pub fn with_backwards(&self, backwards: bool) -> Self {
        let mut pattern = self.clone();
        pattern.options = if backwards {
            pattern.options | SearchOptions::BACKWARDS
        } else {
            pattern.options.difference(SearchOptions::BACKWARDS)
        };
        pattern
    }

    pub(crate) fn kind(&self) -> &PatternKind {
        &self.kind
    }
}

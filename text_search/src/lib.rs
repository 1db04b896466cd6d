// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapheme-aware text search with UTF-16 range translation.
//!
//! - [`TextSearch`] owns a text and knows where its grapheme clusters start and end, both in
//!   bytes and in UTF-16 code units.
//! - [`TextRange`] is a byte range validated to lie on cluster boundaries.
//! - [`Utf16Range`] is the `location`/`length` shape used by UTF-16 based rich-text hosts.
//! - [`SearchPattern`] is a literal or regular expression prepared with [`SearchOptions`].
//! - [`Matches`] walks the non-overlapping matches of a pattern, forwards or backwards.
//!
//! ## Matching
//!
//! Literal patterns are compared one grapheme cluster at a time, so a match never splits a
//! user-perceived character. Clusters are compared in canonically decomposed form;
//! [`SearchOptions::DIACRITIC_INSENSITIVE`] drops nonspacing marks and
//! [`SearchOptions::CASE_INSENSITIVE`] lowercases before comparing. An empty pattern never matches.
//!
//! Regular expressions use the [`regex`] syntax and honor [`SearchOptions::CASE_INSENSITIVE`].
//! Empty matches are skipped, and matches that end inside a cluster are widened to whole clusters.
//!
//! ## Example
//!
//! ```
//! use text_search::{SearchOptions, SearchPattern, TextSearch, Utf16Range};
//!
//! let text = TextSearch::new("Crème brûlée, creme brulee");
//! let pattern = SearchPattern::new(
//!     "creme",
//!     SearchOptions::CASE_INSENSITIVE | SearchOptions::DIACRITIC_INSENSITIVE,
//! )
//! .unwrap();
//!
//! let found: Vec<_> = text.matches(&pattern).map(|m| m.as_str()).collect();
//! assert_eq!(found, ["Crème", "creme"]);
//!
//! let second = text.matches(&pattern).nth(1).unwrap();
//! assert_eq!(text.utf16_range(Some(second.range())), Utf16Range::new(14, 5));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod fold;
mod grapheme_index;
mod matches;
mod options;
mod pattern;
mod text_range;
mod text_search;
mod utf16;

#[cfg(test)]
mod tests;

pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::matches::{Matches, SearchMatch};
pub use crate::options::SearchOptions;
pub use crate::pattern::SearchPattern;
pub use crate::text_range::TextRange;
pub use crate::text_search::TextSearch;
pub use crate::utf16::Utf16Range;

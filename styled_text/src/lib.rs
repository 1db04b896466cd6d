// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern-driven styling of rich text, built on [`text_search`] and [`text_style`].
//!
//! - [`StyledString`] is a text with [`Attribute`](text_style::Attribute) spans on grapheme
//!   cluster aligned byte ranges, queryable by byte or UTF-16 offset.
//! - [`Match`] and [`Selection`] pick the ranges to style: the whole text, literal matches (which
//!   ignore diacritics, and optionally case), or regular expression matches.
//! - [`TextStyler`] chains styling calls, one per [`Modifier`](text_style::Modifier), and hands
//!   back the [`StyledString`].
//!
//! ## Overlaps
//!
//! Spans are kept in the order they were added. Where spans of the same key overlap, the span
//! added last wins. Paragraph edits such as alignment or line height start from the paragraph
//! style in effect where they are applied, so they compose with earlier paragraph styling.
//!
//! ## Example
//!
//! ```
//! use styled_text::{Match, Selection, TextStyler};
//! use text_style::{
//!     AttributeKey, Color, DecorationStyle, Font, FontWeight, TextAlignment,
//! };
//!
//! let red = Color::from_rgba8(255, 0, 0, 255);
//! let styled = TextStyler::new("Swift is a powerful and intuitive programming language.")
//!     .set_font(Font::system(18.0, FontWeight::REGULAR), Selection::All)
//!     .set_foreground_color(red, Match::exact_case_insensitive("swift"))
//!     .set_underline(
//!         DecorationStyle::SINGLE,
//!         red,
//!         Match::regex(r"\bp\w+").unwrap(),
//!     )
//!     .set_text_alignment(TextAlignment::Justified, Selection::All)
//!     .into_styled();
//!
//! let runs: Vec<_> = styled.runs().collect();
//! // "Swift", " is a ", "powerful", " and intuitive ", "programming", " language."
//! assert_eq!(runs.len(), 6);
//! assert!(runs[2].attribute(AttributeKey::UnderlineStyle).is_some());
//! assert!(runs[5].attribute(AttributeKey::ForegroundColor).is_none());
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

extern crate alloc;

mod runs;
mod selection;
mod styled_string;
mod styler;


pub use text_search::{Error, ErrorKind, TextRange, Utf16Range};

pub use crate::runs::{Runs, StyleRun};
pub use crate::selection::{Match, Selection};
pub use crate::styled_string::StyledString;
pub use crate::styler::TextStyler;

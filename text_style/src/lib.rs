// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closed vocabulary of rich-text style attributes.
//!
//! - [`Attribute`] is a single style value, identified by its [`AttributeKey`].
//! - [`Modifier`] is a style change as a caller expresses it; it lowers to one or two attributes.
//! - The value types ([`Font`], [`ParagraphStyle`], [`DecorationStyle`], [`WritingDirection`],
//!   [`TextAttachment`]) are plain data, independent of any layout engine or platform.
//!
//! Colors are [`peniko::Color`], re-exported as [`Color`].
//!
//! ## Example
//!
//! ```
//! use text_style::{AttributeKey, Color, DecorationStyle, Modifier};
//!
//! let red = Color::from_rgba8(255, 0, 0, 255);
//! let strike = Modifier::Strikethrough {
//!     style: DecorationStyle::SINGLE,
//!     color: red,
//! };
//! let keys: Vec<_> = strike.attributes(None).iter().map(|a| a.key()).collect();
//! assert_eq!(
//!     keys,
//!     [AttributeKey::StrikethroughStyle, AttributeKey::StrikethroughColor]
//! );
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
#![no_std]

extern crate alloc;

mod attachment;
mod attribute;
mod decoration;
mod font;
mod modifier;
mod paragraph;
mod writing_direction;

pub use peniko::Color;

pub use crate::attachment::TextAttachment;
pub use crate::attribute::{Attribute, AttributeKey};
pub use crate::decoration::{DecorationLine, DecorationPattern, DecorationStyle};
pub use crate::font::{Font, FontFamily, FontStyle, FontWeight};
pub use crate::modifier::Modifier;
pub use crate::paragraph::{BaseWritingDirection, LineBreakMode, ParagraphStyle, TextAlignment};
pub use crate::writing_direction::{BidiDirection, BidiFormat, WritingDirection};

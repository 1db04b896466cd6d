// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{Color, DecorationStyle, Font, ParagraphStyle, TextAttachment, WritingDirection};

/// Identifies the kind of an [`Attribute`].
///
/// A span of text holds at most one effective value per key. Keys are ordered, and that order is
/// the order in which attribute sets are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// See [`Attribute::Font`].
    Font,
    /// See [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// See [`Attribute::BackgroundColor`].
    BackgroundColor,
    /// See [`Attribute::ParagraphStyle`].
    ParagraphStyle,
    /// See [`Attribute::StrikethroughStyle`].
    StrikethroughStyle,
    /// See [`Attribute::StrikethroughColor`].
    StrikethroughColor,
    /// See [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// See [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// See [`Attribute::WritingDirection`].
    WritingDirection,
    /// See [`Attribute::BaselineOffset`].
    BaselineOffset,
    /// See [`Attribute::Link`].
    Link,
    /// See [`Attribute::Attachment`].
    Attachment,
    /// See [`Attribute::Kern`].
    Kern,
}

impl AttributeKey {
    /// Every key, in order.
    pub const ALL: [Self; 13] = [
        Self::Font,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::ParagraphStyle,
        Self::StrikethroughStyle,
        Self::StrikethroughColor,
        Self::UnderlineStyle,
        Self::UnderlineColor,
        Self::WritingDirection,
        Self::BaselineOffset,
        Self::Link,
        Self::Attachment,
        Self::Kern,
    ];
}

/// A style value applied to a range of text.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Font of the text.
    Font(Font),
    /// Color of the glyphs.
    ForegroundColor(Color),
    /// Color behind the glyphs.
    BackgroundColor(Color),
    /// Paragraph layout settings.
    ParagraphStyle(ParagraphStyle),
    /// Strikethrough style.
    StrikethroughStyle(DecorationStyle),
    /// Strikethrough color.
    StrikethroughColor(Color),
    /// Underline style.
    UnderlineStyle(DecorationStyle),
    /// Underline color.
    UnderlineColor(Color),
    /// Explicit bidirectional embeddings and overrides, outermost first.
    WritingDirection(Arc<[WritingDirection]>),
    /// Vertical offset from the baseline in points, positive upwards.
    BaselineOffset(f32),
    /// Link target.
    Link(Arc<str>),
    /// Inline attachment.
    Attachment(TextAttachment),
    /// Extra space after each character in points.
    Kern(f32),
}

impl Attribute {
    /// The key this attribute is stored under.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::WritingDirection(_) => AttributeKey::WritingDirection,
            Self::BaselineOffset(_) => AttributeKey::BaselineOffset,
            Self::Link(_) => AttributeKey::Link,
            Self::Attachment(_) => AttributeKey::Attachment,
            Self::Kern(_) => AttributeKey::Kern,
        }
    }

    /// Returns the paragraph style if this is a paragraph style attribute.
    pub fn as_paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }

    /// Returns the font if this is a font attribute.
    pub fn as_font(&self) -> Option<&Font> {
        match self {
            Self::Font(font) => Some(font),
            _ => None,
        }
    }

    /// Returns the color of any of the color attributes.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::ForegroundColor(color)
            | Self::BackgroundColor(color)
            | Self::StrikethroughColor(color)
            | Self::UnderlineColor(color) => Some(*color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribute, AttributeKey};
    use crate::{Color, ParagraphStyle};

    #[test]
    fn keys_are_ordered_and_distinct() {
        assert!(AttributeKey::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn attribute_reports_its_key() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        assert_eq!(
            Attribute::StrikethroughColor(red).key(),
            AttributeKey::StrikethroughColor
        );
        assert_eq!(Attribute::Kern(1.5).key(), AttributeKey::Kern);
        assert_eq!(Attribute::Link("https://linebender.org".into()).key(), AttributeKey::Link);
        assert_eq!(Attribute::UnderlineColor(red).as_color(), Some(red));
        assert!(
            Attribute::ParagraphStyle(ParagraphStyle::default())
                .as_paragraph_style()
                .is_some()
        );
        assert_eq!(Attribute::Kern(1.5).as_font(), None);
    }
}

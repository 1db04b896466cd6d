// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use smallvec::{SmallVec, smallvec};

use crate::{
    Attribute, Color, DecorationStyle, Font, ParagraphStyle, TextAlignment, TextAttachment,
    WritingDirection,
};

/// A style change to apply to a range of text.
///
/// Most modifiers set exactly one [`Attribute`]. Decorations set a style and a color. Alignment,
/// line height and line spacing change a single field of the paragraph style already in effect
/// and then set the whole [`ParagraphStyle`].
#[derive(Clone, Debug, PartialEq)]
pub enum Modifier {
    /// Set the font.
    Font(Font),
    /// Set the glyph color.
    ForegroundColor(Color),
    /// Set the color behind the glyphs.
    BackgroundColor(Color),
    /// Replace the paragraph style.
    ParagraphStyle(ParagraphStyle),
    /// Change the paragraph alignment.
    TextAlignment(TextAlignment),
    /// Change the paragraph line height bounds.
    LineHeight {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// Change the paragraph line spacing.
    LineSpacing(f32),
    /// Strike the text through.
    Strikethrough {
        /// Line style.
        style: DecorationStyle,
        /// Line color.
        color: Color,
    },
    /// Underline the text.
    Underline {
        /// Line style.
        style: DecorationStyle,
        /// Line color.
        color: Color,
    },
    /// Set explicit writing directions, outermost first.
    WritingDirection(Arc<[WritingDirection]>),
    /// Shift the text off the baseline.
    BaselineOffset(f32),
    /// Link the text.
    Link(Arc<str>),
    /// Attach an inline object.
    Attachment(TextAttachment),
    /// Adjust the space after each character.
    Kern(f32),
}

impl Modifier {
    /// Returns `true` if this modifier derives its result from the paragraph style in effect.
    pub fn edits_paragraph_style(&self) -> bool {
        matches!(
            self,
            Self::TextAlignment(_) | Self::LineHeight { .. } | Self::LineSpacing(_)
        )
    }

    /// Lowers this modifier to the attributes it sets.
    ///
    /// `current_paragraph` is the paragraph style in effect where the modifier is applied; it is
    /// only read by modifiers for which [`edits_paragraph_style`](Self::edits_paragraph_style) is
    /// `true`, and the default style is used when it is `None`.
    ///
    /// ```
    /// use text_style::{Attribute, Modifier, ParagraphStyle, TextAlignment};
    ///
    /// let current = ParagraphStyle::default().with_line_spacing(6.0);
    /// let attributes = Modifier::TextAlignment(TextAlignment::Center).attributes(Some(&current));
    /// assert_eq!(
    ///     attributes.as_slice(),
    ///     [Attribute::ParagraphStyle(current.with_alignment(TextAlignment::Center))]
    /// );
    /// ```
    pub fn attributes(&self, current_paragraph: Option<&ParagraphStyle>) -> SmallVec<[Attribute; 2]> {
        let edit = |f: &dyn Fn(ParagraphStyle) -> ParagraphStyle| {
            let base = current_paragraph.cloned().unwrap_or_default();
            Attribute::ParagraphStyle(f(base))
        };
        match self {
            Self::Font(font) => smallvec![Attribute::Font(font.clone())],
            Self::ForegroundColor(color) => smallvec![Attribute::ForegroundColor(*color)],
            Self::BackgroundColor(color) => smallvec![Attribute::BackgroundColor(*color)],
            Self::ParagraphStyle(style) => smallvec![Attribute::ParagraphStyle(style.clone())],
            Self::TextAlignment(alignment) => {
                smallvec![edit(&|style| style.with_alignment(*alignment))]
            }
            Self::LineHeight { min, max } => {
                smallvec![edit(&|style| style.with_line_height(*min, *max))]
            }
            Self::LineSpacing(spacing) => {
                smallvec![edit(&|style| style.with_line_spacing(*spacing))]
            }
            Self::Strikethrough { style, color } => smallvec![
                Attribute::StrikethroughStyle(*style),
                Attribute::StrikethroughColor(*color),
            ],
            Self::Underline { style, color } => smallvec![
                Attribute::UnderlineStyle(*style),
                Attribute::UnderlineColor(*color),
            ],
            Self::WritingDirection(directions) => {
                smallvec![Attribute::WritingDirection(directions.clone())]
            }
            Self::BaselineOffset(offset) => smallvec![Attribute::BaselineOffset(*offset)],
            Self::Link(link) => smallvec![Attribute::Link(link.clone())],
            Self::Attachment(attachment) => smallvec![Attribute::Attachment(attachment.clone())],
            Self::Kern(kern) => smallvec![Attribute::Kern(*kern)],
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Modifier;
    use crate::{
        Attribute, AttributeKey, Color, DecorationStyle, ParagraphStyle, TextAlignment,
    };

    #[test]
    fn decorations_set_style_and_color() {
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let attributes = Modifier::Underline {
            style: DecorationStyle::DOUBLE,
            color: blue,
        }
        .attributes(None);
        let keys: Vec<_> = attributes.iter().map(Attribute::key).collect();
        assert_eq!(keys, [AttributeKey::UnderlineStyle, AttributeKey::UnderlineColor]);
        assert_eq!(attributes[1], Attribute::UnderlineColor(blue));
    }

    #[test]
    fn paragraph_edits_start_from_the_default() {
        let attributes = Modifier::LineHeight { min: 18.0, max: 20.0 }.attributes(None);
        let style = attributes[0].as_paragraph_style().expect("paragraph style");
        assert_eq!(style.minimum_line_height, 18.0);
        assert_eq!(style.maximum_line_height, 20.0);
        assert_eq!(style.alignment, TextAlignment::Natural);
    }

    #[test]
    fn paragraph_edits_keep_other_fields() {
        let current = ParagraphStyle {
            alignment: TextAlignment::Right,
            head_indent: 12.0,
            ..ParagraphStyle::default()
        };
        let attributes = Modifier::LineSpacing(3.0).attributes(Some(&current));
        let style = attributes[0].as_paragraph_style().expect("paragraph style");
        assert_eq!(style.alignment, TextAlignment::Right);
        assert_eq!(style.head_indent, 12.0);
        assert_eq!(style.line_spacing, 3.0);
    }

    #[test]
    fn replacing_the_paragraph_style_ignores_the_current_one() {
        let current = ParagraphStyle::default().with_alignment(TextAlignment::Center);
        let replacement = ParagraphStyle::default();
        let modifier = Modifier::ParagraphStyle(replacement.clone());
        assert!(!modifier.edits_paragraph_style());
        assert_eq!(
            modifier.attributes(Some(&current)).as_slice(),
            [Attribute::ParagraphStyle(replacement)]
        );
    }
}

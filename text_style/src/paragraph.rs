// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the left edge.
    Left,
    /// Center between the edges.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the width, except the last line of the paragraph.
    Justified,
    /// Align to the leading edge of the paragraph's writing direction.
    #[default]
    Natural,
}

/// How lines that do not fit are broken or truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Break at word boundaries.
    #[default]
    WordWrapping,
    /// Break at character boundaries.
    CharWrapping,
    /// Cut the line off at the edge.
    Clipping,
    /// Show the end of the line, eliding its start.
    TruncatingHead,
    /// Show the start of the line, eliding its end.
    TruncatingTail,
    /// Show both ends of the line, eliding its middle.
    TruncatingMiddle,
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseWritingDirection {
    /// Derived from the paragraph's content.
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// Paragraph-level layout settings.
///
/// All lengths are in points. A zero line height bound means "unbounded"; a zero line height
/// multiple means "use the font's natural line height". The default value is the neutral style.
///
/// Individual fields are usually changed on a copy of the style already in effect, so that
/// unrelated settings survive:
///
/// ```
/// use text_style::{ParagraphStyle, TextAlignment};
///
/// let base = ParagraphStyle {
///     line_spacing: 4.0,
///     ..ParagraphStyle::default()
/// };
/// let centered = ParagraphStyle {
///     alignment: TextAlignment::Center,
///     ..base.clone()
/// };
/// assert_eq!(centered.line_spacing, 4.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: TextAlignment,
    /// Indentation of the first line from the leading margin.
    pub first_line_head_indent: f32,
    /// Indentation of the other lines from the leading margin.
    pub head_indent: f32,
    /// Trailing margin; negative values measure from the leading margin.
    pub tail_indent: f32,
    /// Space between the bottom of one line and the top of the next.
    pub line_spacing: f32,
    /// Space added after the paragraph.
    pub paragraph_spacing: f32,
    /// Space added before the paragraph.
    pub paragraph_spacing_before: f32,
    /// Lower bound on line height.
    pub minimum_line_height: f32,
    /// Upper bound on line height.
    pub maximum_line_height: f32,
    /// Multiplier applied to the natural line height.
    pub line_height_multiple: f32,
    /// Base writing direction.
    pub base_writing_direction: BaseWritingDirection,
    /// Line breaking and truncation behavior.
    pub line_break_mode: LineBreakMode,
    /// Hyphenation threshold between `0.0` (never) and `1.0` (always).
    pub hyphenation_factor: f32,
}

impl ParagraphStyle {
    /// Creates the neutral paragraph style.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this style with a different alignment.
    #[must_use]
    #[inline]
    pub fn with_alignment(self, alignment: TextAlignment) -> Self {
        Self { alignment, ..self }
    }

    /// Returns this style with different line height bounds.
    #[must_use]
    #[inline]
    pub fn with_line_height(self, minimum: f32, maximum: f32) -> Self {
        Self {
            minimum_line_height: minimum,
            maximum_line_height: maximum,
            ..self
        }
    }

    /// Returns this style with a different line spacing.
    #[must_use]
    #[inline]
    pub fn with_line_spacing(self, line_spacing: f32) -> Self {
        Self {
            line_spacing,
            ..self
        }
    }
}

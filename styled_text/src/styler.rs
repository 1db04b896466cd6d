// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use text_search::TextRange;
use text_style::{
    Attribute, AttributeKey, Color, DecorationStyle, Font, Modifier, ParagraphStyle, TextAlignment,
    TextAttachment, WritingDirection,
};

use crate::{Selection, StyledString};

/// Chainable styling of a [`StyledString`] by pattern.
///
/// Every setter selects ranges of the text with a [`Selection`], applies its [`Modifier`]s to each
/// selected range in order, and returns the styler for the next call. Modifiers that edit the
/// paragraph style start from the paragraph style in effect at the start of the range at the time
/// they are applied, so earlier modifiers in the same call are taken into account.
///
/// ```
/// use styled_text::{Match, Selection, TextStyler};
/// use text_style::{AttributeKey, Font, FontWeight, TextAlignment};
///
/// let styled = TextStyler::new("Swift is a powerful language")
///     .set_font(Font::system(18.0, FontWeight::REGULAR), Selection::All)
///     .set_font(Font::system(22.0, FontWeight::HEAVY), Match::exact("powerful"))
///     .set_text_alignment(TextAlignment::Center, Selection::All)
///     .into_styled();
///
/// let heavy = styled.attribute(AttributeKey::Font, 11).and_then(|a| a.as_font());
/// assert_eq!(heavy.map(|font| font.weight), Some(FontWeight::HEAVY));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextStyler {
    styled: StyledString,
}

impl TextStyler {
    /// Starts styling an unstyled `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            styled: StyledString::new(text),
        }
    }

    /// Continues styling an already styled string.
    pub fn from_styled(styled: StyledString) -> Self {
        Self { styled }
    }

    /// The styled string so far.
    #[inline]
    pub fn get(&self) -> &StyledString {
        &self.styled
    }

    /// Finishes styling.
    #[inline]
    pub fn into_styled(self) -> StyledString {
        self.styled
    }

    /// Sets the font.
    pub fn set_font(self, font: Font, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::Font(font)], selection)
    }

    /// Sets the glyph color.
    pub fn set_foreground_color(self, color: Color, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::ForegroundColor(color)], selection)
    }

    /// Sets the color behind the glyphs.
    pub fn set_background_color(self, color: Color, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::BackgroundColor(color)], selection)
    }

    /// Replaces the paragraph style.
    pub fn set_paragraph_style(
        self,
        style: ParagraphStyle,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::ParagraphStyle(style)], selection)
    }

    /// Changes the paragraph alignment.
    pub fn set_text_alignment(
        self,
        alignment: TextAlignment,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::TextAlignment(alignment)], selection)
    }

    /// Changes the paragraph line height bounds.
    pub fn set_line_height(self, min: f32, max: f32, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::LineHeight { min, max }], selection)
    }

    /// Changes the paragraph line spacing.
    pub fn set_line_spacing(self, spacing: f32, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::LineSpacing(spacing)], selection)
    }

    /// Strikes the text through.
    pub fn set_strikethrough(
        self,
        style: DecorationStyle,
        color: Color,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::Strikethrough { style, color }], selection)
    }

    /// Underlines the text.
    pub fn set_underline(
        self,
        style: DecorationStyle,
        color: Color,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::Underline { style, color }], selection)
    }

    /// Sets explicit writing directions, outermost first.
    pub fn set_writing_direction(
        self,
        directions: impl Into<Arc<[WritingDirection]>>,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::WritingDirection(directions.into())], selection)
    }

    /// Shifts the text off the baseline.
    pub fn set_baseline_offset(self, offset: f32, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::BaselineOffset(offset)], selection)
    }

    /// Links the text to `link`.
    pub fn set_link(self, link: impl Into<Arc<str>>, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::Link(link.into())], selection)
    }

    /// Attaches an inline object.
    pub fn set_attachment(
        self,
        attachment: TextAttachment,
        selection: impl Into<Selection>,
    ) -> Self {
        self.set([Modifier::Attachment(attachment)], selection)
    }

    /// Adjusts the space after each character.
    pub fn set_kerning(self, kern: f32, selection: impl Into<Selection>) -> Self {
        self.set([Modifier::Kern(kern)], selection)
    }

    /// Applies several modifiers, in order, to every selected range.
    pub fn set(
        mut self,
        modifiers: impl IntoIterator<Item = Modifier>,
        selection: impl Into<Selection>,
    ) -> Self {
        let modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        let ranges = selection.into().ranges(self.styled.search());
        log::trace!(
            "applying {} modifiers to {} ranges",
            modifiers.len(),
            ranges.len()
        );
        for range in ranges {
            for modifier in &modifiers {
                self.apply(modifier, range);
            }
        }
        self
    }

    /// Changes individual paragraph style fields on `range`.
    ///
    /// `f` receives a copy of the paragraph style in effect at the start of `range` (or the
    /// default style), and the result is applied to the whole range.
    ///
    /// ```
    /// use styled_text::TextStyler;
    /// use text_style::{AttributeKey, LineBreakMode};
    ///
    /// let styler = TextStyler::new("A long paragraph");
    /// let range = styler.get().search().full_range();
    /// let styled = styler
    ///     .set_paragraph_property(range, |style| {
    ///         style.line_break_mode = LineBreakMode::TruncatingTail;
    ///     })
    ///     .into_styled();
    /// let style = styled
    ///     .attribute(AttributeKey::ParagraphStyle, 0)
    ///     .and_then(|a| a.as_paragraph_style());
    /// assert_eq!(style.map(|s| s.line_break_mode), Some(LineBreakMode::TruncatingTail));
    /// ```
    pub fn set_paragraph_property(
        mut self,
        range: TextRange,
        f: impl FnOnce(&mut ParagraphStyle),
    ) -> Self {
        let mut style = self.current_paragraph_style(range).unwrap_or_default();
        f(&mut style);
        self.styled
            .add_attribute(range, Attribute::ParagraphStyle(style));
        self
    }

    fn current_paragraph_style(&self, range: TextRange) -> Option<ParagraphStyle> {
        self.styled
            .attribute(AttributeKey::ParagraphStyle, range.start())
            .and_then(|attribute| attribute.as_paragraph_style())
            .cloned()
    }

    fn apply(&mut self, modifier: &Modifier, range: TextRange) {
        let current = if modifier.edits_paragraph_style() {
            self.current_paragraph_style(range)
        } else {
            None
        };
        for attribute in modifier.attributes(current.as_ref()) {
            self.styled.add_attribute(range, attribute);
        }
    }
}

impl From<StyledString> for TextStyler {
    fn from(styled: StyledString) -> Self {
        Self::from_styled(styled)
    }
}

impl From<TextStyler> for StyledString {
    fn from(styler: TextStyler) -> Self {
        styler.into_styled()
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underline and strikethrough styles.

/// How many lines a decoration draws, and how heavy they are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationLine {
    /// No decoration.
    #[default]
    None,
    /// One thin line.
    Single,
    /// One thick line.
    Thick,
    /// Two thin lines.
    Double,
}

/// The dash pattern of a decoration line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationPattern {
    /// A continuous line.
    #[default]
    Solid,
    /// Dots.
    Dot,
    /// Dashes.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// Alternating dashes and pairs of dots.
    DashDotDot,
}

/// Style of an underline or strikethrough.
///
/// [`to_bits`](Self::to_bits) and [`from_bits`](Self::from_bits) convert to and from the packed
/// representation common to UTF-16 rich-text hosts: the line kind in the low byte, the pattern in
/// the second byte, and `0x8000` for "by word".
///
/// ```
/// use text_style::{DecorationLine, DecorationPattern, DecorationStyle};
///
/// let style = DecorationStyle::DOUBLE.with_pattern(DecorationPattern::Dash);
/// assert_eq!(style.to_bits(), 0x0209);
/// assert_eq!(DecorationStyle::from_bits(0x0209), Some(style));
/// assert_eq!(DecorationStyle::from_bits(0x0001).map(|s| s.line), Some(DecorationLine::Single));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecorationStyle {
    /// Line kind.
    pub line: DecorationLine,
    /// Dash pattern.
    pub pattern: DecorationPattern,
    /// Only decorate words, skipping the whitespace between them.
    pub by_word: bool,
}

impl DecorationStyle {
    /// No decoration.
    pub const NONE: Self = Self::new(DecorationLine::None);

    /// A single solid line.
    pub const SINGLE: Self = Self::new(DecorationLine::Single);

    /// A single thick solid line.
    pub const THICK: Self = Self::new(DecorationLine::Thick);

    /// Two solid lines.
    pub const DOUBLE: Self = Self::new(DecorationLine::Double);

    const BY_WORD: u32 = 0x8000;

    /// A solid decoration of the given line kind.
    #[inline]
    pub const fn new(line: DecorationLine) -> Self {
        Self {
            line,
            pattern: DecorationPattern::Solid,
            by_word: false,
        }
    }

    /// Returns this style with a different dash pattern.
    #[must_use]
    #[inline]
    pub const fn with_pattern(self, pattern: DecorationPattern) -> Self {
        Self { pattern, ..self }
    }

    /// Returns this style decorating words only.
    #[must_use]
    #[inline]
    pub const fn by_word(self) -> Self {
        Self {
            by_word: true,
            ..self
        }
    }

    /// Returns `true` if nothing is drawn.
    #[inline]
    pub fn is_none(self) -> bool {
        self.line == DecorationLine::None
    }

    /// Packs this style into its host bit representation.
    pub fn to_bits(self) -> u32 {
        let line = match self.line {
            DecorationLine::None => 0x00,
            DecorationLine::Single => 0x01,
            DecorationLine::Thick => 0x02,
            DecorationLine::Double => 0x09,
        };
        let pattern = match self.pattern {
            DecorationPattern::Solid => 0x000,
            DecorationPattern::Dot => 0x100,
            DecorationPattern::Dash => 0x200,
            DecorationPattern::DashDot => 0x300,
            DecorationPattern::DashDotDot => 0x400,
        };
        let by_word = if self.by_word { Self::BY_WORD } else { 0 };
        line | pattern | by_word
    }

    /// Unpacks a host bit representation.
    ///
    /// Returns `None` for line or pattern values this vocabulary does not know.
    pub fn from_bits(bits: u32) -> Option<Self> {
        let line = match bits & 0xff {
            0x00 => DecorationLine::None,
            0x01 => DecorationLine::Single,
            0x02 => DecorationLine::Thick,
            0x09 => DecorationLine::Double,
            _ => return None,
        };
        let pattern = match bits & 0x0f00 {
            0x000 => DecorationPattern::Solid,
            0x100 => DecorationPattern::Dot,
            0x200 => DecorationPattern::Dash,
            0x300 => DecorationPattern::DashDot,
            0x400 => DecorationPattern::DashDotDot,
            _ => return None,
        };
        if bits & !(0xff | 0x0f00 | Self::BY_WORD) != 0 {
            return None;
        }
        Some(Self {
            line,
            pattern,
            by_word: bits & Self::BY_WORD != 0,
        })
    }
}

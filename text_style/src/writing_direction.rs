// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a bidirectional embedding or override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BidiDirection {
    /// Left-to-right.
    #[default]
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// Whether a directional run embeds or overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BidiFormat {
    /// Behaves like an explicit embedding (LRE/RLE).
    #[default]
    Embedding,
    /// Behaves like an explicit override (LRO/RLO).
    Override,
}

/// One level of explicit writing direction applied to a run of text.
///
/// The writing direction attribute carries a list of these, outermost first.
///
/// ```
/// use text_style::{BidiDirection, BidiFormat, WritingDirection};
///
/// let rlo = WritingDirection::new(BidiDirection::RightToLeft, BidiFormat::Override);
/// assert_eq!(rlo.to_raw(), 3);
/// assert_eq!(WritingDirection::from_raw(3), Some(rlo));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WritingDirection {
    /// Direction.
    pub direction: BidiDirection,
    /// Embedding or override.
    pub format: BidiFormat,
}

impl WritingDirection {
    /// Creates a writing direction entry.
    #[inline]
    pub const fn new(direction: BidiDirection, format: BidiFormat) -> Self {
        Self { direction, format }
    }

    /// A left-to-right embedding.
    pub const LTR_EMBEDDING: Self = Self::new(BidiDirection::LeftToRight, BidiFormat::Embedding);

    /// A right-to-left embedding.
    pub const RTL_EMBEDDING: Self = Self::new(BidiDirection::RightToLeft, BidiFormat::Embedding);

    /// The host's integer encoding: direction (`0` LTR, `1` RTL) or'ed with format (`0`
    /// embedding, `2` override).
    pub fn to_raw(self) -> u8 {
        let direction = match self.direction {
            BidiDirection::LeftToRight => 0,
            BidiDirection::RightToLeft => 1,
        };
        let format = match self.format {
            BidiFormat::Embedding => 0,
            BidiFormat::Override => 2,
        };
        direction | format
    }

    /// Decodes the host's integer encoding, returning `None` for values above `3`.
    pub fn from_raw(raw: u8) -> Option<Self> {
        if raw > 3 {
            return None;
        }
        let direction = if raw & 1 == 0 {
            BidiDirection::LeftToRight
        } else {
            BidiDirection::RightToLeft
        };
        let format = if raw & 2 == 0 {
            BidiFormat::Embedding
        } else {
            BidiFormat::Override
        };
        Some(Self { direction, format })
    }
}

#[cfg(test)]
mod tests {
    use super::{BidiDirection, BidiFormat, WritingDirection};

    #[test]
    fn raw_encoding() {
        assert_eq!(WritingDirection::LTR_EMBEDDING.to_raw(), 0);
        assert_eq!(WritingDirection::RTL_EMBEDDING.to_raw(), 1);
        assert_eq!(
            WritingDirection::new(BidiDirection::LeftToRight, BidiFormat::Override).to_raw(),
            2
        );
        assert_eq!(WritingDirection::from_raw(1), Some(WritingDirection::RTL_EMBEDDING));
        assert_eq!(WritingDirection::from_raw(4), None);
    }
}

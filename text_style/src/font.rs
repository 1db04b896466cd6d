// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
///
/// The named constants follow the usual system font weights, mapped onto the CSS `font-weight`
/// scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const ULTRA_LIGHT: Self = Self(100.0);

    /// Weight value of 200.
    pub const THIN: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const REGULAR: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMIBOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const HEAVY: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const KEYWORDS: [(FontWeight, &str); 9] = [
            (FontWeight::ULTRA_LIGHT, "ultra-light"),
            (FontWeight::THIN, "thin"),
            (FontWeight::LIGHT, "light"),
            (FontWeight::REGULAR, "regular"),
            (FontWeight::MEDIUM, "medium"),
            (FontWeight::SEMIBOLD, "semibold"),
            (FontWeight::BOLD, "bold"),
            (FontWeight::HEAVY, "heavy"),
            (FontWeight::BLACK, "black"),
        ];
        match KEYWORDS.iter().find(|(weight, _)| weight == self) {
            Some((_, keyword)) => f.write_str(keyword),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// The family a [`Font`] is drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's user interface font.
    #[default]
    System,
    /// The platform's monospaced font.
    Monospace,
    /// A family selected by name, for example `"Helvetica Neue"`.
    Named(Arc<str>),
}

/// A font request: family, size in points, weight and slant.
///
/// ```
/// use text_style::{Font, FontFamily, FontStyle, FontWeight};
///
/// let body = Font::system(18.0, FontWeight::REGULAR);
/// assert_eq!(body.family, FontFamily::System);
///
/// let title = Font::named("Avenir Next", 22.0)
///     .with_weight(FontWeight::HEAVY)
///     .with_style(FontStyle::Italic);
/// assert_eq!(title.family, FontFamily::Named("Avenir Next".into()));
/// assert_ne!(body, title);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Font family.
    pub family: FontFamily,
    /// Size in points.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Slant.
    pub style: FontStyle,
}

impl Font {
    /// The system font at `size` points and the given `weight`.
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight,
            style: FontStyle::Normal,
        }
    }

    /// The system monospaced font at `size` points and the given `weight`.
    pub fn monospace(size: f32, weight: FontWeight) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..Self::system(size, weight)
        }
    }

    /// A regular weight font of the named family at `size` points.
    pub fn named(name: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: FontFamily::Named(name.into()),
            ..Self::system(size, FontWeight::REGULAR)
        }
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    /// Returns this font with a different slant.
    #[must_use]
    pub fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }

    /// Returns this font at a different size.
    #[must_use]
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::{Font, FontWeight};
    use alloc::format;

    #[test]
    fn weights_display_as_keywords() {
        assert_eq!(format!("{}", FontWeight::HEAVY), "heavy");
        assert_eq!(format!("{}", FontWeight::new(450.0)), "450");
        assert_eq!(FontWeight::default(), FontWeight::REGULAR);
    }

    #[test]
    fn system_fonts_compare_by_value() {
        assert_eq!(
            Font::system(18.0, FontWeight::REGULAR),
            Font::system(18.0, FontWeight::REGULAR)
        );
        assert_ne!(
            Font::system(18.0, FontWeight::REGULAR),
            Font::system(18.0, FontWeight::BOLD)
        );
        assert_ne!(
            Font::system(18.0, FontWeight::REGULAR),
            Font::monospace(18.0, FontWeight::REGULAR)
        );
    }
}

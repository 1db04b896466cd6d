// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Flags controlling how a pattern is compared against text.
///
/// ```
/// use text_search::SearchOptions;
///
/// let options = SearchOptions::CASE_INSENSITIVE | SearchOptions::BACKWARDS;
/// assert!(options.contains(SearchOptions::BACKWARDS));
/// assert!(!options.contains(SearchOptions::REGULAR_EXPRESSION));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchOptions(u8);

impl SearchOptions {
    /// Enumerate matches from the end of the search range towards its start.
    pub const BACKWARDS: Self = Self(1 << 0);

    /// Compare letters without regard to case.
    pub const CASE_INSENSITIVE: Self = Self(1 << 1);

    /// Ignore nonspacing marks (accents, diaeresis, ...) when comparing literals.
    pub const DIACRITIC_INSENSITIVE: Self = Self(1 << 2);

    /// Treat the pattern as a regular expression.
    pub const REGULAR_EXPRESSION: Self = Self(1 << 3);

    /// Backwards, case-insensitive and diacritic-insensitive.
    ///
    /// This is the conventional choice for enumeration and replacement when the caller has no
    /// stronger preference.
    pub const RELAXED: Self =
        Self(Self::BACKWARDS.0 | Self::CASE_INSENSITIVE.0 | Self::DIACRITIC_INSENSITIVE.0);

    /// No flags: forward, case-sensitive, diacritic-sensitive literal search.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` if all flags in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the flags set in either `self` or `other`.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` with the flags in `other` cleared.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for SearchOptions {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SearchOptions {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SearchOptions, &str); 4] = [
            (SearchOptions::BACKWARDS, "BACKWARDS"),
            (SearchOptions::CASE_INSENSITIVE, "CASE_INSENSITIVE"),
            (SearchOptions::DIACRITIC_INSENSITIVE, "DIACRITIC_INSENSITIVE"),
            (SearchOptions::REGULAR_EXPRESSION, "REGULAR_EXPRESSION"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchOptions;

    #[test]
    fn relaxed_is_the_three_lenient_flags() {
        let relaxed = SearchOptions::RELAXED;
        assert!(relaxed.contains(SearchOptions::BACKWARDS));
        assert!(relaxed.contains(SearchOptions::CASE_INSENSITIVE));
        assert!(relaxed.contains(SearchOptions::DIACRITIC_INSENSITIVE));
        assert!(!relaxed.contains(SearchOptions::REGULAR_EXPRESSION));
        assert_eq!(
            relaxed.difference(SearchOptions::BACKWARDS),
            SearchOptions::CASE_INSENSITIVE | SearchOptions::DIACRITIC_INSENSITIVE
        );
    }

    #[test]
    fn debug_lists_flags() {
        let options = SearchOptions::BACKWARDS | SearchOptions::REGULAR_EXPRESSION;
        assert_eq!(
            format!("{options:?}"),
            "{BACKWARDS, REGULAR_EXPRESSION}"
        );
        assert_eq!(format!("{:?}", SearchOptions::empty()), "{}");
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_search::{Error, SearchOptions, SearchPattern, TextRange, TextSearch};

/// A pattern selecting parts of a text to style.
///
/// Literal matches ignore diacritics, so `Match::exact("cafe")` also selects "café". Every match
/// is enumerated from the start of the text towards its end.
#[derive(Clone, Debug)]
pub struct Match {
    pattern: SearchPattern,
}

impl Match {
    /// Selects every occurrence of `text`, ignoring diacritics.
    pub fn exact(text: &str) -> Self {
        Self {
            pattern: SearchPattern::literal(text, SearchOptions::DIACRITIC_INSENSITIVE),
        }
    }

    /// Selects every occurrence of `text`, ignoring case and diacritics.
    pub fn exact_case_insensitive(text: &str) -> Self {
        Self {
            pattern: SearchPattern::literal(
                text,
                SearchOptions::DIACRITIC_INSENSITIVE | SearchOptions::CASE_INSENSITIVE,
            ),
        }
    }

    /// Selects every match of the regular expression `pattern`.
    ///
    /// Fails with [`ErrorKind::InvalidPattern`](text_search::ErrorKind::InvalidPattern) if
    /// `pattern` does not compile.
    pub fn regex(pattern: &str) -> Result<Self, Error> {
        Ok(Self {
            pattern: SearchPattern::new(pattern, SearchOptions::REGULAR_EXPRESSION)?,
        })
    }

    /// The prepared pattern.
    #[inline]
    pub fn pattern(&self) -> &SearchPattern {
        &self.pattern
    }

    fn ranges(&self, text: &TextSearch) -> Vec<TextRange> {
        if self.pattern.options().contains(SearchOptions::BACKWARDS) {
            let forward = self.pattern.with_backwards(false);
            return text.matches(&forward).map(|found| found.range()).collect();
        }
        text.matches(&self.pattern)
            .map(|found| found.range())
            .collect()
    }
}

impl From<SearchPattern> for Match {
    /// Uses a pattern prepared with arbitrary [`SearchOptions`], walked forwards.
    fn from(pattern: SearchPattern) -> Self {
        Self { pattern }
    }
}

/// The parts of a text a styling operation applies to.
#[derive(Clone, Debug, Default)]
pub enum Selection {
    /// The whole text. Selects nothing in an empty text.
    #[default]
    All,
    /// Every match of each pattern, pattern by pattern.
    Matches(Vec<Match>),
}

impl Selection {
    /// The selected ranges of `text`, in the order styling visits them.
    pub fn ranges(&self, text: &TextSearch) -> Vec<TextRange> {
        match self {
            Self::All if text.is_empty() => Vec::new(),
            Self::All => vec![text.full_range()],
            Self::Matches(matches) => matches.iter().flat_map(|m| m.ranges(text)).collect(),
        }
    }
}

impl From<Match> for Selection {
    fn from(m: Match) -> Self {
        Self::Matches(vec![m])
    }
}

impl From<Vec<Match>> for Selection {
    fn from(matches: Vec<Match>) -> Self {
        Self::Matches(matches)
    }
}

impl<const N: usize> From<[Match; N]> for Selection {
    fn from(matches: [Match; N]) -> Self {
        Self::Matches(matches.into())
    }
}

#[cfg(test)]
mod tests {
    use text_search::{ErrorKind, SearchOptions, SearchPattern, TextSearch};

    use super::{Match, Selection};

    fn texts(text: &TextSearch, selection: impl Into<Selection>) -> Vec<&str> {
        selection
            .into()
            .ranges(text)
            .into_iter()
            .map(|range| &text.as_str()[range.as_range()])
            .collect()
    }

    #[test]
    fn all_selects_the_whole_text() {
        let text = TextSearch::new("Crème brûlée");
        assert_eq!(texts(&text, Selection::All), ["Crème brûlée"]);
        assert!(Selection::All.ranges(&TextSearch::new("")).is_empty());
    }

    #[test]
    fn exact_ignores_diacritics_but_not_case() {
        let text = TextSearch::new("Crème brûlée, creme brulee");
        assert_eq!(texts(&text, Match::exact("creme")), ["creme"]);
        assert_eq!(texts(&text, Match::exact("brulee")), ["brûlée", "brulee"]);
        assert_eq!(
            texts(&text, Match::exact_case_insensitive("creme")),
            ["Crème", "creme"]
        );
    }

    #[test]
    fn matches_are_visited_pattern_by_pattern() {
        let text = TextSearch::new("a1 b2 a3");
        let selection = [Match::exact("a"), Match::regex("[0-9]").unwrap()];
        assert_eq!(texts(&text, selection), ["a", "a", "1", "2", "3"]);
    }

    #[test]
    fn backwards_patterns_are_walked_forwards() {
        let text = TextSearch::new("x x x");
        let pattern = SearchPattern::literal("x", SearchOptions::BACKWARDS);
        let ranges = Selection::from(Match::from(pattern)).ranges(&text);
        assert!(ranges.windows(2).all(|w| w[0].start() < w[1].start()));
        assert_eq!(ranges.len(), 3);
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let err = Match::regex("[").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cluster comparison keys for literal matching.

use core::ops::Range;

use icu_casemap::CaseMapper;
use icu_normalizer::DecomposingNormalizer;
use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;

use crate::grapheme_index::GraphemeIndex;
use crate::SearchOptions;

/// Comparison keys for every grapheme cluster of a text, stored in one buffer.
#[derive(Clone, Debug, Default)]
pub(crate) struct FoldedClusters {
    buffer: String,
    keys: Vec<Range<usize>>,
}

impl FoldedClusters {
    pub(crate) fn new(text: &str, index: &GraphemeIndex, options: SearchOptions) -> Self {
        let mut folded = Self {
            buffer: String::with_capacity(text.len()),
            keys: Vec::with_capacity(index.cluster_count()),
        };
        for cluster in 0..index.cluster_count() {
            let start = folded.buffer.len();
            fold_into(&text[index.cluster(cluster)], options, &mut folded.buffer);
            folded.keys.push(start..folded.buffer.len());
        }
        folded
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn key(&self, cluster: usize) -> &str {
        &self.buffer[self.keys[cluster].clone()]
    }

    /// Whether the clusters of `needle` equal this text's clusters starting at `at`.
    pub(crate) fn matches_at(&self, at: usize, needle: &Self) -> bool {
        at + needle.len() <= self.len()
            && (0..needle.len()).all(|i| self.key(at + i) == needle.key(i))
    }
}

/// Appends the comparison key of one grapheme cluster to `out`.
///
/// Keys are canonically decomposed, so precomposed and combining spellings compare equal. Case
/// insensitive keys are full Unicode case folds rather than lowercase mappings.
fn fold_into(cluster: &str, options: SearchOptions, out: &mut String) {
    let decomposed = DecomposingNormalizer::new_nfd().normalize(cluster);
    let key: String = if options.contains(SearchOptions::DIACRITIC_INSENSITIVE) {
        let categories = CodePointMapData::<GeneralCategory>::new();
        decomposed
            .chars()
            .filter(|&ch| categories.get(ch) != GeneralCategory::NonspacingMark)
            .collect()
    } else {
        decomposed.into_owned()
    };
    if options.contains(SearchOptions::CASE_INSENSITIVE) {
        out.push_str(&CaseMapper::new().fold_string(&key));
    } else {
        out.push_str(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::FoldedClusters;
    use crate::grapheme_index::GraphemeIndex;
    use crate::SearchOptions;

    fn keys(text: &str, options: SearchOptions) -> Vec<String> {
        let index = GraphemeIndex::new(text);
        let folded = FoldedClusters::new(text, &index, options);
        (0..folded.len()).map(|i| folded.key(i).to_owned()).collect()
    }

    #[test]
    fn exact_keys_are_decomposed() {
        assert_eq!(
            keys("\u{e9}", SearchOptions::empty()),
            keys("e\u{301}", SearchOptions::empty())
        );
        assert_eq!(keys("Ab", SearchOptions::empty()), ["A", "b"]);
    }

    #[test]
    fn diacritics_and_case_fold_away() {
        let options = SearchOptions::CASE_INSENSITIVE | SearchOptions::DIACRITIC_INSENSITIVE;
        assert_eq!(keys("\u{c9}t\u{e9}", options), ["e", "t", "e"]);
    }

    #[test]
    fn case_insensitive_keys_are_case_folds() {
        let options = SearchOptions::CASE_INSENSITIVE;
        // Final and medial sigma lowercase differently but fold to the same letter.
        assert_eq!(keys("\u{3c2}", options), keys("\u{3a3}", options));
        assert_eq!(keys("\u{3c2}", options), keys("\u{3c3}", options));
        assert_eq!(keys("\u{df}", options), ["ss"]);
    }

    #[test]
    fn case_is_kept_without_the_option() {
        assert_eq!(
            keys("\u{c9}", SearchOptions::DIACRITIC_INSENSITIVE),
            ["E"]
        );
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ErrorKind, SearchOptions, SearchPattern, TextRange, TextSearch, Utf16Range};

const SWIFT: &str = "Swift is a powerful and intuitive programming language for iOS, iPadOS, \
    macOS, tvOS, and watchOS. Writing Swift code is interactive and fun, the syntax is concise \
    yet expressive, and Swift includes modern features developers love. Swift code is safe by \
    design, yet also produces software that runs lightning-fast.";

fn sut() -> TextSearch {
    TextSearch::new(SWIFT)
}

fn collect(text: &TextSearch, pattern: &str, options: SearchOptions) -> Vec<TextRange> {
    let mut ranges = Vec::new();
    text.enumerate_matches(pattern, options, |found| {
        assert_eq!(found.pattern(), pattern);
        assert!(!ranges.contains(&found.range()), "ranges must not repeat");
        ranges.push(found.range());
    })
    .unwrap();
    ranges
}

#[test]
fn utf16_range_of_whole_text() {
    let text = sut();
    let range = text.utf16_range(None);
    assert_eq!(range.location, 0);
    assert_eq!(range.length, text.grapheme_count());
    assert_eq!(text.utf16_range(Some(text.full_range())), range);
}

#[test]
fn utf16_range_of_grapheme_offsets() {
    let text = sut();
    let start = text.byte_offset(11).unwrap();
    let end = text.byte_offset(11 + 8).unwrap();
    let range = text.utf16_range(Some(text.range(start..end).unwrap()));
    assert_eq!(range, Utf16Range::new(11, 8));
}

#[test]
fn text_range_of_whole_text() {
    let text = sut();
    assert_eq!(text.text_range(None), text.full_range());
    let explicit = text.text_range(Some(Utf16Range::new(0, text.grapheme_count())));
    assert_eq!(explicit.start(), 0);
    assert_eq!(explicit.end(), text.len());
}

#[test]
fn text_range_for_powerful() {
    let text = sut();
    let range = text.text_range(Some(Utf16Range::new(11, 8)));
    assert_eq!(Some(range.start()), text.byte_offset(11));
    assert_eq!(Some(range.end()), text.byte_offset(19));
    assert_eq!(&text.as_str()[range.as_range()], "powerful");
}

#[test]
fn text_range_clamps_and_falls_back() {
    let text = TextSearch::new("abcdef");
    // The end is clamped to the text.
    assert_eq!(text.text_range(Some(Utf16Range::new(4, 10))).as_range(), 4..6);
    // A location past the end falls back to the start.
    assert_eq!(text.text_range(Some(Utf16Range::new(7, 2))).as_range(), 0..2);
    assert_eq!(text.text_range(Some(Utf16Range::new(6, 0))).as_range(), 6..6);
}

#[test]
fn text_range_widens_to_clusters() {
    // "👍🏽" is one cluster of 4 UTF-16 units and 8 bytes.
    let text = TextSearch::new("a👍🏽b");
    assert_eq!(text.utf16_len(), 6);
    assert_eq!(text.grapheme_count(), 3);
    let range = text.text_range(Some(Utf16Range::new(2, 1)));
    assert_eq!(range.as_range(), 1..9);
    assert_eq!(text.utf16_range(Some(range)), Utf16Range::new(1, 4));
    assert_eq!(text.utf16_offset(3), 1);
    assert_eq!(text.utf16_offset(100), 6);
}

#[test]
fn grapheme_offsets_round_trip_on_boundaries() {
    let text = TextSearch::new("e\u{301}a");
    assert_eq!(text.byte_offset(1), Some(3));
    assert_eq!(text.grapheme_offset(3), Some(1));
    assert_eq!(text.grapheme_offset(1), None);
    assert_eq!(text.byte_offset(3), None);
}

#[test]
fn case_sensitive_swift_has_no_matches() {
    assert!(collect(&sut(), "swift", SearchOptions::empty()).is_empty());
}

#[test]
fn case_insensitive_swift_has_four_matches() {
    let text = sut();
    let forward = collect(&text, "swift", SearchOptions::CASE_INSENSITIVE);
    assert_eq!(forward.len(), 4);
    assert!(forward.windows(2).all(|w| w[0].end() <= w[1].start()));
    for range in &forward {
        assert_eq!(&text.as_str()[range.as_range()], "Swift");
    }

    let mut backward = collect(&text, "swift", SearchOptions::RELAXED);
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn regex_is_case_sensitive_by_default() {
    assert!(collect(&sut(), "swift i", SearchOptions::REGULAR_EXPRESSION).is_empty());
}

#[test]
fn case_insensitive_regex_matches_twice() {
    let text = sut();
    let options = SearchOptions::REGULAR_EXPRESSION | SearchOptions::CASE_INSENSITIVE;
    let ranges = collect(&text, "swift i", options);
    assert_eq!(ranges.len(), 2);
    for range in &ranges {
        assert_eq!(&text.as_str()[range.as_range()], "Swift i");
    }

    let mut backward = collect(&text, "swift i", options | SearchOptions::BACKWARDS);
    backward.reverse();
    assert_eq!(ranges, backward);
}

#[test]
fn invalid_regex_is_reported() {
    let err = sut()
        .enumerate_matches("(unclosed", SearchOptions::REGULAR_EXPRESSION, |_| {})
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    assert_eq!(err.pattern(), Some("(unclosed"));
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn empty_patterns_never_match() {
    let text = sut();
    assert!(collect(&text, "", SearchOptions::empty()).is_empty());
    // Only empty regex matches exist here, and those are skipped.
    assert!(collect(&text, "q*", SearchOptions::REGULAR_EXPRESSION).is_empty());
    assert!(collect(&TextSearch::new(""), "a", SearchOptions::RELAXED).is_empty());
}

#[test]
fn matches_do_not_overlap() {
    let text = TextSearch::new("aaaa");
    let forward = collect(&text, "aa", SearchOptions::empty());
    assert_eq!(
        forward.iter().map(|r| r.as_range()).collect::<Vec<_>>(),
        [0..2, 2..4]
    );
    let backward = collect(&TextSearch::new("aaa"), "aa", SearchOptions::BACKWARDS);
    assert_eq!(
        backward.iter().map(|r| r.as_range()).collect::<Vec<_>>(),
        [1..3]
    );
    let forward = collect(&TextSearch::new("aaa"), "aa", SearchOptions::empty());
    assert_eq!(
        forward.iter().map(|r| r.as_range()).collect::<Vec<_>>(),
        [0..2]
    );
}

#[test]
fn literal_matches_respect_clusters() {
    // "e" followed by a combining acute accent is a single cluster.
    let text = TextSearch::new("cafe\u{301} cafe");
    let exact = collect(&text, "cafe", SearchOptions::empty());
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].as_range(), 7..11);

    let relaxed = collect(&text, "cafe", SearchOptions::DIACRITIC_INSENSITIVE);
    assert_eq!(relaxed.len(), 2);
    assert_eq!(relaxed[0].as_range(), 0..6);

    // Precomposed and combining spellings are canonically equivalent.
    let precomposed = collect(&text, "caf\u{e9}", SearchOptions::empty());
    assert_eq!(precomposed.len(), 1);
    assert_eq!(precomposed[0].as_range(), 0..6);
}

#[test]
fn regex_matches_are_widened_to_clusters() {
    let text = TextSearch::new("xe\u{301}y");
    let ranges = collect(&text, "xe", SearchOptions::REGULAR_EXPRESSION);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].as_range(), 0..4);
}

#[test]
fn matches_in_stays_inside_the_range() {
    let text = sut();
    let pattern = SearchPattern::new("swift", SearchOptions::CASE_INSENSITIVE).unwrap();
    let first_sentence = text.range(0..97).unwrap();
    assert_eq!(text.matches_in(&pattern, first_sentence).count(), 1);

    let regex = SearchPattern::new(
        "os$",
        SearchOptions::REGULAR_EXPRESSION | SearchOptions::CASE_INSENSITIVE,
    )
    .unwrap();
    let up_to_ios = text.range(0..62).unwrap();
    let found: Vec<_> = text.matches_in(&regex, up_to_ios).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].as_str(), "OS");
}

#[test]
fn replace_is_a_no_op_without_matches() {
    let text = sut();
    let mut calls = 0;
    let result = text
        .replace_matches("swift", SearchOptions::empty(), |_| {
            calls += 1;
            "objc"
        })
        .unwrap();
    assert_eq!(calls, 0);
    assert_eq!(result.as_str(), text.as_str());
}

#[test]
fn replace_visits_every_match_from_the_end() {
    let text = sut();
    let mut starts = Vec::new();
    let result = text
        .replace_matches("swift", SearchOptions::CASE_INSENSITIVE, |found| {
            assert!(found.as_str().eq_ignore_ascii_case("swift"));
            starts.push(found.range().start());
            "Objc"
        })
        .unwrap();
    assert_eq!(starts.len(), 4);
    assert!(starts.windows(2).all(|w| w[0] > w[1]), "backwards order");
    assert_eq!(result.as_str(), SWIFT.replace("Swift", "Objc"));
    assert_eq!(result.grapheme_count(), SWIFT.len() - 4);
}

#[test]
fn replace_with_longer_text_keeps_pending_ranges_valid() {
    let text = TextSearch::new("a-b-c");
    let result = text
        .replace_matches("-", SearchOptions::empty(), |found| {
            format!("<{}>", found.range().start())
        })
        .unwrap();
    assert_eq!(result.as_str(), "a<1>b<3>c");
}

#[test]
fn regex_anchors_see_the_range_bounds() {
    let text = TextSearch::new("foo bar");
    let anchored = |pattern: &str, range: core::ops::Range<usize>| {
        let pattern = SearchPattern::new(pattern, SearchOptions::REGULAR_EXPRESSION).unwrap();
        let range = text.range(range).unwrap();
        text.matches_in(&pattern, range)
            .map(|found| found.range().as_range())
            .collect::<Vec<_>>()
    };
    assert_eq!(anchored("^bar", 4..7), [4..7]);
    assert_eq!(anchored("bar$", 4..7), [4..7]);
    assert_eq!(anchored("foo$", 0..3), [0..3]);
    assert_eq!(anchored(r"\bo", 2..7), [2..3]);
    assert!(anchored("^bar", 0..7).is_empty());
}

#[test]
fn case_insensitive_matching_folds_final_sigma() {
    let text = TextSearch::new("\u{3a3}\u{39f}\u{3a6}\u{39f}\u{3a3}");
    let final_sigma = "\u{3c3}\u{3bf}\u{3c6}\u{3bf}\u{3c2}";
    let medial_sigma = "\u{3c3}\u{3bf}\u{3c6}\u{3bf}\u{3c3}";
    let options = SearchOptions::CASE_INSENSITIVE;
    assert_eq!(collect(&text, final_sigma, options), [text.full_range()]);
    assert_eq!(collect(&text, medial_sigma, options), [text.full_range()]);
    assert!(collect(&text, final_sigma, SearchOptions::empty()).is_empty());
}

#[test]
fn backwards_literal_search_inside_a_range() {
    let text = TextSearch::new("ab ab ab ab");
    let pattern = SearchPattern::literal("ab", SearchOptions::BACKWARDS);
    let middle = text.range(3..8).unwrap();
    let found: Vec<_> = text
        .matches_in(&pattern, middle)
        .map(|found| found.range().as_range())
        .collect();
    assert_eq!(found, [6..8, 3..5]);
}

#[test]
fn backwards_regex_matches_are_widened_to_clusters() {
    // Each "e" carries a combining acute accent, so "xe" ends inside a cluster.
    let text = TextSearch::new("xe\u{301}y xe\u{301}y");
    let ranges = collect(
        &text,
        "xe",
        SearchOptions::REGULAR_EXPRESSION | SearchOptions::BACKWARDS,
    );
    assert_eq!(
        ranges.iter().map(|r| r.as_range()).collect::<Vec<_>>(),
        [6..10, 0..4]
    );
    for range in &ranges {
        assert_eq!(&text.as_str()[range.as_range()], "xe\u{301}");
    }
}

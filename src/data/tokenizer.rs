// ============================================================
// Layer 4 — Bag-of-Words Tokenizer and Markup Extractor
// ============================================================
// Two small text utilities used by the vocabulary analysis:
//
//   to_word_counts("the road and the sea")
//     → {the: 2, road: 1, and: 1, sea: 1}
//
//   find_markups("a <b>bold</b> move")
//     → ["<b>", "</b>"]
//
// Tokens are taken VERBATIM: split on runs of whitespace, no case
// folding, no punctuation stripping ("on," and "on" differ).
// Counts are kept in an IndexMap so iteration follows the order
// of first occurrence, which keeps output reproducible.
//
// Markups are found with a lazy `<.*?>` match: every `<` pairs
// with the NEAREST following `>`, scanning left to right, so
// "<= 10 or >= 20 >" yields "<= 10 or >" and nothing more.
//
// Reference: Rust Book §8 (Hash Maps)
//            indexmap / regex crate documentation

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static MARKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Token → occurrence count, in first-occurrence order
pub type WordCounts = IndexMap<String, usize>;

/// Count whitespace-delimited tokens in `text`.
pub fn to_word_counts(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Every non-overlapping `<...>` substring, in the order found.
///
/// Duplicates are kept; callers building a vocabulary dedupe.
pub fn find_markups(text: &str) -> Vec<String> {
    MARKUP_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts() {
        let counts =
            to_word_counts("The road goes ever on and on, down from the road where it began.");

        assert_eq!(counts.len(), 13);
        assert_eq!(counts["road"], 2);
        for (token, count) in &counts {
            if token != "road" {
                assert_eq!(*count, 1, "unexpected count for '{token}'");
            }
        }
        // "The" and "the", "on" and "on," are distinct tokens
        assert!(counts.contains_key("The") && counts.contains_key("the"));
        assert!(counts.contains_key("on") && counts.contains_key("on,"));
    }

    #[test]
    fn test_word_counts_first_occurrence_order() {
        let counts = to_word_counts("b a b c a");
        let order: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_word_counts_of_blank_text() {
        assert!(to_word_counts(" \t\n ").is_empty());
    }

    #[test]
    fn test_find_markups_is_non_greedy() {
        let markups =
            find_markups("this is a <test> string <> to find <markups>. N is <= 10 or >= 20 >>><<< END!");
        assert_eq!(markups, vec!["<test>", "<>", "<markups>", "<= 10 or >"]);
    }

    #[test]
    fn test_find_markups_keeps_duplicates() {
        let markups = find_markups("a<br />b<br />c");
        assert_eq!(markups, vec!["<br />", "<br />"]);
    }

    #[test]
    fn test_lone_open_bracket_has_no_match() {
        assert!(find_markups("a < b").is_empty());
    }

    #[test]
    fn test_parsed_line_word_counts() {
        let review = crate::domain::review::Review::parse_line("1 efg <p> <pre/>").unwrap();
        let counts = to_word_counts(&review.text);

        let expected: Vec<(&str, usize)> = vec![("efg", 1), ("<p>", 1), ("<pre/>", 1)];
        let got: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(got, expected);
    }
}

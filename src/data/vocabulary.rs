// ============================================================
// Layer 4 — Vocabulary Scanner
// ============================================================
// Walks one split file and gathers:
//
//   - the word vocabulary   → tokens of the CLEANED text
//   - the markup vocabulary → `<...>` spans of the RAW text
//   - simple counts         → documents, tokens, per-class totals
//
// Markups are taken before cleaning on purpose: the cleaner turns
// `<br />` into spaces, and those tags are exactly what the
// markup vocabulary is meant to reveal.
//
// Malformed lines (no label separator, non-integer label) are
// skipped with a warning unless the scanner is strict, in which
// case the first one aborts the scan.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::data::loader::reviews;
use crate::data::preprocessor::TextCleaner;
use crate::data::tokenizer::{find_markups, to_word_counts};
use crate::domain::errors::CorpusError;
use crate::domain::traits::LineSource;

/// Everything learned from one pass over a split file.
#[derive(Debug, Clone, Default)]
pub struct SplitVocabulary {
    /// Parsed records
    pub documents: usize,

    /// Total tokens across all cleaned documents
    pub tokens: usize,

    /// Lines skipped because they could not be parsed
    pub malformed: usize,

    /// Documents per class label, in first-seen order
    pub class_counts: IndexMap<i32, usize>,

    /// Distinct tokens, sorted
    pub words: BTreeSet<String>,

    /// Distinct markup substrings, sorted
    pub markups: BTreeSet<String>,
}

impl SplitVocabulary {
    /// Fold another split's results into this one.
    pub fn merge(&mut self, other: &SplitVocabulary) {
        self.documents += other.documents;
        self.tokens += other.tokens;
        self.malformed += other.malformed;
        for (label, count) in &other.class_counts {
            *self.class_counts.entry(*label).or_insert(0) += count;
        }
        self.words.extend(other.words.iter().cloned());
        self.markups.extend(other.markups.iter().cloned());
    }

    pub fn documents_with_label(&self, label: i32) -> usize {
        self.class_counts.get(&label).copied().unwrap_or(0)
    }
}

pub struct VocabularyScanner<'a> {
    cleaner: &'a TextCleaner,
    strict: bool,
}

impl<'a> VocabularyScanner<'a> {
    pub fn new(cleaner: &'a TextCleaner) -> Self {
        Self { cleaner, strict: false }
    }

    /// Abort on the first malformed line instead of skipping it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn scan(&self, source: &dyn LineSource) -> Result<SplitVocabulary> {
        let mut vocab = SplitVocabulary::default();

        for review in reviews(source)? {
            let review = match review {
                Ok(review) => review,
                Err(e) if !self.strict && e.downcast_ref::<CorpusError>().is_some() => {
                    tracing::warn!("Skipping malformed record in '{}': {:#}", source.describe(), e);
                    vocab.malformed += 1;
                    continue;
                }
                Err(e) => return Err(e.context(format!("Cannot scan '{}'", source.describe()))),
            };

            vocab.documents += 1;
            *vocab.class_counts.entry(review.label).or_insert(0) += 1;

            for (word, count) in to_word_counts(&self.cleaner.clean(&review.text)) {
                vocab.tokens += count;
                vocab.words.insert(word);
            }
            vocab.markups.extend(find_markups(&review.text));
        }

        tracing::info!(
            "Scanned '{}': {} documents, {} distinct words, {} distinct markups",
            source.describe(),
            vocab.documents,
            vocab.words.len(),
            vocab.markups.len()
        );

        Ok(vocab)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory lines, restartable like a file
    struct MemoryLines(Vec<&'static str>);

    impl LineSource for MemoryLines {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>> {
            Ok(Box::new(self.0.iter().map(|l| Ok::<_, anyhow::Error>(l.to_string()))))
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scan_words_and_markups() {
        let cleaner = TextCleaner::new();
        let source = MemoryLines(vec![
            "1 great<br />fun <i>really</i>",
            "",
            "-1 not fun",
        ]);

        let vocab = VocabularyScanner::new(&cleaner).scan(&source).unwrap();
        assert_eq!(vocab.documents, 2);
        assert_eq!(vocab.tokens, 5);
        assert_eq!(vocab.words, set(&["great", "fun", "<i>really</i>", "not"]));
        assert_eq!(vocab.markups, set(&["<br />", "<i>", "</i>"]));
        assert_eq!(vocab.documents_with_label(1), 1);
        assert_eq!(vocab.documents_with_label(-1), 1);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let cleaner = TextCleaner::new();
        let source = MemoryLines(vec!["1 fine", "oops", "x also bad"]);

        let vocab = VocabularyScanner::new(&cleaner).scan(&source).unwrap();
        assert_eq!(vocab.documents, 1);
        assert_eq!(vocab.malformed, 2);
    }

    #[test]
    fn test_strict_scan_aborts() {
        let cleaner = TextCleaner::new();
        let source = MemoryLines(vec!["1 fine", "oops"]);

        let result = VocabularyScanner::new(&cleaner).strict(true).scan(&source);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge() {
        let cleaner = TextCleaner::new();
        let scanner = VocabularyScanner::new(&cleaner);
        let mut total = scanner.scan(&MemoryLines(vec!["1 a b"])).unwrap();
        let other = scanner.scan(&MemoryLines(vec!["1 b c", "-1 <p>"])).unwrap();

        total.merge(&other);
        assert_eq!(total.documents, 3);
        assert_eq!(total.tokens, 5);
        assert_eq!(total.words, set(&["a", "b", "c", "<p>"]));
        assert_eq!(total.documents_with_label(1), 2);
        assert_eq!(total.markups, set(&["<p>"]));
    }
}

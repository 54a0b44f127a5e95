// ============================================================
// Layer 4 — Text Cleaner
// ============================================================
// Cleans raw review text before tokenisation.
//
// The movie reviews are scraped HTML fragments: line breaks show
// up as `<br />`, `<br>`, `<br/>` and friends. Those tags are
// really whitespace, so each occurrence is replaced by ONE space.
//
// Cleaning steps (applied in order):
//   1. Trim leading/trailing whitespace
//   2. Replace every match of every whitespace-equivalent markup
//      pattern with a single space
//
// Patterns are applied independently over the whole string.
// No whitespace collapsing happens afterwards, so
// "a <br/> b" becomes "a   b".
//
// The pattern list belongs to the cleaner instance. Callers that
// recognise more tags build a cleaner with extra patterns
// instead of mutating any shared state.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Built-in pattern: `<br>`, `<br/>`, `<br />`, `<br   />`, `<br >`
pub const DEFAULT_WHITESPACE_MARKUP: &str = r"<br\s*/?>";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_WHITESPACE_MARKUP).unwrap());

#[derive(Debug, Clone)]
pub struct TextCleaner {
    /// Markup that should be read as whitespace
    whitespace_markups: Vec<Regex>,
}

impl TextCleaner {
    /// Create a cleaner that knows only the built-in line-break pattern
    pub fn new() -> Self {
        Self {
            whitespace_markups: vec![DEFAULT_REGEX.clone()],
        }
    }

    /// Create a cleaner with the built-in pattern plus `extra` patterns.
    pub fn with_patterns<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaner = Self::new();
        for pattern in extra {
            cleaner.add_pattern(pattern.as_ref())?;
        }
        Ok(cleaner)
    }

    /// Register one more whitespace-equivalent markup pattern.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid whitespace markup pattern '{pattern}'"))?;
        self.whitespace_markups.push(regex);
        Ok(self)
    }

    /// The pattern sources, in the order they are applied
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.whitespace_markups.iter().map(|r| r.as_str())
    }

    /// Clean a raw text string for downstream tokenisation.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.trim().to_string();

        for pattern in &self.whitespace_markups {
            cleaned = pattern.replace_all(&cleaned, " ").into_owned();
        }

        cleaned
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_become_single_spaces() {
        let c = TextCleaner::new();
        let input = " \t\nabcd <br> <br />  <br > <br/> <br   /> efg\n\t  ";
        // 7 original spaces between the words + 5 tags, one space each.
        // Twelve is correct; do not pad this to 15.
        let expected = format!("abcd{}efg", " ".repeat(12));
        assert_eq!(c.clean(input), expected);
    }

    #[test]
    fn test_trims_edges() {
        let c = TextCleaner::new();
        assert_eq!(c.clean("  hello world \n"), "hello world");
    }

    #[test]
    fn test_other_markup_is_kept() {
        let c = TextCleaner::new();
        assert_eq!(c.clean("a <p>b</p> <i>c</i>"), "a <p>b</p> <i>c</i>");
    }

    #[test]
    fn test_extra_patterns_are_applied() {
        let c = TextCleaner::with_patterns([r"</?p>"]).unwrap();
        assert_eq!(c.clean("a<p>b</p>c<br/>d"), "a b c d");
        assert_eq!(c.patterns().count(), 2);
    }

    #[test]
    fn test_patterns_are_per_instance() {
        let mut extended = TextCleaner::new();
        extended.add_pattern(r"<hr\s*/?>").unwrap();

        let plain = TextCleaner::new();
        assert_eq!(extended.clean("a<hr/>b"), "a b");
        assert_eq!(plain.clean("a<hr/>b"), "a<hr/>b");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut c = TextCleaner::new();
        assert!(c.add_pattern("<br(").is_err());
        // The failed pattern must not have been registered
        assert_eq!(c.patterns().collect::<Vec<_>>(), vec![DEFAULT_WHITESPACE_MARKUP]);
    }

    #[test]
    fn test_empty_string() {
        let c = TextCleaner::new();
        assert_eq!(c.clean(""), "");
    }
}

// ============================================================
// Layer 3 — Review Domain Type
// ============================================================
// One record of a train/dev/test split file:
//
//   <label><SP><text>\n
//
// The label is a signed integer (1 = positive, -1 = negative
// for the movie review corpus). The text is everything after
// the FIRST space, embedded spaces included, with no escaping.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §9 (Recoverable Errors with Result)

use std::str::FromStr;

use crate::domain::errors::CorpusError;

/// Label used for positive reviews.
pub const POSITIVE_LABEL: i32 = 1;

/// Label used for negative reviews.
pub const NEGATIVE_LABEL: i32 = -1;

/// A labelled review as stored in a split file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Class label, e.g. 1 or -1
    pub label: i32,

    /// Raw review body, may still contain HTML markup
    pub text: String,
}

impl Review {
    pub fn new(label: i32, text: impl Into<String>) -> Self {
        Self { label, text: text.into() }
    }

    /// Split a line into label and text at the first space.
    ///
    /// Blank lines are NOT handled here: callers must skip them
    /// before parsing, otherwise they surface as `MissingSeparator`.
    pub fn parse_line(line: &str) -> Result<Self, CorpusError> {
        let (label, text) = line
            .split_once(' ')
            .ok_or_else(|| CorpusError::MissingSeparator { line: line.to_string() })?;

        let label = label
            .parse::<i32>()
            .map_err(|_| CorpusError::InvalidLabel { label: label.to_string() })?;

        Ok(Self::new(label, text))
    }

    /// Render the review as one split-file line (without the
    /// trailing newline). Line breaks inside the text are folded
    /// into single spaces so the record stays on one line.
    pub fn to_line(&self) -> String {
        let text: Vec<&str> = self.text.lines().collect();
        format!("{} {}", self.label, text.join(" "))
    }
}

impl FromStr for Review {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

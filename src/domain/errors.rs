// ============================================================
// Layer 3 — Corpus Errors
// ============================================================
// Parse failures for `<label> <text>` corpus lines.
//
// These are kept as a typed enum (rather than an anyhow string)
// so callers scanning a whole file can tell a malformed line
// apart from an I/O failure and decide whether to skip it.

use thiserror::Error;

/// Reasons a corpus line cannot be turned into a `Review`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// The line has no space between label and text.
    #[error("line has no label separator: '{line}'")]
    MissingSeparator { line: String },

    /// The label before the first space is not a signed integer.
    #[error("invalid class label '{label}'")]
    InvalidLabel { label: String },
}

// ============================================================
// Layer 6 — Vocabulary Report
// ============================================================
// Per-split statistics from an analysis run, rendered either as
// a markdown table for the terminal or as pretty JSON on disk.
//
// Example table:
//   |split | documents | positive | negative | tokens | vocabulary | markups | malformed|
//   |--|--|--|--|--|--|--|--|
//   | train | 5000 | 2509 | 2491 | 1169412 | 88311 | 37 | 0 |
//
// Reference: Rust Book §12 (I/O and File Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::data::vocabulary::SplitVocabulary;
use crate::domain::review::{NEGATIVE_LABEL, POSITIVE_LABEL};

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    /// "train", "dev", "test" or "total"
    pub split: String,
    pub documents: usize,
    pub positive: usize,
    pub negative: usize,
    pub tokens: usize,
    pub vocabulary: usize,
    pub markups: usize,
    pub malformed: usize,
}

impl SplitStats {
    pub fn from_vocabulary(split: impl Into<String>, vocab: &SplitVocabulary) -> Self {
        Self {
            split: split.into(),
            documents: vocab.documents,
            positive: vocab.documents_with_label(POSITIVE_LABEL),
            negative: vocab.documents_with_label(NEGATIVE_LABEL),
            tokens: vocab.tokens,
            vocabulary: vocab.words.len(),
            markups: vocab.markups.len(),
            malformed: vocab.malformed,
        }
    }

    const HEADER: [&'static str; 8] = [
        "split", "documents", "positive", "negative", "tokens", "vocabulary", "markups", "malformed",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.split.clone(),
            self.documents.to_string(),
            self.positive.to_string(),
            self.negative.to_string(),
            self.tokens.to_string(),
            self.vocabulary.to_string(),
            self.markups.to_string(),
            self.malformed.to_string(),
        ]
    }
}

/// Render rows as a markdown table.
pub fn markdown_table(rows: &[SplitStats]) -> String {
    let rows: Vec<Vec<String>> = rows.iter().map(SplitStats::cells).collect();
    render_table(&SplitStats::HEADER, &rows)
}

/// `|a | b|` header, `|--|--|` rule, then `| x | y |` rows.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut md = vec![format!("|{}|", header.join(" | "))];
    md.push(format!("{}|", "|--".repeat(header.len())));
    for row in rows {
        md.push(format!("| {} |", row.join(" | ")));
    }
    md.join("\n")
}

/// Write the rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[SplitStats]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

    tracing::debug!("Saved vocabulary report to '{}'", path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn stats(split: &str) -> SplitStats {
        SplitStats {
            split: split.to_string(),
            documents: 3,
            positive: 2,
            negative: 1,
            tokens: 40,
            vocabulary: 25,
            markups: 2,
            malformed: 0,
        }
    }

    #[test]
    fn test_render_table_layout() {
        let rows = vec![vec!["x".to_string(), "1".to_string()]];
        assert_eq!(render_table(&["a", "b"], &rows), "|a | b|\n|--|--|\n| x | 1 |");
    }

    #[test]
    fn test_markdown_table_has_row_per_split() {
        let table = markdown_table(&[stats("train"), stats("dev")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "| train | 3 | 2 | 1 | 40 | 25 | 2 | 0 |");
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reports/vocab.json");
        let rows = vec![stats("train"), stats("total")];

        write_json(&path, &rows).unwrap();
        let back: Vec<SplitStats> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, rows);
    }
}

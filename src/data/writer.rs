// ============================================================
// Layer 4 — Split File Writer
// ============================================================
// Turns a sample of (label, row-index) entries back into review
// text and writes one split file:
//
//   1 This movie was great fun ...
//   -1 I want those two hours back ...
//
// Each entry is resolved through ClassFiles to the review file
// it points at; that file is read whole and written as a single
// `<label> <text>` line (line breaks folded into spaces).
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::data::loader::ClassFiles;
use crate::domain::review::Review;
use crate::domain::sample::SampleEntry;

/// Write the sampled reviews to `path`, replacing any existing file.
/// Returns the number of records written.
pub fn save_dataset(
    path: &Path,
    entries: &[SampleEntry<i32>],
    class_files: &ClassFiles,
) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Cannot create dataset file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    for entry in entries {
        let review_path = class_files.get(entry.label, entry.index).with_context(|| {
            format!("No review file for label {} at index {}", entry.label, entry.index)
        })?;

        let text = fs::read_to_string(review_path)
            .with_context(|| format!("Cannot read review '{}'", review_path.display()))?;

        writeln!(out, "{}", Review::new(entry.label, text).to_line())?;
    }

    out.flush()
        .with_context(|| format!("Cannot write dataset file '{}'", path.display()))?;

    tracing::debug!("Wrote {} records to '{}'", entries.len(), path.display());
    Ok(entries.len())
}

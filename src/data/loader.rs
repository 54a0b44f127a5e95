// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Two kinds of input are read from disk:
//
//   1. Split files (train/dev/test) — one `<label> <text>` record
//      per line. CorpusFile implements LineSource and streams
//      them lazily; `reviews()` turns lines into Reviews.
//
//   2. The unpacked archive — one review per .txt file, laid out
//      as:
//        aclImdb/
//          train/pos/*.txt   train/neg/*.txt   train/unsup/*.txt
//          test/pos/*.txt    test/neg/*.txt
//      `collect_class_files()` walks this tree and groups files
//      by class label.
//
// Within a class, files are sorted by path. The sampler only
// hands back positional row indices, so a stable order is what
// makes an index point at the same review every time.
//
// Reference: walkdir crate documentation
//            Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

use crate::domain::errors::CorpusError;
use crate::domain::review::{Review, NEGATIVE_LABEL, POSITIVE_LABEL};
use crate::domain::sample::ClassCount;
use crate::domain::traits::LineSource;

// ─── Split files ──────────────────────────────────────────────────────────────

/// A split file on disk, read one line at a time.
pub struct CorpusFile {
    path: PathBuf,
}

impl CorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for CorpusFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    /// Reopens the file on every call, so each pass starts at line 1
    fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open corpus file '{}'", self.path.display()))?;

        let lines = BufReader::new(file).lines().map(move |line| {
            line.with_context(|| format!("Cannot read line from '{}'", self.path.display()))
        });

        Ok(Box::new(lines))
    }
}

/// Lazily parse every non-blank line of `source` into a Review.
///
/// Parse failures are yielded as `CorpusError` wrapped in anyhow,
/// so callers can `downcast_ref::<CorpusError>()` to skip them
/// while still propagating I/O failures.
pub fn reviews<'a>(
    source: &'a dyn LineSource,
) -> Result<impl Iterator<Item = Result<Review>> + 'a> {
    let lines = source.lines()?;

    Ok(lines
        .enumerate()
        .filter_map(|(n, line)| match line {
            // Blank lines are skipped before they reach the parser
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                Review::parse_line(&line)
                    .map_err(|e: CorpusError| anyhow::Error::new(e).context(format!("line {}", n + 1))),
            ),
            Err(e) => Some(Err(e)),
        }))
}

// ─── Unpacked archive ────────────────────────────────────────────────────────

/// Review files grouped by class label, in class order.
#[derive(Debug, Clone, Default)]
pub struct ClassFiles {
    classes: Vec<(i32, Vec<PathBuf>)>,
}

impl ClassFiles {
    pub fn new(classes: Vec<(i32, Vec<PathBuf>)>) -> Self {
        Self { classes }
    }

    /// Per-class population counts, as the sampler wants them
    pub fn counts(&self) -> Vec<ClassCount<i32>> {
        self.classes
            .iter()
            .map(|(label, files)| ClassCount::new(*label, files.len()))
            .collect()
    }

    /// The file at row `index` of class `label`, if any
    pub fn get(&self, label: i32, index: usize) -> Option<&Path> {
        self.classes
            .iter()
            .find(|(l, _)| *l == label)
            .and_then(|(_, files)| files.get(index))
            .map(PathBuf::as_path)
    }

    pub fn total(&self) -> usize {
        self.classes.iter().map(|(_, files)| files.len()).sum()
    }
}

/// Collect `pos` (label 1) and `neg` (label -1) review files of one
/// split (`"train"` or `"test"`) anywhere under `root`.
///
/// A file belongs to a class when its path, relative to `root`,
/// has a `split` component followed later by a `pos`/`neg`
/// component, and it ends in `.txt`.
pub fn collect_class_files(root: &Path, split: &str) -> Result<ClassFiles> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.with_context(|| format!("Cannot walk '{}'", root.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        match class_of(relative, split) {
            Some(POSITIVE_LABEL) => positive.push(path.to_path_buf()),
            Some(NEGATIVE_LABEL) => negative.push(path.to_path_buf()),
            _ => {}
        }
    }

    positive.sort();
    negative.sort();

    tracing::debug!(
        "Found {} positive and {} negative '{}' reviews under '{}'",
        positive.len(),
        negative.len(),
        split,
        root.display()
    );

    Ok(ClassFiles::new(vec![
        (POSITIVE_LABEL, positive),
        (NEGATIVE_LABEL, negative),
    ]))
}

/// Class label for a relative path, matching `**/<split>/**/{pos,neg}/**/*.txt`
fn class_of(relative: &Path, split: &str) -> Option<i32> {
    // Directory components only, never the file name
    let dirs: Vec<&str> = relative
        .parent()?
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    let split_at = dirs.iter().position(|d| *d == split)?;
    dirs[split_at + 1..].iter().find_map(|d| match *d {
        "pos" => Some(POSITIVE_LABEL),
        "neg" => Some(NEGATIVE_LABEL),
        _ => None,
    })
}

// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The text utilities and the dataset pipeline only ever talk to
// these traits, never to files or HTTP clients directly:
//
//   - LineSource  → CorpusFile reads a split file lazily
//                   (tests use in-memory lines)
//   - Downloader  → HttpDownloader fetches over HTTP
//                   LocalCopyDownloader copies a local archive
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;
use std::path::Path;

// ─── LineSource ───────────────────────────────────────────────────────────────
/// A finite, restartable sequence of text lines.
///
/// Each call to `lines()` starts again from the first line, so a
/// file-backed source simply reopens the file. The returned
/// iterator is lazy, the whole input is never buffered.
pub trait LineSource {
    /// Human-readable origin, used in log and error messages.
    fn describe(&self) -> String;

    /// Start a fresh pass over the lines (without line terminators).
    fn lines(&self) -> Result<Box<dyn Iterator<Item = Result<String>> + '_>>;
}

// ─── Downloader ───────────────────────────────────────────────────────────────
/// Anything that can fetch a URL into a local file.
///
/// Implementations must fail on a non-success status; there is
/// no retry at this level.
pub trait Downloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

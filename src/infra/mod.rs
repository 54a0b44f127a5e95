// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the outside world:
//
//   config.rs     — Sectioned JSON settings with ${...}
//                   interpolation and per-key defaults
//
//   downloader.rs — HTTP download (reqwest, progress bar) and a
//                   local-copy stand-in for offline runs
//
//   archive.rs    — Unpacking the .tar.gz corpus archive
//
//   workspace.rs  — Dataset dir creation and per-run temp dirs
//
//   report.rs     — Vocabulary statistics as markdown or JSON
//
// Keeping these here lets the data layer stay pure text
// processing that can be tested without disk or network.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Sectioned configuration lookup
pub mod config;

/// URL → local file
pub mod downloader;

/// .tar.gz extraction
pub mod archive;

/// Dataset and temp directory management
pub mod workspace;

/// Vocabulary statistics output
pub mod report;

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw review files and vocabulary numbers.
//
// Dataset assembly (sample-stanford-imdb):
//
//   unpacked archive
//       │
//       ▼
//   loader::collect_class_files → review files grouped by class
//       │
//       ▼
//   sampler                     → random (label, index) entries
//       │
//       ▼
//   writer::save_dataset        → `<label> <text>` split files
//
// Vocabulary analysis (analyze-stanford-imdb):
//
//   split file
//       │
//       ▼
//   loader::CorpusFile          → lazy lines → Reviews
//       │
//       ▼
//   TextCleaner                 → strips whitespace-equivalent markup
//       │
//       ▼
//   tokenizer                   → word counts + markup substrings
//       │
//       ▼
//   VocabularyScanner           → per-split vocabularies and counts
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads split files lazily and groups unpacked review files by class
pub mod loader;

/// Replaces whitespace-equivalent HTML markup with spaces
pub mod preprocessor;

/// Draws class-spanning random samples without replacement
pub mod sampler;

/// Bag-of-words counts and `<...>` markup extraction
pub mod tokenizer;

/// Collects word and markup vocabularies from a split file
pub mod vocabulary;

/// Writes sampled reviews to split files
pub mod writer;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per command:
//
//   sample-stanford-imdb  → SampleUseCase
//   analyze-stanford-imdb → AnalyzeUseCase
//
// Rules for this layer:
//   - No text processing here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Paths and URLs resolved from the configuration file
pub mod settings;

// Download, unpack, sample and write the split files
pub mod sample_use_case;

// Vocabulary and statistics over the split files
pub mod analyze_use_case;

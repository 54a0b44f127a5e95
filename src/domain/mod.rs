// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that describe the
// corpus: labelled reviews, class populations, sample entries,
// and the seams (line sources, downloaders) the other layers
// plug into.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO regex or text-processing machinery
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A labelled movie review, one line of a split file
pub mod review;

// Class populations and the (label, row-index) sample entries
pub mod sample;

// Typed parse failures for corpus lines
pub mod errors;

// Core abstractions (traits) that other layers implement
pub mod traits;

// ============================================================
// Layer 3 — Sampling Domain Types
// ============================================================
// A stratified population is described only by how many items
// each class holds:
//
//   [(1, 12500), (-1, 12500)]
//
// A sample is a list of (label, row-index) pairs. The row index
// is POSITIONAL: it only means something together with the
// original per-class ordering of the source items (for the
// movie review corpus: the sorted list of review files).
//
// Reference: Rust Book §5 (Structs), §10 (Generic Types)

/// How many items exist for one class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCount<L> {
    pub label: L,
    pub count: usize,
}

impl<L> ClassCount<L> {
    pub fn new(label: L, count: usize) -> Self {
        Self { label, count }
    }
}

impl<L> From<(L, usize)> for ClassCount<L> {
    fn from((label, count): (L, usize)) -> Self {
        Self::new(label, count)
    }
}

/// One sampled item: a class label plus a row index in [0, count).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleEntry<L> {
    pub label: L,
    pub index: usize,
}

impl<L> SampleEntry<L> {
    pub fn new(label: L, index: usize) -> Self {
        Self { label, index }
    }
}

/// Total number of items across all classes.
pub fn population_size<L>(class_counts: &[ClassCount<L>]) -> usize {
    class_counts.iter().map(|c| c.count).sum()
}

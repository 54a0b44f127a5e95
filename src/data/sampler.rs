// ============================================================
// Layer 4 — Stratified Sampler
// ============================================================
// Draws a fixed-size random sample, without replacement, from a
// population that is known only by its per-class counts.
//
// How it works:
//   1. Enumerate every (label, index) pair, class by class:
//        [(1,0), (1,1), ..., (1,n-1), (-1,0), ..., (-1,m-1)]
//   2. Shuffle the whole enumeration (Fisher-Yates)
//   3. Keep the first `sample_size` entries
//
// Every entry is equally likely to land in any position of the
// kept prefix. Class balance is NOT enforced; it only holds in
// expectation, because each class is sampled in proportion to
// its share of the population.
//
// Shortfall policy:
//   If the population is smaller than the requested size, a
//   warning is logged and an EMPTY Vec is returned. Callers
//   must compare the returned length with what they asked for.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::sample::{population_size, ClassCount, SampleEntry};

/// Sample `sample_size` distinct (label, index) entries using the
/// thread-local RNG.
///
/// # Example
/// ```
/// let counts = vec![ClassCount::new(1, 100), ClassCount::new(-1, 100)];
/// let sample = get_sample_dataset(&counts, 10);
/// assert_eq!(sample.len(), 10);
/// ```
pub fn get_sample_dataset<L: Clone>(
    class_counts: &[ClassCount<L>],
    sample_size: usize,
) -> Vec<SampleEntry<L>> {
    let mut rng = rand::thread_rng();
    get_sample_dataset_with_rng(class_counts, sample_size, &mut rng)
}

/// Same as [`get_sample_dataset`] but with a caller-supplied RNG,
/// so runs can be made reproducible with a seeded generator.
pub fn get_sample_dataset_with_rng<L: Clone, R: Rng + ?Sized>(
    class_counts: &[ClassCount<L>],
    sample_size: usize,
    rng: &mut R,
) -> Vec<SampleEntry<L>> {
    let population = population_size(class_counts);

    if population < sample_size {
        tracing::warn!(
            "Population size {} is smaller than the requested sample size {}, returning an empty sample",
            population,
            sample_size
        );
        return Vec::new();
    }

    // Full enumeration in class-list order, then index order
    let mut entries: Vec<SampleEntry<L>> = Vec::with_capacity(population);
    for class in class_counts {
        entries.extend((0..class.count).map(|i| SampleEntry::new(class.label.clone(), i)));
    }

    entries.shuffle(rng);
    entries.truncate(sample_size);

    tracing::debug!(
        "Sampled {} of {} entries across {} classes",
        entries.len(),
        population,
        class_counts.len()
    );

    entries
}

/// Split a sample into a head of `head_size` entries and the rest.
///
/// Used to carve one random sample into train and dev sets.
/// `head_size` is clamped to the sample length.
pub fn split_sample<T>(mut entries: Vec<T>, head_size: usize) -> (Vec<T>, Vec<T>) {
    let split_at = head_size.min(entries.len());

    // split_off(n) removes elements [n..] from the Vec and returns them
    let tail = entries.split_off(split_at);
    (entries, tail)
}

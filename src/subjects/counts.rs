// Subject counts and frequency vectors.
//
// BTreeMap keeps iteration lexicographic, which makes every downstream
// ordering (set intersection, stable sorts on ties) deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::models::WorkRecord;

/// Subject label -> occurrence count.
pub type SubjectCounts = BTreeMap<String, u64>;

/// Subject label -> share of the total count, in [0, 1].
pub type FrequencyVector = BTreeMap<String, f64>;

/// Rescale counts so they sum to 1.
///
/// A zero total is treated as 1, so all-zero counts map to all-zero
/// frequencies instead of dividing by zero. Empty in, empty out.
/// The total is accumulated in f64 so counts near `u64::MAX` cannot overflow.
pub fn normalize(counts: &SubjectCounts) -> FrequencyVector {
    let total: f64 = counts.values().map(|&count| count as f64).sum();
    let total = if total > 0.0 { total } else { 1.0 };
    counts
        .iter()
        .map(|(subject, &count)| (subject.clone(), count as f64 / total))
        .collect()
}

/// Count, per subject, how many works carry it.
pub fn aggregate_works(works: &[WorkRecord]) -> SubjectCounts {
    let mut counts = SubjectCounts::new();
    for work in works {
        for subject in &work.subjects {
            *counts.entry(subject.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// The key set of a count map.
pub fn subject_set(counts: &SubjectCounts) -> BTreeSet<&str> {
    counts.keys().map(String::as_str).collect()
}

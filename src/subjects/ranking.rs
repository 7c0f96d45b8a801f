// Shared and distinctive subject ranking.
//
// Shared subjects are ranked by combined frequency. The distinctive list for
// an author is their exclusive subjects (by own frequency) followed by every
// shared subject re-ranked by how much more that author uses it. Both halves
// use stable sorts over lexicographic input, so ties are deterministic.

use std::cmp::Ordering;

use super::counts::{normalize, FrequencyVector, SubjectCounts};
use super::similarity::{score_counts, SimilarityScores};

/// Which author of the pair a view is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Counts and frequencies of one subject, seen from one author's side.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStats {
    pub subject: String,
    pub own_count: u64,
    pub own_freq: f64,
    pub other_count: u64,
    pub other_freq: f64,
}

impl SubjectStats {
    /// Own frequency minus the other author's frequency.
    pub fn gap(&self) -> f64 {
        self.own_freq - self.other_freq
    }

    pub fn min_freq(&self) -> f64 {
        self.own_freq.min(self.other_freq)
    }

    pub fn avg_freq(&self) -> f64 {
        (self.own_freq + self.other_freq) / 2.0
    }
}

/// Full comparison of two subject-count maps. Inputs are owned copies and
/// never modified.
#[derive(Debug, Clone)]
pub struct SubjectComparison {
    pub counts1: SubjectCounts,
    pub counts2: SubjectCounts,
    pub freq1: FrequencyVector,
    pub freq2: FrequencyVector,
    pub scores: SimilarityScores,
    /// Shared subjects, highest combined frequency first
    pub shared: Vec<String>,
    pub distinctive1: Vec<String>,
    pub distinctive2: Vec<String>,
}

impl SubjectComparison {
    pub fn new(counts1: SubjectCounts, counts2: SubjectCounts) -> Self {
        let freq1 = normalize(&counts1);
        let freq2 = normalize(&counts2);
        let scores = score_counts(&counts1, &counts2);
        let shared = shared_subjects(&freq1, &freq2);
        let distinctive1 = distinctive_subjects(&freq1, &freq2, &shared);
        let distinctive2 = distinctive_subjects(&freq2, &freq1, &shared);

        Self {
            counts1,
            counts2,
            freq1,
            freq2,
            scores,
            shared,
            distinctive1,
            distinctive2,
        }
    }

    /// Ranked distinctive list for `side`.
    pub fn distinctive(&self, side: Side) -> &[String] {
        match side {
            Side::First => &self.distinctive1,
            Side::Second => &self.distinctive2,
        }
    }

    /// Number of distinct subjects for `side`.
    pub fn subject_count(&self, side: Side) -> usize {
        self.counts(side).len()
    }

    fn counts(&self, side: Side) -> &SubjectCounts {
        match side {
            Side::First => &self.counts1,
            Side::Second => &self.counts2,
        }
    }

    fn freq(&self, side: Side) -> &FrequencyVector {
        match side {
            Side::First => &self.freq1,
            Side::Second => &self.freq2,
        }
    }

    /// Stats for `subject` from `side`'s point of view. Missing entries read
    /// as zero.
    pub fn stats(&self, subject: &str, side: Side) -> SubjectStats {
        let other = side.other();
        SubjectStats {
            subject: subject.to_string(),
            own_count: self.counts(side).get(subject).copied().unwrap_or(0),
            own_freq: self.freq(side).get(subject).copied().unwrap_or(0.0),
            other_count: self.counts(other).get(subject).copied().unwrap_or(0),
            other_freq: self.freq(other).get(subject).copied().unwrap_or(0.0),
        }
    }
}

/// Subjects present on both sides, ordered by `freq1 + freq2` descending.
pub fn shared_subjects(freq1: &FrequencyVector, freq2: &FrequencyVector) -> Vec<String> {
    let mut shared: Vec<String> = freq1
        .keys()
        .filter(|subject| freq2.contains_key(*subject))
        .cloned()
        .collect();
    sort_desc_by(&mut shared, |subject| freq1[subject] + freq2[subject]);
    shared
}

/// Exclusive subjects of `own` (by own frequency), then `shared` re-ranked by
/// `own - other`.
pub fn distinctive_subjects(
    own: &FrequencyVector,
    other: &FrequencyVector,
    shared: &[String],
) -> Vec<String> {
    let mut exclusive: Vec<String> = own
        .keys()
        .filter(|subject| !other.contains_key(*subject))
        .cloned()
        .collect();
    sort_desc_by(&mut exclusive, |subject| own[subject]);

    let mut reranked = shared.to_vec();
    sort_desc_by(&mut reranked, |subject| {
        own.get(subject).copied().unwrap_or(0.0) - other.get(subject).copied().unwrap_or(0.0)
    });

    exclusive.extend(reranked);
    exclusive
}

// Stable descending sort on a float key.
fn sort_desc_by<F>(subjects: &mut [String], key: F)
where
    F: Fn(&String) -> f64,
{
    subjects.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> SubjectCounts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_shared_ordered_by_combined_frequency() {
        let cmp = SubjectComparison::new(
            counts(&[("a", 1), ("b", 5), ("c", 4)]),
            counts(&[("a", 1), ("b", 1), ("c", 8)]),
        );
        assert_eq!(cmp.shared, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_shared_ties_keep_lexicographic_order() {
        let cmp = SubjectComparison::new(
            counts(&[("zeta", 1), ("alpha", 1)]),
            counts(&[("zeta", 1), ("alpha", 1)]),
        );
        assert_eq!(cmp.shared, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_distinctive_exclusive_first() {
        let cmp = SubjectComparison::new(
            counts(&[("only1", 1), ("shared", 9)]),
            counts(&[("shared", 1), ("only2", 1)]),
        );
        assert_eq!(cmp.distinctive1, vec!["only1", "shared"]);
        assert_eq!(cmp.distinctive2, vec!["only2", "shared"]);
    }

    #[test]
    fn test_stats_from_each_side() {
        let cmp = SubjectComparison::new(counts(&[("a", 3), ("b", 1)]), counts(&[("b", 2), ("c", 4)]));
        let first = cmp.stats("b", Side::First);
        assert_eq!(first.own_count, 1);
        assert_eq!(first.other_count, 2);
        assert!((first.gap() - (0.25 - 2.0 / 6.0)).abs() < 1e-12);

        let second = cmp.stats("b", Side::Second);
        assert_eq!(second.own_count, 2);
        assert!((second.gap() + first.gap()).abs() < 1e-12);

        let missing = cmp.stats("c", Side::First);
        assert_eq!(missing.own_count, 0);
        assert_eq!(missing.own_freq, 0.0);
    }
}

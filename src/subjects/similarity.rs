// Similarity metrics between two subject profiles.
//
// Two measures only:
//   - Jaccard over the subject key sets (does the vocabulary overlap?)
//   - Cosine over normalized frequency vectors (is the emphasis alike?)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::counts::{normalize, subject_set, FrequencyVector, SubjectCounts};

/// Both similarity scores for a pair of authors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub jaccard: f64,
    pub cosine: f64,
}

/// |A ∩ B| / |A ∪ B|. Two empty sets agree fully and score 1.0.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union.max(1) as f64
}

/// Cosine similarity over the union of both vectors' keys.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine(v1: &FrequencyVector, v2: &FrequencyVector) -> f64 {
    let keys: BTreeSet<&String> = v1.keys().chain(v2.keys()).collect();

    let mut dot = 0.0;
    let mut norm1 = 0.0;
    let mut norm2 = 0.0;
    for key in keys {
        let a = v1.get(key).copied().unwrap_or(0.0);
        let b = v2.get(key).copied().unwrap_or(0.0);
        dot += a * b;
        norm1 += a * a;
        norm2 += b * b;
    }

    let norm1 = norm1.sqrt();
    let norm2 = norm2.sqrt();
    if norm1 == 0.0 || norm2 == 0.0 {
        0.0
    } else {
        dot / (norm1 * norm2)
    }
}

/// Compute both scores straight from raw counts.
pub fn score_counts(counts1: &SubjectCounts, counts2: &SubjectCounts) -> SimilarityScores {
    SimilarityScores {
        jaccard: jaccard(&subject_set(counts1), &subject_set(counts2)),
        cosine: cosine(&normalize(counts1), &normalize(counts2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&'static str]) -> BTreeSet<&'static str> {
        items.iter().copied().collect()
    }

    fn freq(pairs: &[(&str, f64)]) -> FrequencyVector {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_jaccard_empty_sets() {
        assert_eq!(jaccard::<&str>(&set(&[]), &set(&[])), 1.0);
    }

    #[test]
    fn test_jaccard_one_side_empty() {
        assert_eq!(jaccard(&set(&["a"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_jaccard_partial() {
        let score = jaccard(&set(&["a", "b"]), &set(&["b", "c"]));
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_identical() {
        let v = freq(&[("a", 0.5), ("b", 0.5)]);
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint() {
        let v1 = freq(&[("a", 1.0)]);
        let v2 = freq(&[("b", 1.0)]);
        assert_eq!(cosine(&v1, &v2), 0.0);
    }

    #[test]
    fn test_cosine_zero_norm() {
        let v1 = freq(&[("a", 0.0)]);
        let v2 = freq(&[("a", 1.0)]);
        assert_eq!(cosine(&v1, &v2), 0.0);
        assert_eq!(cosine(&FrequencyVector::new(), &FrequencyVector::new()), 0.0);
    }
}

//! Similarity and distance metrics for hypervectors

use super::vector::Hypervector;
use crate::error::Result;

/// Computes Hamming distance between two hypervectors
///
/// Returns the number of bits that differ between the two vectors.
#[inline]
pub fn hamming_distance(v1: &Hypervector, v2: &Hypervector) -> Result<u32> {
    v1.hamming_distance(v2)
}

/// Computes cosine similarity of the bipolar views
///
/// For binary vectors, cosine similarity = 1 - 2*hamming_distance/dimension,
/// a value in [-1.0, 1.0].
#[inline]
pub fn cosine_similarity(v1: &Hypervector, v2: &Hypervector) -> Result<f32> {
    v1.similarity(v2)
}

/// Computes normalized Hamming similarity [0.0, 1.0]
///
/// This is equivalent to `1.0 - (hamming_distance / dimension)`
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::hdc::{Hypervector, normalized_hamming};
///
/// let a = Hypervector::from_seed(512, 1);
/// let sim = normalized_hamming(&a, &a).unwrap();
/// assert!((sim - 1.0).abs() < 0.001);
/// ```
pub fn normalized_hamming(v1: &Hypervector, v2: &Hypervector) -> Result<f32> {
    let hamming = v1.hamming_distance(v2)?;
    if v1.dimension() == 0 {
        return Ok(1.0);
    }
    Ok(1.0 - (hamming as f32 / v1.dimension() as f32))
}

/// Computes Jaccard similarity coefficient
///
/// Jaccard = |intersection| / |union|. Suited to the sparse item-memory
/// vectors and OR-bundled text vectors, where shared zeros carry no signal.
pub fn jaccard_similarity(v1: &Hypervector, v2: &Hypervector) -> Result<f32> {
    v1.check_dimension(v2)?;

    let mut intersection = 0u32;
    let mut union = 0u32;
    for (a, b) in v1.words().iter().zip(v2.words()) {
        intersection += (a & b).count_ones();
        union += (a | b).count_ones();
    }

    if union == 0 {
        Ok(1.0) // Both vectors are zero
    } else {
        Ok(intersection as f32 / union as f32)
    }
}

/// Finds the k most similar vectors from a set
///
/// Returns indices and cosine similarities of top-k matches, sorted by
/// similarity (descending).
pub fn top_k_similar(
    query: &Hypervector,
    candidates: &[Hypervector],
    k: usize,
) -> Result<Vec<(usize, f32)>> {
    let mut similarities = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| Ok((idx, query.similarity(candidate)?)))
        .collect::<Result<Vec<_>>>()?;

    // NaN-safe
    similarities.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Less));
    similarities.truncate(k);

    Ok(similarities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hamming_known_vectors() {
        let a = Hypervector::from_bits([true, true, false, false]);
        let b = Hypervector::from_bits([true, false, true, false]);

        assert_eq!(hamming_distance(&a, &b).unwrap(), 2);
        assert_relative_eq!(normalized_hamming(&a, &b).unwrap(), 0.5);
        assert_relative_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard() {
        let a = Hypervector::from_bits([true, true, false, false]);
        let b = Hypervector::from_bits([true, false, true, false]);

        assert_relative_eq!(jaccard_similarity(&a, &b).unwrap(), 1.0 / 3.0);
        assert_relative_eq!(
            jaccard_similarity(&Hypervector::zero(4), &Hypervector::zero(4)).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_top_k_sorted_and_truncated() {
        let query = Hypervector::from_seed(2_000, 1);
        let mut candidates: Vec<_> = (2..10).map(|s| Hypervector::from_seed(2_000, s)).collect();
        candidates.push(query.clone());

        let top3 = top_k_similar(&query, &candidates, 3).unwrap();

        assert_eq!(top3.len(), 3);
        assert_eq!(top3[0].0, candidates.len() - 1);
        assert!(top3[0].1 >= top3[1].1);
        assert!(top3[1].1 >= top3[2].1);
    }

    #[test]
    fn test_metrics_reject_dimension_mismatch() {
        let a = Hypervector::zero(8);
        let b = Hypervector::zero(9);

        assert!(normalized_hamming(&a, &b).is_err());
        assert!(jaccard_similarity(&a, &b).is_err());
        assert!(top_k_similar(&a, &[b], 1).is_err());
    }
}

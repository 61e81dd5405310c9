//! Item memory: the fixed codebook of symbol hypervectors
//!
//! Maps every key of a dense alphabet `0..nitem` to a sparse random
//! hypervector. Generated once, read-only afterwards.

use super::vector::Hypervector;
use crate::error::{HdcError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Codebook of one hypervector per symbol key
///
/// # Performance
///
/// - Lookup: O(1)
/// - Nearest-symbol cleanup: O(nitem) similarity comparisons
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::hdc::ItemMemory;
///
/// // 26 symbols, 1,000 bits, ~10% of bits set
/// let memory = ItemMemory::from_seed(26, 1_000, 90, 100, 42).unwrap();
///
/// let a = memory.get(0).unwrap();
/// assert_eq!(a.dimension(), 1_000);
/// assert!(memory.get(26).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Hypervector>", into = "Vec<Hypervector>")]
pub struct ItemMemory {
    dimension: usize,
    items: Vec<Hypervector>,
}

impl TryFrom<Vec<Hypervector>> for ItemMemory {
    type Error = HdcError;

    fn try_from(items: Vec<Hypervector>) -> Result<Self> {
        Self::from_vectors(items)
    }
}

impl From<ItemMemory> for Vec<Hypervector> {
    fn from(memory: ItemMemory) -> Self {
        memory.items
    }
}

impl ItemMemory {
    /// Generates `nitem` sparse random hypervectors of `dimension` bits
    ///
    /// Every bit draws uniformly from `[1, resolution]` and is set when the
    /// draw exceeds `sparsity`: `sparsity` counts zeros out of `resolution`.
    /// `sparsity == resolution` yields all-zero vectors and `sparsity == 0`
    /// all-one vectors.
    pub fn generate<R: Rng + ?Sized>(
        nitem: usize,
        dimension: usize,
        sparsity: u32,
        resolution: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(HdcError::InvalidDimension(
                "hypervector dimension must be at least 1".into(),
            ));
        }
        if nitem == 0 {
            return Err(HdcError::InvalidAlphabet(
                "item memory needs at least one item".into(),
            ));
        }

        let items = (0..nitem)
            .map(|_| Hypervector::sparse_random(dimension, sparsity, resolution, rng))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            nitem,
            dimension, sparsity, resolution, "generated item memory"
        );
        Ok(Self { dimension, items })
    }

    /// Generates the memory from a seeded `StdRng` for reproducibility
    pub fn from_seed(
        nitem: usize,
        dimension: usize,
        sparsity: u32,
        resolution: u32,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(nitem, dimension, sparsity, resolution, &mut rng)
    }

    /// Wraps a fixed codebook; key `i` maps to `items[i]`
    pub fn from_vectors(items: Vec<Hypervector>) -> Result<Self> {
        let first = items.first().ok_or(HdcError::EmptyVectorSet)?;
        let dimension = first.dimension();
        if dimension == 0 {
            return Err(HdcError::InvalidDimension(
                "hypervector dimension must be at least 1".into(),
            ));
        }
        for item in &items[1..] {
            first.check_dimension(item)?;
        }
        Ok(Self { dimension, items })
    }

    /// Looks up the hypervector for `key`
    #[inline]
    pub fn get(&self, key: usize) -> Result<&Hypervector> {
        self.items.get(key).ok_or(HdcError::InvalidKey {
            key,
            nitem: self.items.len(),
        })
    }

    /// Number of items (alphabet size)
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Iterates over `(key, vector)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Hypervector)> {
        self.items.iter().enumerate()
    }

    /// Returns the key whose vector is most similar to `query`
    ///
    /// Cleanup step for decoding: unbinding a composite vector yields a
    /// noisy copy of an item, and this finds which item it was.
    pub fn nearest(&self, query: &Hypervector) -> Result<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (key, item) in self.iter() {
            let sim = query.similarity(item)?;
            if best.map_or(true, |(_, s)| sim > s) {
                best = Some((key, sim));
            }
        }
        best.ok_or(HdcError::EmptyVectorSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let memory = ItemMemory::from_seed(5, 300, 50, 100, 1).unwrap();

        assert_eq!(memory.len(), 5);
        assert!(!memory.is_empty());
        assert_eq!(memory.dimension(), 300);
        assert!(memory.iter().all(|(_, v)| v.dimension() == 300));
    }

    #[test]
    fn test_get_out_of_range() {
        let memory = ItemMemory::from_seed(3, 64, 50, 100, 1).unwrap();

        assert_eq!(
            memory.get(3).unwrap_err(),
            HdcError::InvalidKey { key: 3, nitem: 3 }
        );
    }

    #[test]
    fn test_sparsity_boundaries() {
        let all_zero = ItemMemory::from_seed(4, 200, 100, 100, 7).unwrap();
        assert!(all_zero.iter().all(|(_, v)| v.is_zero()));

        let all_one = ItemMemory::from_seed(4, 200, 0, 100, 7).unwrap();
        assert!(all_one.iter().all(|(_, v)| v.popcount() == 200));
    }

    #[test]
    fn test_density_follows_sparsity() {
        let memory = ItemMemory::from_seed(4, 10_000, 75, 100, 13).unwrap();

        for (_, v) in memory.iter() {
            let ones = v.popcount();
            // P(1) = 0.25, sigma ~43
            assert!(ones > 2_300 && ones < 2_700, "popcount: {}", ones);
        }
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let a = ItemMemory::from_seed(3, 128, 90, 100, 99).unwrap();
        let b = ItemMemory::from_seed(3, 128, 90, 100, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            ItemMemory::from_seed(3, 0, 90, 100, 1),
            Err(HdcError::InvalidDimension(_))
        ));
        assert!(matches!(
            ItemMemory::from_seed(0, 8, 90, 100, 1),
            Err(HdcError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            ItemMemory::from_seed(3, 8, 120, 100, 1),
            Err(HdcError::InvalidSparsity {
                sparsity: 120,
                resolution: 100
            })
        ));
    }

    #[test]
    fn test_from_vectors_checks_dimensions() {
        assert!(ItemMemory::from_vectors(vec![]).is_err());
        assert!(ItemMemory::from_vectors(vec![Hypervector::zero(4), Hypervector::zero(5)]).is_err());

        let memory =
            ItemMemory::from_vectors(vec![Hypervector::zero(4), Hypervector::ones(4)]).unwrap();
        assert_eq!(memory.get(1).unwrap(), &Hypervector::ones(4));
    }

    #[test]
    fn test_nearest_recovers_unbound_item() {
        let memory = ItemMemory::from_seed(10, 4_000, 50, 100, 5).unwrap();
        let role = Hypervector::from_seed(4_000, 77);

        let bound = memory.get(6).unwrap().bind(&role).unwrap();
        let recovered = bound.bind(&role).unwrap();

        let (key, sim) = memory.nearest(&recovered).unwrap();
        assert_eq!(key, 6);
        assert!(sim > 0.99);
    }

    #[test]
    fn test_serde_roundtrip() {
        let memory = ItemMemory::from_seed(3, 70, 90, 100, 2).unwrap();
        let json = serde_json::to_string(&memory).unwrap();
        let back: ItemMemory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, memory);
    }
}

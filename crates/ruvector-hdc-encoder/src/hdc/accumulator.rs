//! Integer accumulator for summing binary hypervectors

use super::vector::{Hypervector, WORD_BITS};
use crate::error::{HdcError, Result};
use serde::{Deserialize, Serialize};

/// Per-dimension sum of binary hypervectors
///
/// Unlike OR-bundling the sum is never clamped, so relative frequencies
/// survive until [`majority_threshold`](super::majority_threshold) turns it
/// back into a binary vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulator {
    sums: Vec<u32>,
}

impl Accumulator {
    /// Creates an all-zero accumulator
    pub fn zero(dimension: usize) -> Self {
        Self {
            sums: vec![0; dimension],
        }
    }

    /// Creates an accumulator holding a single binary vector
    pub fn from_hypervector(hv: &Hypervector) -> Self {
        Self {
            sums: hv.iter().map(u32::from).collect(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.sums.len()
    }

    /// Per-dimension sums
    #[inline]
    pub fn sums(&self) -> &[u32] {
        &self.sums
    }

    /// Adds a binary hypervector into the sum
    pub fn add(&mut self, hv: &Hypervector) -> Result<()> {
        if hv.dimension() != self.dimension() {
            return Err(HdcError::DimensionMismatch {
                expected: self.dimension(),
                got: hv.dimension(),
            });
        }

        for (word_idx, &word) in hv.words().iter().enumerate() {
            let mut remaining = word;
            while remaining != 0 {
                let bit = remaining.trailing_zeros() as usize;
                self.sums[word_idx * WORD_BITS + bit] += 1;
                remaining &= remaining - 1;
            }
        }
        Ok(())
    }

    /// Resets every dimension to zero
    pub fn reset(&mut self) {
        self.sums.fill(0);
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sums.iter().all(|&s| s == 0)
    }

    /// True when every entry is 0 or 1
    pub fn is_binary(&self) -> bool {
        self.sums.iter().all(|&s| s <= 1)
    }
}

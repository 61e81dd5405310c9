//! Hypervector data type and basic operations

use crate::error::{HdcError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bits per storage word
pub(crate) const WORD_BITS: usize = 64;

/// Number of u64 words needed to store `dimension` bits
#[inline]
pub(crate) fn words_for(dimension: usize) -> usize {
    dimension.div_ceil(WORD_BITS)
}

/// A binary hypervector of `dimension` bits packed into u64 words
///
/// Bit `i` lives in word `i / 64` at position `i % 64`. Bits past
/// `dimension` in the last word are always zero.
///
/// # Performance
///
/// - Memory: `ceil(D / 64) * 8` bytes per vector
/// - Bind / bundle: one word operation per 64 dimensions
/// - Similarity: hardware popcount per word
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use ruvector_hdc_encoder::hdc::Hypervector;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let a = Hypervector::random(1024, &mut rng);
/// let b = Hypervector::random(1024, &mut rng);
///
/// let bound = a.bind(&b).unwrap();
/// assert_eq!(bound.bind(&b).unwrap(), a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PackedHypervector", into = "PackedHypervector")]
pub struct Hypervector {
    dimension: usize,
    pub(crate) bits: Vec<u64>,
}

/// Serialized form; validated on the way back in
#[derive(Serialize, Deserialize)]
struct PackedHypervector {
    dimension: usize,
    words: Vec<u64>,
}

impl From<Hypervector> for PackedHypervector {
    fn from(hv: Hypervector) -> Self {
        Self {
            dimension: hv.dimension,
            words: hv.bits,
        }
    }
}

impl TryFrom<PackedHypervector> for Hypervector {
    type Error = HdcError;

    fn try_from(packed: PackedHypervector) -> Result<Self> {
        let expected = words_for(packed.dimension);
        if packed.words.len() != expected {
            return Err(HdcError::SerializationError(format!(
                "expected {} words for dimension {}, got {}",
                expected,
                packed.dimension,
                packed.words.len()
            )));
        }
        let hv = Self {
            dimension: packed.dimension,
            bits: packed.words,
        };
        if !hv.tail_is_clear() {
            return Err(HdcError::SerializationError(
                "bits set beyond the vector dimension".into(),
            ));
        }
        Ok(hv)
    }
}

impl Hypervector {
    /// Creates a hypervector with all bits set to zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruvector_hdc_encoder::hdc::Hypervector;
    ///
    /// let zero = Hypervector::zero(100);
    /// assert_eq!(zero.popcount(), 0);
    /// assert_eq!(zero.dimension(), 100);
    /// ```
    pub fn zero(dimension: usize) -> Self {
        Self {
            dimension,
            bits: vec![0u64; words_for(dimension)],
        }
    }

    /// Creates a hypervector with all bits set to one
    pub fn ones(dimension: usize) -> Self {
        let mut hv = Self {
            dimension,
            bits: vec![u64::MAX; words_for(dimension)],
        };
        hv.clear_tail();
        hv
    }

    /// Creates a random hypervector with ~50% bits set
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let mut hv = Self::zero(dimension);
        for word in hv.bits.iter_mut() {
            *word = rng.gen();
        }
        hv.clear_tail();
        hv
    }

    /// Creates a hypervector from a seed for reproducibility
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruvector_hdc_encoder::hdc::Hypervector;
    ///
    /// let v1 = Hypervector::from_seed(256, 42);
    /// let v2 = Hypervector::from_seed(256, 42);
    /// assert_eq!(v1, v2);
    /// ```
    pub fn from_seed(dimension: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::random(dimension, &mut rng)
    }

    /// Draws a sparse random hypervector
    ///
    /// Each bit draws an integer uniformly from `[1, resolution]` and is set
    /// when the draw exceeds `sparsity`, so `P(bit = 1)` is
    /// `(resolution - sparsity) / resolution`.
    pub fn sparse_random<R: Rng + ?Sized>(
        dimension: usize,
        sparsity: u32,
        resolution: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if resolution == 0 || sparsity > resolution {
            return Err(HdcError::InvalidSparsity {
                sparsity,
                resolution,
            });
        }

        let mut hv = Self::zero(dimension);
        for i in 0..dimension {
            let draw: u32 = rng.gen_range(1..=resolution);
            if draw > sparsity {
                hv.bits[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }
        Ok(hv)
    }

    /// Builds a hypervector from individual bits, first item is bit 0
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruvector_hdc_encoder::hdc::Hypervector;
    ///
    /// let v = Hypervector::from_bits([true, false, true, true]);
    /// assert_eq!(v.dimension(), 4);
    /// assert_eq!(v.popcount(), 3);
    /// ```
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut words = Vec::new();
        let mut dimension = 0;
        for bit in bits {
            if dimension % WORD_BITS == 0 {
                words.push(0u64);
            }
            if bit {
                words[dimension / WORD_BITS] |= 1u64 << (dimension % WORD_BITS);
            }
            dimension += 1;
        }
        Self {
            dimension,
            bits: words,
        }
    }

    /// Decodes a little-endian bit-packed byte array of `ceil(D / 8)` bytes
    pub fn from_bytes(dimension: usize, bytes: &[u8]) -> Result<Self> {
        let expected = dimension.div_ceil(8);
        if bytes.len() != expected {
            return Err(HdcError::SerializationError(format!(
                "expected {} bytes for dimension {}, got {}",
                expected,
                dimension,
                bytes.len()
            )));
        }

        let mut hv = Self::zero(dimension);
        for (chunk_idx, chunk) in bytes.chunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            hv.bits[chunk_idx] = u64::from_le_bytes(buf);
        }

        if !hv.tail_is_clear() {
            return Err(HdcError::SerializationError(
                "bits set beyond the vector dimension".into(),
            ));
        }
        Ok(hv)
    }

    /// Encodes as a little-endian bit-packed byte array of `ceil(D / 8)` bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.bits.iter().flat_map(|w| w.to_le_bytes()).collect();
        bytes.truncate(self.dimension.div_ceil(8));
        bytes
    }

    /// Number of dimensions (bits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns bit `index`; out-of-range indices read as zero
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        index < self.dimension && (self.bits[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Sets bit `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= dimension`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(
            index < self.dimension,
            "bit index {} out of range for dimension {}",
            index,
            self.dimension
        );
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.bits[index / WORD_BITS] |= mask;
        } else {
            self.bits[index / WORD_BITS] &= !mask;
        }
    }

    /// Iterates over the bits, bit 0 first
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.dimension).map(move |i| self.get(i))
    }

    /// Counts the number of set bits (population count)
    #[inline]
    pub fn popcount(&self) -> u32 {
        self.bits.iter().map(|&w| w.count_ones()).sum()
    }

    /// True when no bit is set
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Fails with `DimensionMismatch` unless both vectors have the same width
    #[inline]
    pub fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(HdcError::DimensionMismatch {
                expected: self.dimension,
                got: other.dimension,
            });
        }
        Ok(())
    }

    /// Binds two hypervectors: bit `i` is 1 iff both inputs agree at `i`
    ///
    /// This is XNOR, i.e. the product of the bipolar views (0 -> -1, 1 -> +1)
    /// mapped back to binary. Binding is associative, commutative, and
    /// self-inverse:
    /// - `a.bind(b) == b.bind(a)`
    /// - `a.bind(b).bind(b) == a`
    #[inline]
    pub fn bind(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        let mut result = Self {
            dimension: self.dimension,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| !(a ^ b))
                .collect(),
        };
        result.clear_tail();
        Ok(result)
    }

    /// Superimposes two hypervectors with bitwise OR
    #[inline]
    pub fn bundle_or(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.bundle_or_assign(other)?;
        Ok(result)
    }

    /// In-place variant of [`Hypervector::bundle_or`]
    #[inline]
    pub fn bundle_or_assign(&mut self, other: &Self) -> Result<()> {
        self.check_dimension(other)?;
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= b;
        }
        Ok(())
    }

    /// Rotates the bits right by `shift`: `out[i] = self[(i - shift) mod D]`
    ///
    /// A shift of 0 or any multiple of `D` returns the vector unchanged.
    pub fn permute(&self, shift: usize) -> Self {
        if self.dimension == 0 {
            return self.clone();
        }
        let shift = shift % self.dimension;
        if shift == 0 {
            return self.clone();
        }

        let mut result = Self::zero(self.dimension);
        for (word_idx, &word) in self.bits.iter().enumerate() {
            let mut remaining = word;
            while remaining != 0 {
                let bit = remaining.trailing_zeros() as usize;
                let src = word_idx * WORD_BITS + bit;
                let dst = (src + shift) % self.dimension;
                result.bits[dst / WORD_BITS] |= 1u64 << (dst % WORD_BITS);
                remaining &= remaining - 1;
            }
        }
        result
    }

    /// Computes Hamming distance (number of differing bits)
    #[inline]
    pub fn hamming_distance(&self, other: &Self) -> Result<u32> {
        self.check_dimension(other)?;
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum())
    }

    /// Computes bipolar similarity `1 - 2 * hamming / D`
    ///
    /// Returns a value in [-1.0, 1.0] where:
    /// - 1.0 = identical vectors
    /// - 0.0 = random/orthogonal vectors
    /// - -1.0 = complementary vectors
    #[inline]
    pub fn similarity(&self, other: &Self) -> Result<f32> {
        let hamming = self.hamming_distance(other)?;
        if self.dimension == 0 {
            return Ok(1.0);
        }
        Ok(1.0 - (2.0 * hamming as f32 / self.dimension as f32))
    }

    /// Returns the packed words (for advanced use cases)
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.bits
    }

    fn tail_mask(&self) -> u64 {
        match self.dimension % WORD_BITS {
            0 => u64::MAX,
            rem => (1u64 << rem) - 1,
        }
    }

    pub(crate) fn clear_tail(&mut self) {
        let mask = self.tail_mask();
        if let Some(last) = self.bits.last_mut() {
            *last &= mask;
        }
    }

    fn tail_is_clear(&self) -> bool {
        let mask = self.tail_mask();
        self.bits.last().map_or(true, |&last| last & !mask == 0)
    }
}

impl fmt::Debug for Hypervector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hypervector {{ bits: {} set / {} total }}",
            self.popcount(),
            self.dimension
        )
    }
}

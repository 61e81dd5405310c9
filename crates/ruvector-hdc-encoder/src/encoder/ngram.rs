//! Sliding-window n-gram accumulation over feature streams

use super::HdEncoder;
use crate::error::Result;
use crate::hdc::{bind_multiple, majority_threshold, Accumulator, Hypervector};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Sum of bound n-gram vectors and the number of windows summed
///
/// After clipping `sum` is binary and `count` is 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NgramSum {
    pub sum: Accumulator,
    pub count: usize,
}

impl NgramSum {
    /// True when no full window was seen
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Majority-thresholds the sum into a single binary vector (count 1)
    pub fn clip<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Self> {
        let clipped = majority_threshold(&self.sum, self.count, rng)?;
        Ok(Self {
            sum: Accumulator::from_hypervector(&clipped),
            count: 1,
        })
    }

    /// Binary hypervector for this sum; a clipped sum is returned as is
    pub fn into_hypervector<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Hypervector> {
        majority_threshold(&self.sum, self.count, rng)
    }
}

/// The last `ngram` item vectors, most recent first
struct ShiftRegister {
    slots: Vec<Hypervector>,
}

impl ShiftRegister {
    fn new(ngram: usize, dimension: usize) -> Self {
        Self {
            slots: vec![Hypervector::zero(dimension); ngram],
        }
    }

    /// Rotates every older slot by one position and loads `item` into slot 0
    fn push(&mut self, item: &Hypervector) {
        for i in (1..self.slots.len()).rev() {
            let shifted = self.slots[i - 1].permute(1);
            self.slots[i] = shifted;
        }
        self.slots[0].clone_from(item);
    }

    /// Binds all slots left to right
    fn bound(&self) -> Result<Hypervector> {
        bind_multiple(&self.slots)
    }
}

impl HdEncoder {
    /// Encodes a stream of item-memory keys as a sum of n-grams
    ///
    /// Each position pushes the key's item vector into a fresh shift register;
    /// once `ngram` symbols have been seen the bound window is added to the
    /// sum. With `clip` the sum is majority-thresholded using the encoder's
    /// tie-break RNG. A stream shorter than `ngram` yields a zero sum with
    /// count 0 and is never thresholded.
    ///
    /// Keys outside the item memory fail with `InvalidKey`.
    pub fn encode_feature_stream(&self, features: &[usize], clip: bool) -> Result<NgramSum> {
        let sum = self.accumulate_ngrams(features)?;
        if !clip || sum.is_empty() {
            return Ok(sum);
        }
        let mut rng = self.tie_break_rng.lock();
        sum.clip(&mut *rng)
    }

    /// Same as [`encode_feature_stream`](Self::encode_feature_stream) with an
    /// injected tie-break RNG
    pub fn encode_feature_stream_with_rng<R: Rng + ?Sized>(
        &self,
        features: &[usize],
        clip: bool,
        rng: &mut R,
    ) -> Result<NgramSum> {
        let sum = self.accumulate_ngrams(features)?;
        if !clip || sum.is_empty() {
            return Ok(sum);
        }
        sum.clip(rng)
    }

    /// Maps `text` through the alphabet and encodes it as a feature stream
    ///
    /// Unlike word encoding, an unknown character here is fatal
    /// (`InvalidSymbol`).
    pub fn encode_symbols(&self, text: &str, clip: bool) -> Result<NgramSum> {
        let features = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| self.symbol_key(symbol, position))
            .collect::<Result<Vec<_>>>()?;
        self.encode_feature_stream(&features, clip)
    }

    #[instrument(level = "trace", skip_all, fields(len = features.len()))]
    fn accumulate_ngrams(&self, features: &[usize]) -> Result<NgramSum> {
        let ngram = self.config.ngram;
        let mut register = ShiftRegister::new(ngram, self.config.dimension);
        let mut sum = Accumulator::zero(self.config.dimension);
        let mut count = 0;

        for (position, &key) in features.iter().enumerate() {
            register.push(self.item_memory.get(key)?);
            if position + 1 >= ngram {
                sum.add(&register.bound()?)?;
                count += 1;
            }
        }

        debug!(features = features.len(), ngram, count, "accumulated n-grams");
        if count == 0 && !features.is_empty() {
            warn!(
                features = features.len(),
                ngram, "stream shorter than one n-gram window"
            );
        }
        Ok(NgramSum { sum, count })
    }
}

//! Permutation-weighted word encoding

use super::HdEncoder;
use crate::error::{HdcError, Result};
use crate::hdc::{bind_multiple, Hypervector};
use tracing::{trace, warn};

/// Hypervector of one word plus the characters that could not be mapped
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEncoding {
    pub vector: Hypervector,
    /// One `InvalidSymbol` per skipped character
    pub diagnostics: Vec<HdcError>,
}

impl HdEncoder {
    /// Encodes a word as the bind of its position-rotated character vectors
    ///
    /// Character `i` of an `n`-character word is loaded into slot `n - 1 - i`,
    /// slot `j` is rotated by `j`, and the slots are bound left to right. The
    /// per-slot rotation makes the result order sensitive.
    ///
    /// A character outside the alphabet is reported in `diagnostics` and its
    /// slot holds the all-ones vector, the identity of XNOR binding, so the
    /// character drops out while the other slots keep their rotations. The
    /// empty word, or one with no valid character, encodes to the zero vector.
    pub fn encode_word(&self, word: &str) -> Result<WordEncoding> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let dimension = self.config.dimension;

        if n == 0 {
            return Ok(WordEncoding {
                vector: Hypervector::zero(dimension),
                diagnostics: Vec::new(),
            });
        }

        let mut slots = vec![Hypervector::ones(dimension); n];
        let mut diagnostics = Vec::new();

        for (i, &symbol) in chars.iter().enumerate() {
            match self.symbol_key(symbol, i) {
                Ok(key) => slots[n - 1 - i].clone_from(self.item_memory.get(key)?),
                Err(err) => {
                    warn!(%err, word, "skipping symbol");
                    diagnostics.push(err);
                }
            }
        }

        if diagnostics.len() == n {
            return Ok(WordEncoding {
                vector: Hypervector::zero(dimension),
                diagnostics,
            });
        }

        // the all-ones slot is rotation invariant
        for (shift, slot) in slots.iter_mut().enumerate().skip(1) {
            *slot = slot.permute(shift);
        }

        let vector = bind_multiple(&slots)?;
        trace!(word, popcount = vector.popcount(), "encoded word");
        Ok(WordEncoding {
            vector,
            diagnostics,
        })
    }
}

//! Encoders turning symbol sequences into hypervectors
//!
//! [`HdEncoder`] owns the item memory and the alphabet and offers two
//! independent strategies:
//!
//! - n-gram accumulation over a feature-index stream ([`ngram`])
//! - permutation-weighted word binding, OR-bundled into text vectors
//!   ([`word`], [`text`])
//!
//! Every encode call allocates its own shift register and accumulator, so one
//! encoder can serve concurrent callers. The only shared mutable state is the
//! tie-break RNG used by majority clipping.

pub mod ngram;
pub mod text;
pub mod word;

pub use ngram::NgramSum;
pub use text::TextEncoding;
pub use word::WordEncoding;

use crate::alphabet::Alphabet;
use crate::config::{EncoderConfig, EncodingScheme};
use crate::error::{HdcError, Result};
use crate::hdc::ItemMemory;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

/// Offset separating the tie-break stream from the item-memory stream
const TIE_BREAK_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Hyperdimensional encoder
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::{EncoderConfig, HdEncoder};
///
/// let encoder = HdEncoder::new(EncoderConfig::new(2_048)).unwrap();
///
/// let text = encoder.encode_text("hello world").unwrap();
/// assert_eq!(text.vector.dimension(), 2_048);
/// assert!(text.diagnostics.is_empty());
///
/// let sum = encoder.encode_symbols("hello", false).unwrap();
/// assert_eq!(sum.count, 3);
/// ```
pub struct HdEncoder {
    config: EncoderConfig,
    item_memory: ItemMemory,
    alphabet: Alphabet,
    tie_break_rng: Mutex<StdRng>,
}

impl HdEncoder {
    /// Creates an encoder whose item memory is drawn from `config.seed`
    pub fn new(config: EncoderConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Creates an encoder drawing its item memory from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: EncoderConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let item_memory = ItemMemory::generate(
            config.nitem,
            config.dimension,
            config.sparsity,
            config.resolution,
            rng,
        )?;
        Self::from_parts(config, item_memory, Alphabet::default())
    }

    /// Assembles an encoder from an existing item memory and alphabet
    ///
    /// The memory must hold `config.nitem` vectors of `config.dimension` bits.
    pub fn from_parts(
        config: EncoderConfig,
        item_memory: ItemMemory,
        alphabet: Alphabet,
    ) -> Result<Self> {
        config.validate()?;
        if item_memory.dimension() != config.dimension {
            return Err(HdcError::DimensionMismatch {
                expected: config.dimension,
                got: item_memory.dimension(),
            });
        }
        if item_memory.len() != config.nitem {
            return Err(HdcError::InvalidAlphabet(format!(
                "item memory holds {} items, config expects {}",
                item_memory.len(),
                config.nitem
            )));
        }

        match config.encoding {
            EncodingScheme::SumNgram => {
                debug!(
                    dimension = config.dimension,
                    nitem = config.nitem,
                    ngram = config.ngram,
                    alphabet = alphabet.len(),
                    "created sumNgramm encoder"
                );
            }
        }

        let tie_break_rng = Mutex::new(StdRng::seed_from_u64(
            config.seed.wrapping_add(TIE_BREAK_STREAM),
        ));
        Ok(Self {
            config,
            item_memory,
            alphabet,
            tie_break_rng,
        })
    }

    /// Replaces the symbol table used by the word and symbol encoders
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[inline]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    #[inline]
    pub fn item_memory(&self) -> &ItemMemory {
        &self.item_memory
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Hypervector width D
    #[inline]
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Item-memory key of `symbol`, checked against both tables
    pub(crate) fn symbol_key(&self, symbol: char, position: usize) -> Result<usize> {
        self.alphabet
            .index_of(symbol)
            .filter(|&key| key < self.item_memory.len())
            .ok_or(HdcError::InvalidSymbol { symbol, position })
    }
}

impl fmt::Debug for HdEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdEncoder")
            .field("config", &self.config)
            .field("alphabet", &self.alphabet.len())
            .finish_non_exhaustive()
    }
}

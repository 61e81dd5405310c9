//! # RuVector HDC Encoder
//!
//! Hyperdimensional computing (HDC) encoder for RuVector. Maps symbolic
//! sequences (feature streams, words, text) onto fixed-width binary
//! hypervectors so downstream classifiers and indexes can work on vectors
//! instead of variable-length input.
//!
//! ## HDC Module
//!
//! Runtime-width binary hypervectors and their algebra:
//! - **Bind**: bitwise XNOR (product of the bipolar views), self-inverse
//! - **Permute**: circular right shift, used as a positional role
//! - **Bundle**: bitwise OR, or integer sums closed by majority threshold
//! - **Item memory**: sparse random codebook, one vector per symbol
//!
//! ### Example
//!
//! ```rust
//! use ruvector_hdc_encoder::hdc::{bind, circular_shift, ItemMemory};
//!
//! let memory = ItemMemory::from_seed(26, 1_024, 50, 100, 7).unwrap();
//! let a = memory.get(0).unwrap();
//! let b = memory.get(1).unwrap();
//!
//! // position-tagged pair, recoverable given either side
//! let pair = bind(a, &circular_shift(b, 1)).unwrap();
//! let back = bind(&pair, a).unwrap();
//! assert_eq!(back, circular_shift(b, 1));
//! ```
//!
//! ## Encoders
//!
//! [`HdEncoder`] offers two strategies over a shared item memory:
//!
//! - **N-gram sums**: a sliding window of the last `ngram` symbols is bound
//!   into one vector per position and the windows are summed, optionally
//!   majority-clipped back to binary.
//! - **Word / text**: each word binds its position-rotated character vectors;
//!   a text ORs its word vectors together.
//!
//! ### Example
//!
//! ```rust
//! use ruvector_hdc_encoder::{EncoderConfig, HdEncoder};
//!
//! let config = EncoderConfig::new(4_096).with_ngram(3).with_seed(11);
//! let encoder = HdEncoder::new(config).unwrap();
//!
//! // n-gram path over pre-indexed features
//! let sum = encoder.encode_feature_stream(&[7, 4, 11, 11, 14], true).unwrap();
//! assert_eq!(sum.count, 1);
//!
//! // word/text path with per-character diagnostics
//! let text = encoder.encode_text("hello w0rld").unwrap();
//! assert_eq!(text.words, 2);
//! assert_eq!(text.diagnostics.len(), 1);
//! ```

pub mod alphabet;
pub mod config;
pub mod encoder;
pub mod error;
pub mod hdc;

pub use alphabet::Alphabet;
pub use config::{EncoderConfig, EncodingScheme};
pub use encoder::{HdEncoder, NgramSum, TextEncoding, WordEncoding};
pub use error::{HdcError, Result};
pub use hdc::{Accumulator, Hypervector, ItemMemory};

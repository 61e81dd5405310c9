//! Encoder configuration

use crate::error::{HdcError, Result};
use crate::hdc::DEFAULT_DIMENSION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encoding architecture used for feature streams
///
/// Serialized by name; unknown names fail with
/// [`HdcError::UnsupportedEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EncodingScheme {
    /// Sum of sliding-window n-grams, optionally majority-clipped
    #[default]
    SumNgram,
}

impl EncodingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SumNgram => "sumNgramm",
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingScheme {
    type Err = HdcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sumNgramm" => Ok(Self::SumNgram),
            other => Err(HdcError::UnsupportedEncoding(other.to_string())),
        }
    }
}

impl TryFrom<String> for EncodingScheme {
    type Error = HdcError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<EncodingScheme> for String {
    fn from(scheme: EncodingScheme) -> Self {
        scheme.as_str().to_string()
    }
}

/// Configuration for [`HdEncoder`](crate::HdEncoder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Hypervector width D
    pub dimension: usize,

    /// Encoding architecture
    pub encoding: EncodingScheme,

    /// Number of items in item memory (alphabet size)
    pub nitem: usize,

    /// Sliding window size for n-gram encoding
    pub ngram: usize,

    /// Number of zeros out of `resolution` in item-memory vectors
    pub sparsity: u32,

    /// Granularity of the sparsity draw
    pub resolution: u32,

    /// Seed for item memory and the tie-break stream
    pub seed: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            encoding: EncodingScheme::SumNgram,
            nitem: 26,
            ngram: 3,
            sparsity: 90,
            resolution: 100,
            seed: 42,
        }
    }
}

impl EncoderConfig {
    /// Create new configuration for a specific dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Default::default()
        }
    }

    /// Set the encoding scheme
    pub fn with_encoding(mut self, encoding: EncodingScheme) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the encoding scheme by name, e.g. `"sumNgramm"`
    pub fn with_encoding_name(self, name: &str) -> Result<Self> {
        Ok(self.with_encoding(name.parse()?))
    }

    /// Set the alphabet size
    pub fn with_nitem(mut self, nitem: usize) -> Self {
        self.nitem = nitem;
        self
    }

    /// Set the n-gram window size
    pub fn with_ngram(mut self, ngram: usize) -> Self {
        self.ngram = ngram;
        self
    }

    /// Set item-memory sparsity parameters
    pub fn with_sparsity(mut self, sparsity: u32, resolution: u32) -> Self {
        self.sparsity = sparsity;
        self.resolution = resolution;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks every parameter before anything is allocated
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(HdcError::InvalidDimension(
                "hypervector dimension must be at least 1".into(),
            ));
        }
        if self.nitem == 0 {
            return Err(HdcError::InvalidAlphabet(
                "item memory needs at least one item".into(),
            ));
        }
        if self.ngram == 0 {
            return Err(HdcError::InvalidNgram(self.ngram));
        }
        if self.resolution == 0 || self.sparsity > self.resolution {
            return Err(HdcError::InvalidSparsity {
                sparsity: self.sparsity,
                resolution: self.resolution,
            });
        }
        Ok(())
    }
}

//! Error types for the HDC encoder crate.
//!
//! Configuration and dimension errors are fatal. `InvalidSymbol` is also
//! returned as a non-fatal diagnostic by the word and text encoders, which
//! skip the offending character and keep going.

/// Primary error type for encoder operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HdcError {
    /// The configured encoding scheme is not recognized.
    #[error("unsupported encoding scheme: {0}")]
    UnsupportedEncoding(String),

    /// An item-memory key outside `0..nitem` was requested.
    #[error("item memory key {key} out of range (nitem = {nitem})")]
    InvalidKey {
        /// Requested key.
        key: usize,
        /// Number of items in the memory.
        nitem: usize,
    },

    /// A character has no index in the alphabet, or its index is outside the
    /// item memory.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol {
        /// Offending character.
        symbol: char,
        /// Character offset inside the word or stream.
        position: usize,
    },

    /// Two hypervectors of different width were combined.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Width of the left-hand or owning vector.
        expected: usize,
        /// Width of the vector that was passed in.
        got: usize,
    },

    /// A hypervector width of zero was requested.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Item-memory sparsity exceeds its resolution, or the resolution is zero.
    #[error("invalid sparsity {sparsity} for resolution {resolution}")]
    InvalidSparsity {
        /// Zeros drawn out of every `resolution`.
        sparsity: u32,
        /// Granularity of the sparsity draw.
        resolution: u32,
    },

    /// The n-gram window size is zero.
    #[error("invalid n-gram size: {0} (must be at least 1)")]
    InvalidNgram(usize),

    /// The alphabet or item memory is empty, repeats a symbol, or disagrees
    /// with the configured `nitem`.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A fold over vectors was given no vectors.
    #[error("empty vector set provided")]
    EmptyVectorSet,

    /// Majority thresholding was requested for a sum of zero vectors.
    #[error("cannot threshold an accumulator holding zero vectors")]
    EmptyAccumulator,

    /// Persisted data could not be decoded into a valid vector or memory.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HdcError>;

//! Hyperdimensional Computing (HDC) primitives
//!
//! Binary hypervectors of runtime width with the algebra the encoders are
//! built from: XNOR binding, rotation as permutation, OR bundling and
//! majority thresholding of integer sums.

mod accumulator;
mod memory;
mod ops;
mod similarity;
mod vector;

pub use accumulator::Accumulator;
pub use memory::ItemMemory;
pub use ops::{
    bind, bind_multiple, bundle_or, bundle_or_all, circular_shift, majority_threshold,
    majority_threshold_with,
};
pub use similarity::{
    cosine_similarity, hamming_distance, jaccard_similarity, normalized_hamming, top_k_similar,
};
pub use vector::Hypervector;

/// Default hypervector width (10,000 bits)
pub const DEFAULT_DIMENSION: usize = 10_000;

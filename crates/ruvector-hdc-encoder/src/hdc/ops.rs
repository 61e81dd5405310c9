//! HDC operations: binding, permutation, bundling, thresholding

use super::accumulator::Accumulator;
use super::vector::Hypervector;
use crate::error::{HdcError, Result};
use rand::Rng;
use tracing::trace;

/// Binds two hypervectors (bitwise XNOR)
///
/// This is a convenience function equivalent to `a.bind(b)`.
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::hdc::{bind, Hypervector};
///
/// let a = Hypervector::from_seed(64, 1);
/// let b = Hypervector::from_seed(64, 2);
/// let bound = bind(&a, &b).unwrap();
/// assert_eq!(bind(&bound, &b).unwrap(), a);
/// ```
#[inline]
pub fn bind(a: &Hypervector, b: &Hypervector) -> Result<Hypervector> {
    a.bind(b)
}

/// Binds multiple vectors left to right
///
/// Equivalent to `v1.bind(v2)?.bind(v3)?...`
pub fn bind_multiple(vectors: &[Hypervector]) -> Result<Hypervector> {
    let (first, rest) = vectors.split_first().ok_or(HdcError::EmptyVectorSet)?;

    let mut result = first.clone();
    for v in rest {
        result = result.bind(v)?;
    }
    Ok(result)
}

/// Rotates a hypervector right by `shift` positions
///
/// `out[i] = v[(i - shift) mod D]`. Distinct shifts of a random vector are
/// nearly orthogonal to each other, which is what makes rotation usable as a
/// positional role.
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::hdc::{circular_shift, Hypervector};
///
/// let v = Hypervector::from_bits([true, false, false, false]);
/// assert_eq!(circular_shift(&v, 1), Hypervector::from_bits([false, true, false, false]));
/// ```
#[inline]
pub fn circular_shift(v: &Hypervector, shift: usize) -> Hypervector {
    v.permute(shift)
}

/// Superimposes two hypervectors with bitwise OR
#[inline]
pub fn bundle_or(a: &Hypervector, b: &Hypervector) -> Result<Hypervector> {
    a.bundle_or(b)
}

/// OR-bundles a set of hypervectors
pub fn bundle_or_all(vectors: &[Hypervector]) -> Result<Hypervector> {
    let (first, rest) = vectors.split_first().ok_or(HdcError::EmptyVectorSet)?;

    let mut result = first.clone();
    for v in rest {
        result.bundle_or_assign(v)?;
    }
    Ok(result)
}

/// Converts a sum of `count` binary vectors back to a binary vector
///
/// `result[i] = 1` iff `sum[i] > count / 2`. When `count` is even a uniformly
/// random binary vector drawn from `rng` is added to the sum first and the
/// count is incremented, see [`majority_threshold_with`].
pub fn majority_threshold<R: Rng + ?Sized>(
    sum: &Accumulator,
    count: usize,
    rng: &mut R,
) -> Result<Hypervector> {
    if count == 0 {
        return Err(HdcError::EmptyAccumulator);
    }
    if count % 2 == 0 {
        let tie_break = Hypervector::random(sum.dimension(), rng);
        threshold(sum, count, Some(&tie_break))
    } else {
        threshold(sum, count, None)
    }
}

/// Majority threshold with an explicit tie-break vector
///
/// For an even `count` the result is computed as
/// `sum[i] + tie_break[i] > (count + 1) / 2`. Only dimensions with
/// `sum[i] == count / 2` can change outcome: for those the result equals
/// `tie_break[i]`, every other dimension is decided by the sum alone. With a
/// uniform `tie_break` this is a fair coin per tied bit. For odd `count` the
/// tie-break vector is ignored.
pub fn majority_threshold_with(
    sum: &Accumulator,
    count: usize,
    tie_break: &Hypervector,
) -> Result<Hypervector> {
    if count == 0 {
        return Err(HdcError::EmptyAccumulator);
    }
    if tie_break.dimension() != sum.dimension() {
        return Err(HdcError::DimensionMismatch {
            expected: sum.dimension(),
            got: tie_break.dimension(),
        });
    }
    if count % 2 == 0 {
        threshold(sum, count, Some(tie_break))
    } else {
        threshold(sum, count, None)
    }
}

fn threshold(
    sum: &Accumulator,
    count: usize,
    tie_break: Option<&Hypervector>,
) -> Result<Hypervector> {
    let mut result = Hypervector::zero(sum.dimension());
    // compare 2 * value > count in integers to avoid the fractional half
    let (limit, ties) = match tie_break {
        Some(tb) => (count as u64 + 1, Some(tb)),
        None => (count as u64, None),
    };

    for (i, &s) in sum.sums().iter().enumerate() {
        let extra = ties.map_or(0, |tb| u64::from(tb.get(i)));
        if 2 * (u64::from(s) + extra) > limit {
            result.set(i, true);
        }
    }

    trace!(
        count,
        tie_break = tie_break.is_some(),
        popcount = result.popcount(),
        "majority threshold"
    );
    Ok(result)
}

//! Bucket hashing: a deterministic, unseeded polynomial hash reduced modulo
//! the table capacity at every step.
//!
//! The hash offers no protection against adversarially chosen colliding
//! terms. Collisions are resolved by the chain scan in `term_index`.

use core::num::NonZeroUsize;

const MULTIPLIER: u128 = 31;

/// Map `term` to a bucket in `0..capacity`.
///
/// Accumulates `h = (h * 31 + byte) mod capacity` over the bytes of `term`.
/// Intermediate values are widened to `u128`, so no capacity can overflow.
/// The empty term always lands in bucket 0.
#[inline]
pub fn bucket_index(term: &[u8], capacity: NonZeroUsize) -> usize {
    let cap = capacity.get() as u128;
    let h = term
        .iter()
        .fold(0u128, |h, &b| (h * MULTIPLIER + b as u128) % cap);
    h as usize
}

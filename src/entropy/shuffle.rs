//! Fisher–Yates shuffle.

use rand::CryptoRng;

use super::below;

/// Shuffle `items` in place so that every ordering is equally likely.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot at or before it.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: CryptoRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = below(rng, i + 1);
        items.swap(i, j);
    }
}

//! Cryptographically secure randomness.
//!
//! Sampling and shuffling are generic over [`CryptoRng`] so a statistical PRNG
//! can never be passed in by accident. Production code uses [`system`].

mod bounded;
mod shuffle;

#[cfg(test)]
pub(crate) mod scripted;

pub use bounded::below;
pub use shuffle::shuffle;

use rand::CryptoRng;
use rand::rngs::ThreadRng;

/// The system source: a thread-local ChaCha12 generator seeded and
/// periodically reseeded from the operating system.
#[inline]
pub fn system() -> ThreadRng {
    rand::rng()
}

/// Human-readable name of the system source.
pub fn source_name() -> &'static str {
    "ChaCha12 (OS-seeded, thread-local)"
}

/// Pick one element uniformly from a non-empty slice.
#[inline]
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: CryptoRng + ?Sized,
{
    &items[below(rng, items.len())]
}

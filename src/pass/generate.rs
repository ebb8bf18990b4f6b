//! Password generation.

use rand::CryptoRng;
use rand::rngs::ThreadRng;

use super::charset::{self, Alphabet, Pools};
use super::{ConfigurationError, MAX_LENGTH, Options, Password};
use crate::entropy;

/// Generate one password with the system CSPRNG and the default alphabet.
pub fn generate(options: &Options) -> Result<Password, ConfigurationError> {
    generate_with(&mut entropy::system(), options, &Alphabet::default())
}

/// Generate one password from an explicit source and alphabet.
pub fn generate_with<R>(
    rng: &mut R,
    options: &Options,
    alphabet: &Alphabet,
) -> Result<Password, ConfigurationError>
where
    R: CryptoRng + ?Sized,
{
    let pools = prepare(options, alphabet)?;
    fill(rng, options.length, &pools).map(Password::from_chars)
}

/// Generate `count` independent passwords and collect them.
///
/// Prefer [`batch`] when the passwords are written out one at a time.
pub fn generate_batch(options: &Options, count: usize) -> Result<Vec<Password>, ConfigurationError> {
    Ok(batch(options, count)?.collect())
}

/// A lazy run of `count` passwords with the system CSPRNG.
///
/// The configuration is validated once before anything is drawn, so an invalid
/// one yields an error and no passwords.
pub fn batch(options: &Options, count: usize) -> Result<Batch<ThreadRng>, ConfigurationError> {
    batch_with(entropy::system(), options, &Alphabet::default(), count)
}

/// [`batch`] with an explicit source and alphabet.
pub fn batch_with<R>(
    rng: R,
    options: &Options,
    alphabet: &Alphabet,
    count: usize,
) -> Result<Batch<R>, ConfigurationError>
where
    R: CryptoRng,
{
    let pools = prepare(options, alphabet)?;
    Ok(Batch {
        rng,
        pools,
        length: options.length,
        remaining: count,
    })
}

/// Iterator over a validated batch. Each password is drawn on demand.
pub struct Batch<R> {
    rng: R,
    pools: Pools,
    length: usize,
    remaining: usize,
}

impl<R: CryptoRng> Iterator for Batch<R> {
    type Item = Password;

    fn next(&mut self) -> Option<Password> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Password::from_chars(draw(&mut self.rng, self.length, &self.pools)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: CryptoRng> ExactSizeIterator for Batch<R> {}

/// Draw `length` characters covering every pool, then shuffle them.
///
/// One character comes from each pool in order, the rest from the combined
/// pool. The shuffle makes mandatory and filler positions indistinguishable.
pub fn fill<R>(rng: &mut R, length: usize, pools: &Pools) -> Result<Vec<char>, ConfigurationError>
where
    R: CryptoRng + ?Sized,
{
    check_length(length, pools)?;
    Ok(draw(rng, length, pools))
}

// Caller has run `check_length`.
fn draw<R>(rng: &mut R, length: usize, pools: &Pools) -> Vec<char>
where
    R: CryptoRng + ?Sized,
{
    let mut chars = Vec::with_capacity(length);
    for pool in pools.pools() {
        chars.push(*entropy::choose(rng, pool.chars()));
    }
    let combined = pools.combined();
    for _ in pools.len()..length {
        chars.push(*entropy::choose(rng, combined));
    }

    entropy::shuffle(rng, &mut chars);
    chars
}

fn check_length(length: usize, pools: &Pools) -> Result<(), ConfigurationError> {
    if length > MAX_LENGTH {
        return Err(ConfigurationError::LengthTooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    if length < pools.len() {
        return Err(ConfigurationError::LengthTooShort {
            length,
            required: pools.len(),
        });
    }
    Ok(())
}

fn prepare(options: &Options, alphabet: &Alphabet) -> Result<Pools, ConfigurationError> {
    if options.length == 0 {
        return Err(ConfigurationError::NonPositiveLength);
    }
    if options.length > MAX_LENGTH {
        return Err(ConfigurationError::LengthTooLong {
            length: options.length,
            max: MAX_LENGTH,
        });
    }
    let pools = charset::build(options, alphabet)?;
    check_length(options.length, &pools)?;
    Ok(pools)
}

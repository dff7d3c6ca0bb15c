//! Entropy stretching for key generation.

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use wirekem_api::{Error, Result};

/// Security parameter for the generation seed, in bytes.
const SEED_LEN: usize = 32;

/// Consume the entropy source once and return a deterministic pseudorandom
/// stream bound to 256 bits of security for the KEM primitive to draw from.
pub(crate) fn seeded_rng<R: CryptoRng + RngCore>(entropy: &mut R) -> Result<ChaCha20Rng> {
    let mut seed = [0u8; SEED_LEN];
    entropy.try_fill_bytes(&mut seed).map_err(Error::Entropy)?;
    Ok(ChaCha20Rng::from_seed(seed))
}

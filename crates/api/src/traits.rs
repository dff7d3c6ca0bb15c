//! Capability traits for KEM keypair handling
//!
//! `KemEngine` is the narrow boundary between the key-management layer and an
//! external KEM primitive library. Exactly five behaviors are assumed of a
//! primitive: generate a keypair from a random stream, parse a public key,
//! parse a private keypair, marshal to bytes, and report an algorithm name.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// A trait for public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to its canonical byte encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for secret types that can be securely serialized.
pub trait SerializeSecret: Sized {
    /// Creates an object from a byte slice. Input should be zeroized after use.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector that is zeroized on drop.
    ///
    /// Infallible for any successfully constructed value: a keypair that
    /// cannot re-serialize is an internal-corruption state this trait makes
    /// unrepresentable.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}

/// Capability boundary to a KEM primitive library.
///
/// Implementations identify exactly one concrete KEM algorithm; the choice is
/// carried in the implementing type, so key objects of different algorithms
/// are different Rust types and cannot be confused at compile time.
pub trait KemEngine {
    /// Parsed public key with a canonical byte encoding.
    type PublicKey: Clone + Serialize;

    /// Keypair holding the secret material together with its embedded public
    /// component. Zeroizable, so the owner can scrub it deterministically.
    type Keypair: Clone + Zeroize + SerializeSecret;

    /// Length in bytes of the canonical public key encoding.
    const PUBLIC_KEY_LEN: usize;

    /// Length in bytes of the canonical private keypair encoding.
    const PRIVATE_KEY_LEN: usize;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair using the provided random stream.
    ///
    /// Callers are expected to hand in a stream already stretched from a
    /// 256-bit seed; the engine consumes it directly.
    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::Keypair>;

    /// Parse and validate a public key from its byte encoding.
    fn parse_public_key(b: &[u8]) -> Result<Self::PublicKey>;

    /// Parse and validate a private keypair from its byte encoding,
    /// reconstructing the embedded public component.
    fn parse_keypair(b: &[u8]) -> Result<Self::Keypair>;

    /// Extract the public key embedded in a keypair.
    ///
    /// Deterministic: repeated calls on the same keypair yield the same key.
    fn public_key(keypair: &Self::Keypair) -> Self::PublicKey;
}

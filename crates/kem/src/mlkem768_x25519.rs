//! Hybrid engine pairing ML-KEM-768 with X25519.
//!
//! Encodings are plain concatenations, post-quantum part first:
//! private `dk(2400) || x25519_sk(32)`, public `ek(1184) || x25519_pk(32)`.
//! The public components are embedded in the private encoding: the ML-KEM
//! encapsulation key sits inside the decapsulation key per FIPS 203, and the
//! X25519 public key is a deterministic function of its secret scalar.

use core::fmt;

use ml_kem::{EncodedSizeUser, KemCore, MlKem768 as MlKem768Core};
use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use wirekem_api::{Error, KemEngine, Result, Serialize, SerializeSecret};

use crate::mlkem768::{
    canonical_dk, canonical_ek, MLKEM768_PRIVATE_KEY_LEN, MLKEM768_PUBLIC_KEY_LEN,
};

const X25519_KEY_LEN: usize = 32;

const HYBRID_PUBLIC_KEY_LEN: usize = MLKEM768_PUBLIC_KEY_LEN + X25519_KEY_LEN;
const HYBRID_PRIVATE_KEY_LEN: usize = MLKEM768_PRIVATE_KEY_LEN + X25519_KEY_LEN;

/// Validated hybrid public key in canonical encoding.
#[derive(Clone, Debug)]
pub struct HybridPublicKey {
    raw: Vec<u8>,
}

impl Serialize for HybridPublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HYBRID_PUBLIC_KEY_LEN {
            return Err(Error::InvalidLength {
                context: "MLKEM768-X25519 public key",
                expected: HYBRID_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let (pq, classical) = bytes.split_at(MLKEM768_PUBLIC_KEY_LEN);
        let mut raw = canonical_ek(pq)?;
        // Any 32-byte string is a valid X25519 point encoding.
        raw.extend_from_slice(classical);
        Ok(Self { raw })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }
}

/// Hybrid keypair: ML-KEM-768 decapsulation key plus X25519 secret scalar,
/// with the derived public encoding alongside. Scrubbed on zeroize/drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HybridKeypair {
    secret: Vec<u8>,
    public: Vec<u8>,
}

impl SerializeSecret for HybridKeypair {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HYBRID_PRIVATE_KEY_LEN {
            return Err(Error::InvalidLength {
                context: "MLKEM768-X25519 private key",
                expected: HYBRID_PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let (pq, classical) = bytes.split_at(MLKEM768_PRIVATE_KEY_LEN);
        let (dk, ek) = canonical_dk(pq)?;

        let mut scalar = [0u8; X25519_KEY_LEN];
        scalar.copy_from_slice(classical);
        let x_secret = StaticSecret::from(scalar);
        scalar.zeroize();
        let x_public = X25519PublicKey::from(&x_secret);

        let mut secret = dk;
        secret.extend_from_slice(&x_secret.to_bytes());
        let mut public = ek;
        public.extend_from_slice(x_public.as_bytes());
        Ok(Self { secret, public })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.secret.clone())
    }
}

impl fmt::Debug for HybridKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HybridKeypair([REDACTED])")
    }
}

/// Engine adapter for the default MLKEM768-X25519 hybrid construction.
pub struct MlKem768X25519;

impl KemEngine for MlKem768X25519 {
    type PublicKey = HybridPublicKey;
    type Keypair = HybridKeypair;

    const PUBLIC_KEY_LEN: usize = HYBRID_PUBLIC_KEY_LEN;
    const PRIVATE_KEY_LEN: usize = HYBRID_PRIVATE_KEY_LEN;

    fn name() -> &'static str {
        "MLKEM768-X25519"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::Keypair> {
        let (dk, ek) = MlKem768Core::generate(rng);
        let x_secret = StaticSecret::random_from_rng(&mut *rng);
        let x_public = X25519PublicKey::from(&x_secret);

        let mut secret = dk.as_bytes().to_vec();
        secret.extend_from_slice(&x_secret.to_bytes());
        let mut public = ek.as_bytes().to_vec();
        public.extend_from_slice(x_public.as_bytes());
        Ok(HybridKeypair { secret, public })
    }

    fn parse_public_key(b: &[u8]) -> Result<Self::PublicKey> {
        HybridPublicKey::from_bytes(b)
    }

    fn parse_keypair(b: &[u8]) -> Result<Self::Keypair> {
        HybridKeypair::from_bytes(b)
    }

    fn public_key(keypair: &Self::Keypair) -> Self::PublicKey {
        HybridPublicKey {
            raw: keypair.public.clone(),
        }
    }
}

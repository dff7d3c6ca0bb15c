//! Public half of a KEM keypair.

use core::fmt;
use core::marker::PhantomData;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use once_cell::sync::OnceCell;
use zeroize::Zeroize;

use wirekem_api::{KemEngine, Result, Serialize};

use crate::pemfile::{decode_key, encode_key, key_type_tag, KeyClass};
use crate::scrub::ct_is_zero;

/// Size of the content hash returned by [`PublicKey::sum256`].
pub const PUBLIC_KEY_HASH_SIZE: usize = 32;

type Blake2b256 = Blake2b<U32>;

/// An opaque, validated public KEM key bound to one algorithm.
///
/// The algorithm is the type parameter, so keys of different algorithms are
/// different types; equality and parsing can never cross algorithms. Raw
/// bytes are immutable after construction except through [`reset`], which
/// overwrites them in place.
///
/// [`reset`]: PublicKey::reset
pub struct PublicKey<K: KemEngine> {
    raw: Vec<u8>,
    hash: OnceCell<[u8; PUBLIC_KEY_HASH_SIZE]>,
    _engine: PhantomData<K>,
}

impl<K: KemEngine> PublicKey<K> {
    /// Wrap bytes the engine has already validated and canonicalized.
    pub(crate) fn from_validated(raw: Vec<u8>) -> Self {
        Self {
            raw,
            hash: OnceCell::new(),
            _engine: PhantomData,
        }
    }

    /// Parse a public key from its raw byte encoding.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let parsed = K::parse_public_key(b)?;
        Ok(Self::from_validated(parsed.to_bytes()))
    }

    /// The raw public key bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Canonical type tag string, `"<ALGONAME> PUBLIC KEY"`.
    pub fn key_type(&self) -> String {
        key_type_tag(K::name(), KeyClass::Public)
    }

    /// BLAKE2b-256 checksum of the raw key bytes.
    ///
    /// Computed lazily and cached; idempotent while the key is unmodified.
    pub fn sum256(&self) -> [u8; PUBLIC_KEY_HASH_SIZE] {
        *self.hash.get_or_init(|| {
            let mut hasher = Blake2b256::new();
            hasher.update(&self.raw);
            hasher.finalize().into()
        })
    }

    /// Overwrite the raw key bytes with zeros and drop the cached hash.
    ///
    /// After a reset the key refuses serialization (see
    /// [`Error::ScrubbedKey`](wirekem_api::Error::ScrubbedKey)).
    pub fn reset(&mut self) {
        self.raw.zeroize();
        self.hash = OnceCell::new();
    }

    /// Whether the key has been scrubbed (raw bytes empty or all zero).
    pub fn is_scrubbed(&self) -> bool {
        ct_is_zero(&self.raw)
    }

    /// Serialize to a PEM block with the canonical type tag.
    pub fn to_pem(&self) -> Result<String> {
        encode_key(&self.key_type(), &self.raw)
    }

    /// Parse from a PEM block, enforcing the canonical type tag.
    pub fn from_pem(text: &str) -> Result<Self> {
        let raw = decode_key(text, &key_type_tag(K::name(), KeyClass::Public))?;
        Self::from_bytes(&raw)
    }

    /// Serialize to unwrapped standard base64.
    pub fn to_text(&self) -> Result<String> {
        if self.is_scrubbed() {
            return Err(wirekem_api::Error::ScrubbedKey);
        }
        Ok(BASE64.encode(&self.raw))
    }

    /// Parse from unwrapped standard base64.
    pub fn from_text(text: &str) -> Result<Self> {
        let raw = BASE64.decode(text)?;
        Self::from_bytes(&raw)
    }
}

impl<K: KemEngine> Serialize for PublicKey<K> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }
}

impl<K: KemEngine> Clone for PublicKey<K> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            hash: self.hash.clone(),
            _engine: PhantomData,
        }
    }
}

impl<K: KemEngine> PartialEq for PublicKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: KemEngine> Eq for PublicKey<K> {}

impl<K: KemEngine> fmt::Debug for PublicKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {} bytes)", self.key_type(), self.raw.len())
    }
}

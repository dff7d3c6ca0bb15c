//! Scheme: the per-algorithm key factory.

use core::fmt;
use core::marker::PhantomData;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use wirekem_api::{KemEngine, Result};
use wirekem_kem::MlKem768X25519;

use crate::entropy::seeded_rng;
use crate::pemfile::{key_type_tag, read_key_file, write_key_file, KeyClass};
use crate::private::PrivateKey;
use crate::public::PublicKey;

/// A stateless factory for keys of one fixed KEM algorithm.
///
/// The algorithm is the type parameter; a `Scheme` owns no key material and
/// is immutable after construction. All fallible operations return errors to
/// the caller rather than logging them.
pub struct Scheme<K: KemEngine> {
    _engine: PhantomData<K>,
}

/// The default hybrid scheme.
pub type DefaultScheme = Scheme<MlKem768X25519>;

/// Process-wide default scheme value: an immutable configuration constant,
/// never a mutable global.
pub const DEFAULT_SCHEME: DefaultScheme = Scheme::new();

impl<K: KemEngine> Scheme<K> {
    /// Create a factory for this algorithm.
    pub const fn new() -> Self {
        Self {
            _engine: PhantomData,
        }
    }

    /// The algorithm name this factory is bound to.
    pub fn name(&self) -> &'static str {
        K::name()
    }

    /// Generate a new keypair.
    ///
    /// Consumes the entropy source once for a 256-bit seed, stretches it to a
    /// deterministic pseudorandom stream, and hands that stream to the KEM
    /// primitive. Any entropy or primitive failure propagates; a partially
    /// initialized key is never returned.
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        entropy: &mut R,
    ) -> Result<(PrivateKey<K>, PublicKey<K>)> {
        let mut stream = seeded_rng(entropy)?;
        let keypair = K::generate_keypair(&mut stream)?;
        let private = PrivateKey::from_keypair(keypair);
        let public = private.public_key();
        Ok((private, public))
    }

    /// Parse a public key from raw bytes.
    pub fn public_key_from_bytes(&self, b: &[u8]) -> Result<PublicKey<K>> {
        PublicKey::from_bytes(b)
    }

    /// Parse a private key from raw bytes.
    pub fn private_key_from_bytes(&self, b: &[u8]) -> Result<PrivateKey<K>> {
        PrivateKey::from_bytes(b)
    }

    /// Wire-facing alias for [`public_key_from_bytes`].
    ///
    /// [`public_key_from_bytes`]: Scheme::public_key_from_bytes
    pub fn unmarshal_binary_public_key(&self, b: &[u8]) -> Result<PublicKey<K>> {
        self.public_key_from_bytes(b)
    }

    /// Base64-decode an ASCII public key, then parse the binary form.
    ///
    /// Base64 failures surface as [`Error::Text`](wirekem_api::Error::Text),
    /// distinct from KEM parse failures.
    pub fn unmarshal_text_public_key(&self, b: &[u8]) -> Result<PublicKey<K>> {
        let raw = BASE64.decode(b)?;
        self.public_key_from_bytes(&raw)
    }

    /// Base64-decode an ASCII private key, then parse the binary form.
    pub fn unmarshal_text_private_key(&self, b: &[u8]) -> Result<PrivateKey<K>> {
        let raw = Zeroizing::new(BASE64.decode(b)?);
        self.private_key_from_bytes(&raw)
    }

    /// Load a public key from a PEM file, enforcing the canonical type tag.
    pub fn public_key_from_pem_file(&self, path: impl AsRef<Path>) -> Result<PublicKey<K>> {
        let raw = read_key_file(path.as_ref(), &key_type_tag(K::name(), KeyClass::Public))?;
        self.public_key_from_bytes(&raw)
    }

    /// Load a private key from a PEM file, enforcing the canonical type tag.
    pub fn private_key_from_pem_file(&self, path: impl AsRef<Path>) -> Result<PrivateKey<K>> {
        let raw = Zeroizing::new(read_key_file(
            path.as_ref(),
            &key_type_tag(K::name(), KeyClass::Private),
        )?);
        self.private_key_from_bytes(&raw)
    }

    /// Write a public key to a PEM file with owner-only permissions.
    ///
    /// Fails with [`Error::ScrubbedKey`](wirekem_api::Error::ScrubbedKey) if
    /// the key has been reset.
    pub fn public_key_to_pem_file(&self, path: impl AsRef<Path>, key: &PublicKey<K>) -> Result<()> {
        write_key_file(
            path.as_ref(),
            &key_type_tag(K::name(), KeyClass::Public),
            key.bytes(),
        )
    }

    /// Write a private key to a PEM file with owner-only permissions.
    pub fn private_key_to_pem_file(
        &self,
        path: impl AsRef<Path>,
        key: &PrivateKey<K>,
    ) -> Result<()> {
        write_key_file(
            path.as_ref(),
            &key_type_tag(K::name(), KeyClass::Private),
            &key.bytes(),
        )
    }
}

impl<K: KemEngine> Clone for Scheme<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: KemEngine> Copy for Scheme<K> {}

impl<K: KemEngine> Default for Scheme<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KemEngine> fmt::Debug for Scheme<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scheme({})", K::name())
    }
}

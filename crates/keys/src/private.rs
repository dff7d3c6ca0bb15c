//! Private half of a KEM keypair.

use core::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use wirekem_api::{Error, KemEngine, Result, Serialize, SerializeSecret};

use crate::pemfile::{decode_key, encode_key, key_type_tag, KeyClass};
use crate::public::PublicKey;

/// An opaque KEM keypair bound to one algorithm.
///
/// Holds the raw keypair together with the public key derived once from its
/// embedded public component, so [`public_key`] is repeatable and stable.
/// Secret material is scrubbed on [`reset`] and again on drop.
///
/// [`public_key`]: PrivateKey::public_key
/// [`reset`]: PrivateKey::reset
pub struct PrivateKey<K: KemEngine> {
    keypair: K::Keypair,
    public: PublicKey<K>,
}

impl<K: KemEngine> PrivateKey<K> {
    /// Wrap an engine keypair, deriving its public key eagerly.
    pub(crate) fn from_keypair(keypair: K::Keypair) -> Self {
        let public = PublicKey::from_validated(K::public_key(&keypair).to_bytes());
        // Derivation populates the content hash too, matching generation.
        public.sum256();
        Self { keypair, public }
    }

    /// Parse a private keypair from its raw byte encoding.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        Ok(Self::from_keypair(K::parse_keypair(b)?))
    }

    /// Serialize the keypair to raw bytes, zeroized on drop.
    ///
    /// Succeeds for any successfully constructed key; the engine's marshal
    /// routine is infallible by contract, so there is no error path that
    /// could hand back a partially serialized secret.
    pub fn bytes(&self) -> Zeroizing<Vec<u8>> {
        self.keypair.to_bytes_zeroizing()
    }

    /// The public key corresponding to this private key.
    pub fn public_key(&self) -> PublicKey<K> {
        self.public.clone()
    }

    /// Canonical type tag string, `"<ALGONAME> PRIVATE KEY"`.
    pub fn key_type(&self) -> String {
        key_type_tag(K::name(), KeyClass::Private)
    }

    /// Overwrite all key material with zeros.
    ///
    /// Scrubs both the keypair and the embedded public key; afterwards any
    /// serialization attempt fails with
    /// [`Error::ScrubbedKey`](wirekem_api::Error::ScrubbedKey).
    pub fn reset(&mut self) {
        self.keypair.zeroize();
        self.public.reset();
    }

    /// Whether the keypair has been scrubbed.
    pub fn is_scrubbed(&self) -> bool {
        crate::scrub::ct_is_zero(&self.bytes())
    }

    /// Serialize to a PEM block with the canonical type tag.
    pub fn to_pem(&self) -> Result<String> {
        encode_key(&self.key_type(), &self.bytes())
    }

    /// Parse from a PEM block, enforcing the canonical type tag.
    pub fn from_pem(text: &str) -> Result<Self> {
        let raw = Zeroizing::new(decode_key(text, &key_type_tag(K::name(), KeyClass::Private))?);
        Self::from_bytes(&raw)
    }

    /// Serialize to unwrapped standard base64.
    pub fn to_text(&self) -> Result<String> {
        if self.is_scrubbed() {
            return Err(Error::ScrubbedKey);
        }
        Ok(BASE64.encode(self.bytes().as_slice()))
    }

    /// Parse from unwrapped standard base64.
    pub fn from_text(text: &str) -> Result<Self> {
        let raw = Zeroizing::new(BASE64.decode(text)?);
        Self::from_bytes(&raw)
    }
}

impl<K: KemEngine> Clone for PrivateKey<K> {
    fn clone(&self) -> Self {
        Self {
            keypair: self.keypair.clone(),
            public: self.public.clone(),
        }
    }
}

impl<K: KemEngine> Zeroize for PrivateKey<K> {
    fn zeroize(&mut self) {
        self.reset();
    }
}

impl<K: KemEngine> Drop for PrivateKey<K> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<K: KemEngine> fmt::Debug for PrivateKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, [REDACTED])", self.key_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use wirekem_kem::{MlKem768, MlKem768X25519};

    use crate::scheme::Scheme;

    fn generate() -> (PrivateKey<MlKem768X25519>, PublicKey<MlKem768X25519>) {
        let scheme: Scheme<MlKem768X25519> = Scheme::new();
        scheme.generate_keypair(&mut OsRng).unwrap()
    }

    #[test]
    fn byte_roundtrip_preserves_derived_public_key() {
        let (private, public) = generate();
        let restored = PrivateKey::<MlKem768X25519>::from_bytes(&private.bytes()).unwrap();
        assert_eq!(restored.public_key(), public);
        assert_eq!(restored.public_key().sum256(), public.sum256());
    }

    #[test]
    fn public_key_is_stable_across_calls() {
        let (private, _) = generate();
        assert_eq!(private.public_key(), private.public_key());
        assert_eq!(private.public_key().sum256(), private.public_key().sum256());
    }

    #[test]
    fn reset_scrubs_keypair_and_public() {
        let (mut private, _) = generate();
        private.reset();
        assert!(private.is_scrubbed());
        assert!(private.public_key().is_scrubbed());
        assert!(matches!(private.to_pem(), Err(Error::ScrubbedKey)));
        assert!(matches!(private.to_text(), Err(Error::ScrubbedKey)));
    }

    #[test]
    fn pem_roundtrip_is_byte_identical() {
        let (private, _) = generate();
        let text = private.to_pem().unwrap();
        let restored = PrivateKey::<MlKem768X25519>::from_pem(&text).unwrap();
        assert_eq!(private.bytes().as_slice(), restored.bytes().as_slice());
    }

    #[test]
    fn public_pem_is_rejected_by_private_loader() {
        let (_, public) = generate();
        let text = public.to_pem().unwrap();
        let err = PrivateKey::<MlKem768X25519>::from_pem(&text).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn key_type_is_uppercase_tag() {
        let (private, _) = generate();
        assert_eq!(private.key_type(), "MLKEM768-X25519 PRIVATE KEY");
    }

    #[test]
    fn cross_algorithm_bytes_fail_deterministically() {
        let scheme: Scheme<MlKem768> = Scheme::new();
        let (private, _) = scheme.generate_keypair(&mut OsRng).unwrap();
        let err = PrivateKey::<MlKem768X25519>::from_bytes(&private.bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { .. }));
    }
}

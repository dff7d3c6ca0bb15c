//! Pure post-quantum engine backed by ML-KEM-768 (FIPS 203).

use core::fmt;

use ml_kem::kem::{DecapsulationKey, EncapsulationKey};
use ml_kem::{Encoded, EncodedSizeUser, KemCore, MlKem768 as MlKem768Core, MlKem768Params};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use wirekem_api::{Error, KemEngine, Result, Serialize, SerializeSecret};

/// Canonical encapsulation key length for ML-KEM-768.
pub(crate) const MLKEM768_PUBLIC_KEY_LEN: usize = 1184;

/// Canonical decapsulation key length for ML-KEM-768.
pub(crate) const MLKEM768_PRIVATE_KEY_LEN: usize = 2400;

// FIPS 203 decapsulation key layout: dk_PKE(1152) || ek(1184) || H(ek)(32) || z(32).
const EMBEDDED_EK_OFFSET: usize = 1152;

type Dk = DecapsulationKey<MlKem768Params>;
type Ek = EncapsulationKey<MlKem768Params>;

/// Run `b` through the primitive's encapsulation-key codec and return the
/// canonical re-encoding. Rejects wrong lengths; byte strings of the correct
/// length are accepted even when semantically meaningless.
pub(crate) fn canonical_ek(b: &[u8]) -> Result<Vec<u8>> {
    let encoded = Encoded::<Ek>::try_from(b).map_err(|_| Error::InvalidLength {
        context: "ML-KEM-768 public key",
        expected: MLKEM768_PUBLIC_KEY_LEN,
        actual: b.len(),
    })?;
    let ek = Ek::from_bytes(&encoded);
    Ok(ek.as_bytes().to_vec())
}

/// Canonical re-encoding of a decapsulation key, plus the encapsulation key
/// embedded in it at the FIPS 203 offset.
pub(crate) fn canonical_dk(b: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let encoded = Encoded::<Dk>::try_from(b).map_err(|_| Error::InvalidLength {
        context: "ML-KEM-768 private key",
        expected: MLKEM768_PRIVATE_KEY_LEN,
        actual: b.len(),
    })?;
    let dk = Dk::from_bytes(&encoded);
    let canonical = dk.as_bytes().to_vec();
    let ek =
        canonical_ek(&canonical[EMBEDDED_EK_OFFSET..EMBEDDED_EK_OFFSET + MLKEM768_PUBLIC_KEY_LEN])?;
    Ok((canonical, ek))
}

/// Validated ML-KEM-768 public key in canonical encoding.
#[derive(Clone, Debug)]
pub struct MlKemPublicKey {
    raw: Vec<u8>,
}

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            raw: canonical_ek(bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.raw.clone()
    }
}

/// ML-KEM-768 keypair: the decapsulation key together with the derived
/// encapsulation key. Both buffers are scrubbed on zeroize/drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKemKeypair {
    secret: Vec<u8>,
    public: Vec<u8>,
}

impl SerializeSecret for MlKemKeypair {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (secret, public) = canonical_dk(bytes)?;
        Ok(Self { secret, public })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.secret.clone())
    }
}

impl fmt::Debug for MlKemKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemKeypair([REDACTED])")
    }
}

/// Engine adapter for ML-KEM-768.
pub struct MlKem768;

impl KemEngine for MlKem768 {
    type PublicKey = MlKemPublicKey;
    type Keypair = MlKemKeypair;

    const PUBLIC_KEY_LEN: usize = MLKEM768_PUBLIC_KEY_LEN;
    const PRIVATE_KEY_LEN: usize = MLKEM768_PRIVATE_KEY_LEN;

    fn name() -> &'static str {
        "MLKEM768"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::Keypair> {
        let (dk, ek) = MlKem768Core::generate(rng);
        Ok(MlKemKeypair {
            secret: dk.as_bytes().to_vec(),
            public: ek.as_bytes().to_vec(),
        })
    }

    fn parse_public_key(b: &[u8]) -> Result<Self::PublicKey> {
        MlKemPublicKey::from_bytes(b)
    }

    fn parse_keypair(b: &[u8]) -> Result<Self::Keypair> {
        MlKemKeypair::from_bytes(b)
    }

    fn public_key(keypair: &Self::Keypair) -> Self::PublicKey {
        MlKemPublicKey {
            raw: keypair.public.clone(),
        }
    }
}

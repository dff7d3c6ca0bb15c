//! End-to-end tests for KEM key management.

use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wirekem_api::Error;
use wirekem_keys::{PrivateKey, PublicKey, Scheme, DEFAULT_SCHEME};
use wirekem_kem::{MlKem768, MlKem768X25519};

#[test]
fn generate_export_reload_public_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pub.pem");

    let (_, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    DEFAULT_SCHEME
        .public_key_to_pem_file(&path, &public_key)
        .unwrap();

    // Reload in a fresh scheme value, as a separate process would.
    let scheme: Scheme<MlKem768X25519> = Scheme::new();
    let reloaded = scheme.public_key_from_pem_file(&path).unwrap();

    assert_eq!(reloaded, public_key);
    assert_eq!(reloaded.key_type(), "MLKEM768-X25519 PUBLIC KEY");
    assert_eq!(reloaded.bytes(), public_key.bytes());
}

#[test]
fn private_key_bytes_roundtrip_preserves_derived_public() {
    let (private_key, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();

    let restored = DEFAULT_SCHEME
        .private_key_from_bytes(&private_key.bytes())
        .unwrap();

    assert_eq!(restored.public_key(), public_key);
    assert_eq!(restored.public_key().sum256(), public_key.sum256());
}

#[test]
fn private_key_pem_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("priv.pem");

    let (private_key, _) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    DEFAULT_SCHEME
        .private_key_to_pem_file(&path, &private_key)
        .unwrap();
    let reloaded = DEFAULT_SCHEME.private_key_from_pem_file(&path).unwrap();

    assert_eq!(reloaded.bytes().as_slice(), private_key.bytes().as_slice());
    assert_eq!(reloaded.key_type(), "MLKEM768-X25519 PRIVATE KEY");
}

#[test]
fn public_pem_file_rejected_by_private_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pub.pem");

    let (_, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    DEFAULT_SCHEME
        .public_key_to_pem_file(&path, &public_key)
        .unwrap();

    let err = DEFAULT_SCHEME.private_key_from_pem_file(&path).unwrap_err();
    match err {
        Error::TypeMismatch { expected, actual } => {
            assert_eq!(expected, "MLKEM768-X25519 PRIVATE KEY");
            assert_eq!(actual, "MLKEM768-X25519 PUBLIC KEY");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn scrubbed_key_cannot_be_exported() {
    let dir = tempfile::tempdir().unwrap();

    let (mut private_key, mut public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    private_key.reset();
    public_key.reset();

    let err = DEFAULT_SCHEME
        .private_key_to_pem_file(dir.path().join("priv.pem"), &private_key)
        .unwrap_err();
    assert!(matches!(err, Error::ScrubbedKey));

    let err = DEFAULT_SCHEME
        .public_key_to_pem_file(dir.path().join("pub.pem"), &public_key)
        .unwrap_err();
    assert!(matches!(err, Error::ScrubbedKey));
}

#[test]
fn cross_algorithm_bytes_fail_deterministically() {
    let pure: Scheme<MlKem768> = Scheme::new();
    let (private_key, public_key) = pure.generate_keypair(&mut OsRng).unwrap();

    assert!(matches!(
        DEFAULT_SCHEME.public_key_from_bytes(public_key.bytes()),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        DEFAULT_SCHEME.private_key_from_bytes(&private_key.bytes()),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn text_marshal_roundtrip_via_scheme() {
    let (private_key, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();

    let public_text = public_key.to_text().unwrap();
    let reloaded = DEFAULT_SCHEME
        .unmarshal_text_public_key(public_text.as_bytes())
        .unwrap();
    assert_eq!(reloaded, public_key);

    let private_text = private_key.to_text().unwrap();
    let reloaded = DEFAULT_SCHEME
        .unmarshal_text_private_key(private_text.as_bytes())
        .unwrap();
    assert_eq!(reloaded.bytes().as_slice(), private_key.bytes().as_slice());
}

#[test]
fn deterministic_generation_across_schemes() {
    let mut entropy_a = ChaCha20Rng::from_seed([42u8; 32]);
    let mut entropy_b = ChaCha20Rng::from_seed([42u8; 32]);

    let (_, pub_a) = DEFAULT_SCHEME.generate_keypair(&mut entropy_a).unwrap();
    let (_, pub_b) = DEFAULT_SCHEME.generate_keypair(&mut entropy_b).unwrap();
    assert_eq!(pub_a.sum256(), pub_b.sum256());
}

#[test]
fn sum256_matches_between_generated_and_reloaded_keys() {
    let (_, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    let reloaded: PublicKey<MlKem768X25519> =
        PublicKey::from_bytes(public_key.bytes()).unwrap();
    assert_eq!(public_key.sum256(), reloaded.sum256());

    // 256-bit hash, hex-printable for fingerprints.
    assert_eq!(hex::encode(public_key.sum256()).len(), 64);
}

#[test]
fn corrupted_pem_body_is_a_decode_or_parse_error() {
    let (_, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng).unwrap();
    let text = public_key.to_pem().unwrap();

    // Truncating the body invalidates either the PEM framing or the key
    // length, depending on where the cut lands; both are recoverable errors.
    let truncated: String = text.lines().take(4).collect::<Vec<_>>().join("\n");
    let err = PublicKey::<MlKem768X25519>::from_pem(&truncated).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode { .. } | Error::InvalidLength { .. }
    ));

    let err = PrivateKey::<MlKem768X25519>::from_pem("").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

//! PEM codec for key objects.
//!
//! A key serializes to a single PEM block whose type tag asserts both the
//! KEM algorithm name and the key class, e.g. `MLKEM768-X25519 PUBLIC KEY`.
//! Tags are compared uppercased on decode; a mismatch is a terminal parse
//! error carrying both tags. Key files are written owner-read/write only.

use std::fs;
use std::io::Write;
use std::path::Path;

use wirekem_api::{Error, Result};

use crate::scrub::ct_is_zero;

/// Which half of a keypair a PEM block claims to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Public,
    Private,
}

impl KeyClass {
    fn label(self) -> &'static str {
        match self {
            KeyClass::Public => "PUBLIC KEY",
            KeyClass::Private => "PRIVATE KEY",
        }
    }
}

/// Canonical PEM type tag for an algorithm/class pair.
pub(crate) fn key_type_tag(algorithm: &str, class: KeyClass) -> String {
    format!("{} {}", algorithm.to_uppercase(), class.label())
}

/// Encode raw key bytes into a PEM block, refusing scrubbed keys.
pub(crate) fn encode_key(tag: &str, raw: &[u8]) -> Result<String> {
    if ct_is_zero(raw) {
        return Err(Error::ScrubbedKey);
    }
    Ok(pem::encode(&pem::Pem::new(tag, raw)))
}

/// Decode one PEM block and enforce its type tag, returning the payload.
pub(crate) fn decode_key(text: &str, expected_tag: &str) -> Result<Vec<u8>> {
    let block = pem::parse(text).map_err(|e| Error::Decode {
        reason: e.to_string(),
    })?;
    if block.tag().to_uppercase() != expected_tag {
        return Err(Error::TypeMismatch {
            expected: expected_tag.to_string(),
            actual: block.tag().to_string(),
        });
    }
    Ok(block.into_contents())
}

/// Read a key file and decode it against the expected tag.
pub(crate) fn read_key_file(path: &Path, expected_tag: &str) -> Result<Vec<u8>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    decode_key(&text, expected_tag)
}

/// Encode a key and write it with owner-only permissions.
pub(crate) fn write_key_file(path: &Path, tag: &str, raw: &[u8]) -> Result<()> {
    let text = encode_key(tag, raw)?;
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::io(path, e))
}

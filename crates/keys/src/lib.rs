//! Key management for KEM keypairs.
//!
//! This crate is the core surface of the wirekem workspace: a uniform
//! abstraction over public/private KEM keypairs supporting generation from a
//! seeded entropy stream, binary and text (PEM) serialization, equality,
//! content hashing, and deterministic in-memory scrubbing. The concrete KEM
//! algorithm is a type parameter, so keys of different algorithms can never
//! be confused at runtime.
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use wirekem_keys::DEFAULT_SCHEME;
//!
//! let (private_key, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng)?;
//! DEFAULT_SCHEME.public_key_to_pem_file("pub.pem", &public_key)?;
//! assert_eq!(public_key.key_type(), "MLKEM768-X25519 PUBLIC KEY");
//! # Ok::<(), wirekem_api::Error>(())
//! ```

mod entropy;
mod pemfile;
mod private;
mod public;
mod scheme;
mod scrub;

pub use pemfile::KeyClass;
pub use private::PrivateKey;
pub use public::{PublicKey, PUBLIC_KEY_HASH_SIZE};
pub use scheme::{DefaultScheme, Scheme, DEFAULT_SCHEME};

// The error type keys operations return.
pub use wirekem_api::{Error, Result};

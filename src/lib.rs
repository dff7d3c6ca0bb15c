//! # wirekem
//!
//! A key-management layer for KEM keypairs: generation from a seeded entropy
//! stream, binary/text/PEM serialization with algorithm-tagged type strings,
//! content hashing, and deterministic in-memory scrubbing.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`wirekem-api`]: capability traits and error types
//! - [`wirekem-kem`]: KEM engine adapters over external primitive crates
//! - [`wirekem-keys`]: the Scheme factory and key objects
//!
//! ## Usage
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use wirekem::prelude::*;
//!
//! let (private_key, public_key) = DEFAULT_SCHEME.generate_keypair(&mut OsRng)?;
//! DEFAULT_SCHEME.public_key_to_pem_file("pub.pem", &public_key)?;
//!
//! let reloaded = DEFAULT_SCHEME.public_key_from_pem_file("pub.pem")?;
//! assert_eq!(reloaded, public_key);
//! # Ok::<(), wirekem::api::Error>(())
//! ```
//!
//! [`wirekem-api`]: wirekem_api
//! [`wirekem-kem`]: wirekem_kem
//! [`wirekem-keys`]: wirekem_keys

pub use wirekem_api as api;
pub use wirekem_kem as kem;
pub use wirekem_keys as keys;

/// Common imports for wirekem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the capability traits
    pub use crate::api::{KemEngine, Serialize, SerializeSecret};

    // Re-export the engines
    pub use crate::kem::{MlKem768, MlKem768X25519};

    // Re-export the key-management surface
    pub use crate::keys::{
        DefaultScheme, KeyClass, PrivateKey, PublicKey, Scheme, DEFAULT_SCHEME,
        PUBLIC_KEY_HASH_SIZE,
    };
}

//! KEM engine adapters for the wirekem key-management layer.
//!
//! Each engine binds the [`wirekem_api::KemEngine`] capability boundary to an
//! external KEM primitive crate. Two engines are provided:
//!
//! - [`MlKem768X25519`]: the default hybrid construction, pairing ML-KEM-768
//!   (FIPS 203) with X25519 so that confidentiality holds as long as either
//!   component does.
//! - [`MlKem768`]: pure post-quantum ML-KEM-768.
//!
//! Engines only generate, parse, and marshal keys; encapsulation and
//! decapsulation arithmetic stays inside the primitive crates.

mod mlkem768;
mod mlkem768_x25519;

// Re-export the engine structs and their key types for direct access.
pub use mlkem768::{MlKem768, MlKemKeypair, MlKemPublicKey};
pub use mlkem768_x25519::{HybridKeypair, HybridPublicKey, MlKem768X25519};

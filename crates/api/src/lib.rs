//! Public API traits and types for the wirekem key-management layer
//!
//! This crate provides the capability boundary between the key-management
//! layer and the underlying KEM primitive libraries: trait definitions for
//! serialization and keypair handling, plus the shared error type used
//! throughout the workspace.

pub mod error;
pub mod traits;

// Re-export the primary error type and result at the crate level
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{KemEngine, Serialize, SerializeSecret};

//! Error handling for key-management operations
//!
//! Every variant except I/O failures is recoverable by the immediate caller;
//! nothing in this workspace logs and swallows an error. Error messages never
//! contain raw key bytes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for key-management operations
#[derive(Debug, Error)]
pub enum Error {
    /// The KEM primitive rejected the raw key bytes
    #[error("malformed key bytes: {context}")]
    Parse { context: &'static str },

    /// Raw key bytes have the wrong length for the configured algorithm
    #[error("invalid length for {context}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// PEM structure absent or malformed
    #[error("failed to decode PEM block: {reason}")]
    Decode { reason: String },

    /// PEM type tag does not match the expected algorithm/key class
    ///
    /// Carries both tags so operators can see exactly what was loaded.
    #[error("wrong PEM key type: expected {expected:?}, got {actual:?}")]
    TypeMismatch { expected: String, actual: String },

    /// Attempted to export a key whose raw bytes are all zero
    #[error("attempted to serialize scrubbed key")]
    ScrubbedKey,

    /// Text (base64) decoding failed before the key bytes were ever parsed
    #[error("invalid base64 key text")]
    Text(#[from] base64::DecodeError),

    /// Entropy source failure during key generation
    #[error("entropy source failed: {0}")]
    Entropy(rand::Error),

    /// File I/O failure, carrying the offending path
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Attach a file path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for key-management operations
pub type Result<T> = core::result::Result<T, Error>;

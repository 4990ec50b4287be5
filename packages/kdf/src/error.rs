//! Error handling for key derivation

use thiserror::Error;

/// Key derivation errors
#[derive(Debug, Error)]
pub enum KdfError {
    /// Argument rejected by validation (zero iterations, empty output, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Algorithm name not recognized
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Requested key material size outside the supported range
    #[error("Invalid key size: requested {requested} bytes, maximum is {max}")]
    InvalidKeySize {
        /// Requested size in bytes
        requested: usize,
        /// Largest supported size in bytes
        max: usize,
    },

    /// Underlying primitive failed
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KdfError {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller's input was refused before any derivation ran
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidKeySize { .. })
    }
}

impl From<serde_json::Error> for KdfError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result type for key derivation operations
pub type Result<T> = std::result::Result<T, KdfError>;

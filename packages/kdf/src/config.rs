//! Key Derivation Function Configuration
//!
//! This module provides configuration presets for key derivation and
//! loads them from JSON.

use crate::algorithm::KdfAlgorithm;
use crate::derive::utils::generate_salt;
use crate::parameters::KeyDerivationParameters;
use crate::{KdfError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest amount of key material a single call may request
pub const MAX_OUTPUT_SIZE: usize = 1024;

/// Smallest salt accepted for iterated algorithms
pub const MIN_SALT_SIZE: usize = 8;

/// Key derivation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KdfConfig {
    /// Algorithm to use for key derivation
    pub algorithm: KdfAlgorithm,
    /// Number of iterations (ignored by SP 800-108)
    pub iterations: u32,
    /// Salt size in bytes
    pub salt_size: usize,
    /// Output key size in bytes
    pub output_size: usize,
}

impl KdfConfig {
    /// High-security configuration for password-based keys
    #[must_use]
    pub fn high_security() -> Self {
        Self {
            algorithm: KdfAlgorithm::Pbkdf2Sha512,
            iterations: 210_000, // OWASP recommendation 2023
            salt_size: 32,
            output_size: 64,
        }
    }

    /// Standard configuration, balanced for interactive use
    #[must_use]
    pub fn standard() -> Self {
        Self {
            algorithm: KdfAlgorithm::Pbkdf2Sha256,
            iterations: 600_000, // OWASP recommendation 2023
            salt_size: 16,
            output_size: 32,
        }
    }

    /// Fast configuration. Not for production secrets.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            algorithm: KdfAlgorithm::Pbkdf2Sha256,
            iterations: 1_000,
            salt_size: 16,
            output_size: 32,
        }
    }

    /// Parse a configuration from JSON; missing fields take `standard()` values
    ///
    /// # Errors
    ///
    /// Returns `Config` if the JSON is malformed, has an unknown field, or names
    /// an unknown algorithm.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded KDF config: {}", config.algorithm);
        Ok(config)
    }

    /// Load a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Config` if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Check the configuration against the engine's limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` on zero iterations, an output size outside
    /// `1..=MAX_OUTPUT_SIZE`, or a salt shorter than `MIN_SALT_SIZE` for an
    /// iterated algorithm.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(KdfError::invalid_argument("iterations must be non-zero"));
        }
        if self.output_size == 0 || self.output_size > MAX_OUTPUT_SIZE {
            return Err(KdfError::invalid_argument(format!(
                "output size must be between 1 and {MAX_OUTPUT_SIZE} bytes, got {}",
                self.output_size
            )));
        }
        if self.algorithm.is_iterated() && self.salt_size < MIN_SALT_SIZE {
            return Err(KdfError::invalid_argument(format!(
                "salt must be at least {MIN_SALT_SIZE} bytes, got {}",
                self.salt_size
            )));
        }
        Ok(())
    }

    /// Parameters for this configuration with a caller-supplied salt
    ///
    /// # Errors
    ///
    /// Returns the `validate` error if the configuration is unusable, or
    /// `InvalidArgument` if an iterated algorithm is given a salt shorter than
    /// `MIN_SALT_SIZE`.
    pub fn to_parameters(&self, salt: impl Into<Vec<u8>>) -> Result<KeyDerivationParameters> {
        self.validate()?;
        let salt = salt.into();
        if self.algorithm.is_iterated() && salt.len() < MIN_SALT_SIZE {
            return Err(KdfError::invalid_argument(format!(
                "salt must be at least {MIN_SALT_SIZE} bytes, got {}",
                salt.len()
            )));
        }
        Ok(KeyDerivationParameters::new(self.iterations, salt))
    }

    /// Parameters for this configuration with a fresh random salt
    ///
    /// # Errors
    ///
    /// Returns the `validate` error if the configuration is unusable.
    pub fn random_parameters(&self) -> Result<KeyDerivationParameters> {
        self.validate()?;
        Ok(KeyDerivationParameters::new(
            self.iterations,
            generate_salt(self.salt_size),
        ))
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self::standard()
    }
}

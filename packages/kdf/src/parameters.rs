//! Key derivation parameters
//!
//! A `KeyDerivationParameters` value carries the two inputs every derivation
//! call needs besides the secret: how many rounds to run, and an opaque
//! algorithm-specific buffer. For PBKDF2 the buffer is the salt; for
//! SP 800-108 it is `label || 0x00 || context`.

use crate::traits::KdfParameterSource;
use crate::{KdfError, Result};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Separator between label and context in SP 800-108 fixed input data
const SP800_108_SEPARATOR: u8 = 0x00;

/// Parameters used when deriving a key
#[derive(Clone)]
pub struct KeyDerivationParameters {
    iteration_count: u32,
    kdf_generic_binary: Zeroizing<Vec<u8>>,
}

impl KeyDerivationParameters {
    /// Create parameters from an iteration count and a generic buffer.
    ///
    /// Both values are stored as given. A zero iteration count is accepted
    /// here and rejected by [`validate`](Self::validate) and by the engine.
    pub fn new(iteration_count: u32, kdf_generic_binary: impl Into<Vec<u8>>) -> Self {
        Self {
            iteration_count,
            kdf_generic_binary: Zeroizing::new(kdf_generic_binary.into()),
        }
    }

    /// Build parameters for PBKDF2 with the given salt
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `iteration_count` is zero.
    pub fn build_for_pbkdf2(salt: impl Into<Vec<u8>>, iteration_count: u32) -> Result<Self> {
        let params = Self::new(iteration_count, salt);
        params.validate()?;
        Ok(params)
    }

    /// Build parameters for SP 800-108 counter mode.
    ///
    /// The buffer becomes `label || 0x00 || context` and the iteration
    /// count is 1; counter-mode derivation runs a single pass.
    #[must_use]
    pub fn build_for_sp800108(label: &[u8], context: &[u8]) -> Self {
        let mut fixed = Vec::with_capacity(label.len() + 1 + context.len());
        fixed.extend_from_slice(label);
        fixed.push(SP800_108_SEPARATOR);
        fixed.extend_from_slice(context);
        Self::new(1, fixed)
    }

    /// Number of iterations used to derive the key
    #[must_use]
    pub const fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    /// Parameters used by the key derivation algorithm
    #[must_use]
    pub fn kdf_generic_binary(&self) -> &[u8] {
        &self.kdf_generic_binary
    }

    /// Replace the algorithm parameters; the previous buffer is zeroized
    pub fn set_kdf_generic_binary(&mut self, bytes: impl Into<Vec<u8>>) {
        self.kdf_generic_binary = Zeroizing::new(bytes.into());
    }

    /// Check that the parameters are usable by an iterated KDF
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the iteration count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iteration_count == 0 {
            return Err(KdfError::invalid_argument(
                "iteration count must be positive",
            ));
        }
        Ok(())
    }
}

impl KdfParameterSource for KeyDerivationParameters {
    fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    fn kdf_generic_binary(&self) -> &[u8] {
        &self.kdf_generic_binary
    }

    fn set_kdf_generic_binary(&mut self, bytes: Vec<u8>) {
        self.kdf_generic_binary = Zeroizing::new(bytes);
    }
}

impl PartialEq for KeyDerivationParameters {
    fn eq(&self, other: &Self) -> bool {
        let same_buffer: bool = self
            .kdf_generic_binary
            .as_slice()
            .ct_eq(other.kdf_generic_binary.as_slice())
            .into();
        self.iteration_count == other.iteration_count && same_buffer
    }
}

impl Eq for KeyDerivationParameters {}

impl fmt::Debug for KeyDerivationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDerivationParameters")
            .field("iteration_count", &self.iteration_count)
            .field("kdf_generic_binary_len", &self.kdf_generic_binary.len())
            .finish()
    }
}

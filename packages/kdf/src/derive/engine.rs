//! Core Key Derivation Implementation
//!
//! `KeyDerivationAlgorithmProvider` opens an algorithm and turns a secret into
//! a `DerivationKey`; `derive_key_material` combines that key with a set of
//! parameters into key material that is zeroized on drop.

use super::sp800108::derive_ctr;
use crate::algorithm::KdfAlgorithm;
use crate::config::MAX_OUTPUT_SIZE;
use crate::derivation_result::DerivationResult;
use crate::traits::KdfParameterSource;
use crate::{KdfError, Result};
use hmac::Hmac;
use pbkdf2::pbkdf2_hmac;
use pcrypt_common::LoggingTransformer;
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Entry point for a key derivation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivationAlgorithmProvider {
    algorithm: KdfAlgorithm,
}

impl KeyDerivationAlgorithmProvider {
    /// Open a provider for the given algorithm
    #[must_use]
    pub const fn open(algorithm: KdfAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Open a provider by portable algorithm name, e.g. `"PBKDF2_SHA256"`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAlgorithm` if the name is not recognized.
    pub fn open_by_name(name: &str) -> Result<Self> {
        Ok(Self::open(name.parse()?))
    }

    /// Algorithm this provider derives with
    #[must_use]
    pub const fn algorithm(&self) -> KdfAlgorithm {
        self.algorithm
    }

    /// Wrap secret material as a derivation key.
    ///
    /// The secret is copied into a buffer that is zeroized on drop.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty SP 800-108 key. PBKDF2 accepts an
    /// empty password.
    pub fn create_key(&self, secret: &[u8]) -> Result<DerivationKey> {
        if secret.is_empty() && !self.algorithm.is_iterated() {
            return Err(KdfError::invalid_argument(
                "SP 800-108 requires a non-empty key",
            ));
        }
        Ok(DerivationKey {
            algorithm: self.algorithm,
            secret: Zeroizing::new(secret.to_vec()),
        })
    }
}

/// Secret material bound to a derivation algorithm
#[derive(Clone)]
pub struct DerivationKey {
    algorithm: KdfAlgorithm,
    secret: Zeroizing<Vec<u8>>,
}

impl DerivationKey {
    /// Algorithm the key was created for
    #[must_use]
    pub const fn algorithm(&self) -> KdfAlgorithm {
        self.algorithm
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// Whether the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl fmt::Debug for DerivationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationKey")
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Derive `desired_size` bytes of key material
///
/// # Errors
///
/// Returns an error if:
/// - `desired_size` is zero (`InvalidArgument`) or above `MAX_OUTPUT_SIZE` (`InvalidKeySize`)
/// - a PBKDF2 derivation is asked to run zero iterations (`InvalidArgument`)
/// - the underlying primitive rejects its input (`KeyDerivation`)
pub fn derive_key_material<P>(
    key: &DerivationKey,
    parameters: &P,
    desired_size: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    P: KdfParameterSource + ?Sized,
{
    let started = Instant::now();
    let result = derive_inner(key, parameters, desired_size);

    match &result {
        Ok(_) => LoggingTransformer::log_performance_metric(
            key.algorithm.name(),
            started.elapsed(),
            true,
        ),
        Err(e) if e.is_invalid_input() => {
            LoggingTransformer::log_rejected_input(key.algorithm.name(), e);
        }
        Err(e) => LoggingTransformer::log_crypto_error(key.algorithm.name(), e),
    }

    result
}

fn derive_inner<P>(
    key: &DerivationKey,
    parameters: &P,
    desired_size: usize,
) -> Result<Zeroizing<Vec<u8>>>
where
    P: KdfParameterSource + ?Sized,
{
    if desired_size == 0 {
        return Err(KdfError::invalid_argument(
            "desired key size must be non-zero",
        ));
    }
    if desired_size > MAX_OUTPUT_SIZE {
        return Err(KdfError::InvalidKeySize {
            requested: desired_size,
            max: MAX_OUTPUT_SIZE,
        });
    }

    let secret = key.secret.as_slice();
    let aux = parameters.kdf_generic_binary();

    LoggingTransformer::log_kdf_operation(
        key.algorithm.name(),
        parameters.iteration_count(),
        aux,
        desired_size,
    );

    let mut output = Zeroizing::new(vec![0u8; desired_size]);

    match key.algorithm {
        KdfAlgorithm::Pbkdf2Sha256 => {
            let rounds = pbkdf2_rounds(parameters)?;
            pbkdf2_hmac::<Sha256>(secret, aux, rounds.get(), &mut output);
        }
        KdfAlgorithm::Pbkdf2Sha384 => {
            let rounds = pbkdf2_rounds(parameters)?;
            pbkdf2_hmac::<Sha384>(secret, aux, rounds.get(), &mut output);
        }
        KdfAlgorithm::Pbkdf2Sha512 => {
            let rounds = pbkdf2_rounds(parameters)?;
            pbkdf2_hmac::<Sha512>(secret, aux, rounds.get(), &mut output);
        }
        KdfAlgorithm::Sp800108CtrHmacSha256 => {
            derive_ctr::<Hmac<Sha256>>(secret, aux, &mut output)?;
        }
        KdfAlgorithm::Sp800108CtrHmacSha384 => {
            derive_ctr::<Hmac<Sha384>>(secret, aux, &mut output)?;
        }
        KdfAlgorithm::Sp800108CtrHmacSha512 => {
            derive_ctr::<Hmac<Sha512>>(secret, aux, &mut output)?;
        }
    }

    Ok(output)
}

fn pbkdf2_rounds<P>(parameters: &P) -> Result<NonZeroU32>
where
    P: KdfParameterSource + ?Sized,
{
    NonZeroU32::new(parameters.iteration_count())
        .ok_or_else(|| KdfError::invalid_argument("PBKDF2 iterations must be non-zero"))
}

/// Derive key material on the blocking pool.
///
/// The returned future resolves once the worker finishes; a worker that goes
/// away without answering resolves to `Internal`. Called outside a Tokio
/// runtime, the future resolves to `Internal` at once.
pub fn derive_key_material_async<P>(
    key: DerivationKey,
    parameters: P,
    desired_size: usize,
) -> DerivationResult
where
    P: KdfParameterSource + Send + 'static,
{
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(e) => {
            return DerivationResult::ready(Err(KdfError::internal(format!(
                "no Tokio runtime for async derivation: {e}"
            ))));
        }
    };

    let (tx, rx) = oneshot::channel();

    handle.spawn_blocking(move || {
        let result = derive_key_material(&key, &parameters, desired_size);
        let _ = tx.send(result);
    });

    DerivationResult::new(rx)
}

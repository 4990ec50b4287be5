//! # pcrypt key derivation
//!
//! Portable key derivation parameters and the engine that consumes them.
//!
//! ## Features
//!
//! - **Parameters**: `KeyDerivationParameters`, an iteration count fixed at
//!   construction plus a replaceable algorithm-specific buffer
//! - **Algorithms**: PBKDF2 and SP 800-108 counter mode over HMAC-SHA2
//! - **Configuration**: presets and JSON loading through `KdfConfig`
//! - **Async**: derivation on the Tokio blocking pool with `on_result` handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use pcrypt_kdf::{KdfAlgorithm, KeyDerivationAlgorithmProvider, KeyDerivationParameters};
//!
//! # fn main() -> pcrypt_kdf::Result<()> {
//! let provider = KeyDerivationAlgorithmProvider::open(KdfAlgorithm::Pbkdf2Sha256);
//! let key = provider.create_key(b"correct horse battery staple")?;
//! let params = KeyDerivationParameters::build_for_pbkdf2(b"NaCl-NaCl".to_vec(), 1_000)?;
//!
//! let material = pcrypt_kdf::derive_key_material(&key, &params, 32)?;
//! assert_eq!(material.len(), 32);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod config;
pub mod derivation_result;
pub mod derive;
pub mod error;
pub mod parameters;
pub mod traits;

pub use algorithm::KdfAlgorithm;
pub use config::{KdfConfig, MAX_OUTPUT_SIZE, MIN_SALT_SIZE};
pub use derivation_result::{DerivationResult, DerivationResultWithHandler};
pub use derive::{
    DerivationKey, KeyDerivationAlgorithmProvider, constant_time_compare, derive_key_material,
    derive_key_material_async, generate_salt,
};
pub use error::{KdfError, Result};
pub use parameters::KeyDerivationParameters;
pub use traits::KdfParameterSource;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        KdfAlgorithm, KdfConfig, KdfError, KdfParameterSource, KeyDerivationAlgorithmProvider,
        KeyDerivationParameters, Result, derive_key_material, derive_key_material_async,
    };
}

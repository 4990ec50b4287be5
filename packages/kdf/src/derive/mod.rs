//! Key Derivation - provider, engine and helpers
//!
//! PBKDF2 and SP 800-108 counter-mode derivation over the
//! [`KdfParameterSource`](crate::KdfParameterSource) contract.

pub mod engine;
pub mod sp800108;
pub mod utils;

pub use engine::{
    DerivationKey, KeyDerivationAlgorithmProvider, derive_key_material,
    derive_key_material_async,
};
pub use utils::{constant_time_compare, generate_salt};

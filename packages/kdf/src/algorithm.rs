//! Key derivation algorithm identifiers

use crate::KdfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported key derivation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KdfAlgorithm {
    /// PBKDF2 with HMAC-SHA256
    #[default]
    #[serde(rename = "PBKDF2_SHA256")]
    Pbkdf2Sha256,
    /// PBKDF2 with HMAC-SHA384
    #[serde(rename = "PBKDF2_SHA384")]
    Pbkdf2Sha384,
    /// PBKDF2 with HMAC-SHA512
    #[serde(rename = "PBKDF2_SHA512")]
    Pbkdf2Sha512,
    /// SP 800-108 counter mode with HMAC-SHA256
    #[serde(rename = "SP800_108_CTR_HMAC_SHA256")]
    Sp800108CtrHmacSha256,
    /// SP 800-108 counter mode with HMAC-SHA384
    #[serde(rename = "SP800_108_CTR_HMAC_SHA384")]
    Sp800108CtrHmacSha384,
    /// SP 800-108 counter mode with HMAC-SHA512
    #[serde(rename = "SP800_108_CTR_HMAC_SHA512")]
    Sp800108CtrHmacSha512,
}

impl KdfAlgorithm {
    /// Every supported algorithm
    pub const ALL: [Self; 6] = [
        Self::Pbkdf2Sha256,
        Self::Pbkdf2Sha384,
        Self::Pbkdf2Sha512,
        Self::Sp800108CtrHmacSha256,
        Self::Sp800108CtrHmacSha384,
        Self::Sp800108CtrHmacSha512,
    ];

    /// Portable algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pbkdf2Sha256 => "PBKDF2_SHA256",
            Self::Pbkdf2Sha384 => "PBKDF2_SHA384",
            Self::Pbkdf2Sha512 => "PBKDF2_SHA512",
            Self::Sp800108CtrHmacSha256 => "SP800_108_CTR_HMAC_SHA256",
            Self::Sp800108CtrHmacSha384 => "SP800_108_CTR_HMAC_SHA384",
            Self::Sp800108CtrHmacSha512 => "SP800_108_CTR_HMAC_SHA512",
        }
    }

    /// Whether the algorithm consumes the iteration count
    #[must_use]
    pub const fn is_iterated(self) -> bool {
        matches!(
            self,
            Self::Pbkdf2Sha256 | Self::Pbkdf2Sha384 | Self::Pbkdf2Sha512
        )
    }
}

impl fmt::Display for KdfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KdfAlgorithm {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KdfError::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for alg in KdfAlgorithm::ALL {
            assert_eq!(alg.name().parse::<KdfAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn parsing_ignores_case() {
        let alg: KdfAlgorithm = "pbkdf2_sha512".parse().unwrap();
        assert_eq!(alg, KdfAlgorithm::Pbkdf2Sha512);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "SCRYPT".parse::<KdfAlgorithm>().unwrap_err();
        assert!(matches!(err, KdfError::UnsupportedAlgorithm(name) if name == "SCRYPT"));
    }

    #[test]
    fn only_pbkdf2_is_iterated() {
        assert!(KdfAlgorithm::Pbkdf2Sha384.is_iterated());
        assert!(!KdfAlgorithm::Sp800108CtrHmacSha256.is_iterated());
    }

    #[test]
    fn serde_uses_portable_names() {
        let json = serde_json::to_string(&KdfAlgorithm::Sp800108CtrHmacSha384).unwrap();
        assert_eq!(json, "\"SP800_108_CTR_HMAC_SHA384\"");
    }
}

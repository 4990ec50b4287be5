//! Key Derivation Utility Functions

use rand::RngCore;

/// Constant-time key comparison for derived keys
#[must_use]
#[inline]
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}

/// Generate `len` random salt bytes from the thread-local CSPRNG
#[must_use]
pub fn generate_salt(len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    rand::rng().fill_bytes(&mut salt);
    salt
}

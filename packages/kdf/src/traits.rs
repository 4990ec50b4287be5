//! Parameter contract consumed by the derivation engine

/// Source of key derivation parameters.
///
/// The iteration count is fixed once the value exists; the generic binary
/// buffer belongs to the implementor and may be replaced at any time.
pub trait KdfParameterSource {
    /// Number of rounds the derivation should run
    fn iteration_count(&self) -> u32;

    /// Algorithm-specific auxiliary bytes (salt, label and context, ...)
    fn kdf_generic_binary(&self) -> &[u8];

    /// Replace the auxiliary bytes, leaving the iteration count untouched
    fn set_kdf_generic_binary(&mut self, bytes: Vec<u8>);
}

//! Property tests for the key derivation parameters contract

use pcrypt_kdf::{KdfParameterSource, KeyDerivationParameters};
use proptest::prelude::*;

proptest! {
    #[test]
    fn iteration_count_is_returned_exactly(n in any::<u32>(), buf in prop::collection::vec(any::<u8>(), 0..64)) {
        let params = KeyDerivationParameters::new(n, buf);
        prop_assert_eq!(params.iteration_count(), n);
    }

    #[test]
    fn buffer_reads_back_what_was_written(
        n in 1u32..1_000_000,
        first in prop::collection::vec(any::<u8>(), 0..128),
        second in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let mut params = KeyDerivationParameters::new(n, first.clone());
        prop_assert_eq!(params.kdf_generic_binary(), first.as_slice());

        params.set_kdf_generic_binary(second.clone());
        prop_assert_eq!(params.kdf_generic_binary(), second.as_slice());
        prop_assert_eq!(params.iteration_count(), n);
    }

    #[test]
    fn trait_view_matches_inherent_view(n in any::<u32>(), buf in prop::collection::vec(any::<u8>(), 0..64)) {
        let params = KeyDerivationParameters::new(n, buf.clone());
        let source: &dyn KdfParameterSource = &params;
        prop_assert_eq!(source.iteration_count(), n);
        prop_assert_eq!(source.kdf_generic_binary(), buf.as_slice());
    }
}

#[test]
fn empty_buffer_round_trips() {
    let mut params = KeyDerivationParameters::new(1000, vec![1u8, 2, 3]);
    params.set_kdf_generic_binary(Vec::new());
    assert!(params.kdf_generic_binary().is_empty());
    assert_eq!(params.iteration_count(), 1000);

    let empty = KeyDerivationParameters::new(1, Vec::new());
    assert_eq!(empty.kdf_generic_binary(), &[] as &[u8]);
}

#[test]
fn clones_are_independent() {
    let original = KeyDerivationParameters::new(3, b"salt".to_vec());
    let mut copy = original.clone();
    copy.set_kdf_generic_binary(b"pepper".to_vec());

    assert_eq!(original.kdf_generic_binary(), b"salt");
    assert_eq!(copy.kdf_generic_binary(), b"pepper");
    assert_ne!(original, copy);
}

#[test]
fn parameters_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KeyDerivationParameters>();
}

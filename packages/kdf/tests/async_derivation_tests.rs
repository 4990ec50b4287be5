//! Asynchronous derivation through the blocking pool

use pcrypt_kdf::{
    DerivationResult, KdfAlgorithm, KdfError, KeyDerivationAlgorithmProvider,
    KeyDerivationParameters, derive_key_material, derive_key_material_async,
};

fn pbkdf2_key() -> pcrypt_kdf::DerivationKey {
    KeyDerivationAlgorithmProvider::open(KdfAlgorithm::Pbkdf2Sha256)
        .create_key(b"password")
        .expect("key creation should succeed")
}

#[tokio::test]
async fn async_matches_sync() {
    let key = pbkdf2_key();
    let params = KeyDerivationParameters::build_for_pbkdf2(b"salt".to_vec(), 64).unwrap();

    let expected = derive_key_material(&key, &params, 32).unwrap();
    let actual = derive_key_material_async(key, params, 32)
        .await
        .expect("async derivation should succeed");

    assert_eq!(actual.as_slice(), expected.as_slice());
}

#[tokio::test]
async fn errors_propagate_through_the_future() {
    let params = KeyDerivationParameters::new(0, b"salt".to_vec());
    let result = derive_key_material_async(pbkdf2_key(), params, 32).await;
    assert!(matches!(result, Err(KdfError::InvalidArgument(_))));
}

#[tokio::test]
async fn on_result_handler_receives_outcome() {
    let params = KeyDerivationParameters::build_for_pbkdf2(b"salt".to_vec(), 1).unwrap();
    let len = derive_key_material_async(pbkdf2_key(), params, 24)
        .on_result(|result| match result {
            Ok(material) => material.len(),
            Err(_) => 0,
        })
        .await;
    assert_eq!(len, 24);

    let bad = KeyDerivationParameters::new(1, b"salt".to_vec());
    let message = derive_key_material_async(pbkdf2_key(), bad, 0)
        .on_result(|result| match result {
            Ok(_) => String::new(),
            Err(e) => e.to_string(),
        })
        .await;
    assert!(message.starts_with("Invalid argument"));
}

#[tokio::test]
async fn ready_result_resolves_immediately() {
    let result = DerivationResult::ready(Err(KdfError::internal("boom"))).await;
    assert!(matches!(result, Err(KdfError::Internal(msg)) if msg == "boom"));
}

#[tokio::test]
async fn concurrent_derivations_are_independent() {
    let salts: Vec<Vec<u8>> = (0u8..4).map(|i| vec![i; 16]).collect();
    let futures = salts.iter().map(|salt| {
        let params = KeyDerivationParameters::build_for_pbkdf2(salt.clone(), 16).unwrap();
        derive_key_material_async(pbkdf2_key(), params, 32)
    });

    let outputs = futures::future::join_all(futures).await;
    for (salt, output) in salts.iter().zip(outputs) {
        let params = KeyDerivationParameters::build_for_pbkdf2(salt.clone(), 16).unwrap();
        let expected = derive_key_material(&pbkdf2_key(), &params, 32).unwrap();
        assert_eq!(output.unwrap().as_slice(), expected.as_slice());
    }
}

//! Built-in self-test suite for the key derivation engine

use crate::runner::TestRunner;
use anyhow::{Context, ensure};
use hex_literal::hex;
use pcrypt_kdf::{
    KdfAlgorithm, KdfConfig, KeyDerivationAlgorithmProvider, KeyDerivationParameters,
    derive_key_material,
};

fn pbkdf2_sha256_case(iterations: u32, expected: [u8; 32]) -> impl Fn() -> anyhow::Result<()> {
    move || {
        let key = KeyDerivationAlgorithmProvider::open(KdfAlgorithm::Pbkdf2Sha256)
            .create_key(b"password")?;
        let params = KeyDerivationParameters::build_for_pbkdf2(b"salt".to_vec(), iterations)?;
        let derived = derive_key_material(&key, &params, expected.len())?;
        ensure!(
            derived.as_slice() == expected,
            "PBKDF2-SHA256 with {iterations} iterations produced the wrong key"
        );
        Ok(())
    }
}

fn sp800108_is_deterministic() -> anyhow::Result<()> {
    let key = KeyDerivationAlgorithmProvider::open(KdfAlgorithm::Sp800108CtrHmacSha256)
        .create_key(b"master key")?;
    let params = KeyDerivationParameters::build_for_sp800108(b"selftest", b"context");

    let first = derive_key_material(&key, &params, 32)?;
    let second = derive_key_material(&key, &params, 32)?;
    ensure!(first.as_slice() == second.as_slice(), "derivation is not deterministic");
    Ok(())
}

fn sp800108_honours_requested_length() -> anyhow::Result<()> {
    let key = KeyDerivationAlgorithmProvider::open(KdfAlgorithm::Sp800108CtrHmacSha384)
        .create_key(b"master key")?;
    let params = KeyDerivationParameters::build_for_sp800108(b"selftest", b"");

    for len in [1usize, 47, 48, 49, 100] {
        let derived = derive_key_material(&key, &params, len)
            .with_context(|| format!("deriving {len} bytes"))?;
        ensure!(derived.len() == len, "asked for {len} bytes, got {}", derived.len());
    }
    Ok(())
}

fn iteration_count_is_stable() -> anyhow::Result<()> {
    for n in [0u32, 1, 1_000, u32::MAX] {
        let mut params = KeyDerivationParameters::new(n, vec![0xA5u8; 16]);
        params.set_kdf_generic_binary(b"replacement".to_vec());
        ensure!(params.iteration_count() == n, "iteration count changed from {n}");
    }
    Ok(())
}

fn buffer_replacement_round_trips() -> anyhow::Result<()> {
    let mut params = KeyDerivationParameters::new(10, b"first".to_vec());
    ensure!(params.kdf_generic_binary() == b"first", "initial buffer not returned");

    params.set_kdf_generic_binary(b"second buffer".to_vec());
    ensure!(params.kdf_generic_binary() == b"second buffer", "replacement not returned");
    ensure!(params.iteration_count() == 10, "setter touched iteration count");
    Ok(())
}

fn empty_buffer_is_accepted() -> anyhow::Result<()> {
    let mut params = KeyDerivationParameters::new(1, b"salt".to_vec());
    params.set_kdf_generic_binary(Vec::new());
    ensure!(params.kdf_generic_binary().is_empty(), "empty buffer did not round-trip");
    Ok(())
}

fn presets_are_valid() -> anyhow::Result<()> {
    KdfConfig::high_security().validate().context("high_security")?;
    KdfConfig::standard().validate().context("standard")?;
    KdfConfig::fast().validate().context("fast")?;
    Ok(())
}

/// Runner loaded with the built-in known-answer and contract checks
#[must_use]
pub fn kdf_suite() -> TestRunner {
    TestRunner::new()
        .with_case(
            "pbkdf2_sha256_1_iteration",
            pbkdf2_sha256_case(
                1,
                hex!("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"),
            ),
        )
        .with_case(
            "pbkdf2_sha256_2_iterations",
            pbkdf2_sha256_case(
                2,
                hex!("ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"),
            ),
        )
        .with_case(
            "pbkdf2_sha256_4096_iterations",
            pbkdf2_sha256_case(
                4096,
                hex!("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"),
            ),
        )
        .with_case("sp800108_is_deterministic", sp800108_is_deterministic)
        .with_case(
            "sp800108_honours_requested_length",
            sp800108_honours_requested_length,
        )
        .with_case("parameters_iteration_count_is_stable", iteration_count_is_stable)
        .with_case(
            "parameters_buffer_replacement_round_trips",
            buffer_replacement_round_trips,
        )
        .with_case("parameters_empty_buffer_is_accepted", empty_buffer_is_accepted)
        .with_case("config_presets_are_valid", presets_are_valid)
}

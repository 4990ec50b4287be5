//! Configuration loading and validation

use pcrypt_kdf::{KdfAlgorithm, KdfConfig, KdfError, MAX_OUTPUT_SIZE, MIN_SALT_SIZE};
use std::io::Write;

#[test]
fn presets_validate() {
    for config in [KdfConfig::high_security(), KdfConfig::standard(), KdfConfig::fast()] {
        config.validate().expect("preset should be valid");
    }
    assert_eq!(KdfConfig::default(), KdfConfig::standard());
}

#[test]
fn json_fills_missing_fields_from_standard() {
    let config = KdfConfig::from_json(r#"{ "algorithm": "PBKDF2_SHA384", "iterations": 5000 }"#)
        .expect("config should parse");
    assert_eq!(config.algorithm, KdfAlgorithm::Pbkdf2Sha384);
    assert_eq!(config.iterations, 5000);
    assert_eq!(config.salt_size, KdfConfig::standard().salt_size);
    assert_eq!(config.output_size, KdfConfig::standard().output_size);
}

#[test]
fn unknown_algorithm_is_a_config_error() {
    let err = KdfConfig::from_json(r#"{ "algorithm": "BCRYPT" }"#).unwrap_err();
    assert!(matches!(err, KdfError::Config(_)));
}

#[test]
fn misspelled_field_is_a_config_error() {
    let err = KdfConfig::from_json(r#"{ "iteration": 5 }"#).unwrap_err();
    assert!(matches!(err, KdfError::Config(msg) if msg.contains("iteration")));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let zero_iterations = KdfConfig {
        iterations: 0,
        ..KdfConfig::fast()
    };
    assert!(matches!(zero_iterations.validate(), Err(KdfError::InvalidArgument(_))));

    let too_long = KdfConfig {
        output_size: MAX_OUTPUT_SIZE + 1,
        ..KdfConfig::fast()
    };
    assert!(too_long.validate().is_err());

    let short_salt = KdfConfig {
        salt_size: 4,
        ..KdfConfig::fast()
    };
    assert!(short_salt.validate().is_err());

    // Counter mode does not use a salt
    let counter_mode = KdfConfig {
        algorithm: KdfAlgorithm::Sp800108CtrHmacSha256,
        salt_size: 0,
        ..KdfConfig::fast()
    };
    counter_mode.validate().expect("SP 800-108 needs no salt");
}

#[test]
fn random_parameters_use_config_sizes() {
    let config = KdfConfig::fast();
    let params = config.random_parameters().unwrap();
    assert_eq!(params.iteration_count(), config.iterations);
    assert_eq!(params.kdf_generic_binary().len(), config.salt_size);
}

#[test]
fn to_parameters_keeps_caller_salt() {
    let params = KdfConfig::fast().to_parameters(b"fixed-salt".to_vec()).unwrap();
    assert_eq!(params.kdf_generic_binary(), b"fixed-salt");
}

#[test]
fn to_parameters_rejects_short_salt_for_pbkdf2() {
    let config = KdfConfig::fast();
    assert!(matches!(
        config.to_parameters(Vec::new()),
        Err(KdfError::InvalidArgument(_))
    ));
    assert!(matches!(
        config.to_parameters(vec![1u8; MIN_SALT_SIZE - 1]),
        Err(KdfError::InvalidArgument(_))
    ));
    assert!(config.to_parameters(vec![1u8; MIN_SALT_SIZE]).is_ok());
}

#[test]
fn to_parameters_accepts_empty_buffer_for_counter_mode() {
    let config = KdfConfig {
        algorithm: KdfAlgorithm::Sp800108CtrHmacSha256,
        salt_size: 0,
        ..KdfConfig::fast()
    };
    let params = config.to_parameters(Vec::new()).unwrap();
    assert!(params.kdf_generic_binary().is_empty());
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "algorithm": "PBKDF2_SHA512", "iterations": 210000, "salt_size": 32, "output_size": 64 }}"#
    )
    .unwrap();

    let config = KdfConfig::from_file(file.path()).unwrap();
    assert_eq!(config, KdfConfig::high_security());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = KdfConfig::from_file("/nonexistent/pcrypt/kdf.json").unwrap_err();
    assert!(matches!(err, KdfError::Io(_)));
}

//! Structured logging bootstrap
//!
//! Provides env_logger-based logging with secure handling of sensitive data
//! and proper integration with the standard log crate.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points used across the workspace
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=pcrypt_kdf=debug,pcrypt_selftest=info` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a key derivation call
    ///
    /// The parameter buffer appears only as a fingerprint; the secret is never
    /// passed in.
    pub fn log_kdf_operation(algorithm: &str, iterations: u32, params: &[u8], output_size: usize) {
        let params_fp = Self::secure_fingerprint(params);
        debug!(
            "KDF: {algorithm} (iterations: {iterations}, params: {params_fp}, output_size: {output_size})"
        );
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs error types without exposing sensitive data
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log a request refused by argument checks
    ///
    /// Caller mistakes go to `warn`; `log_crypto_error` is for primitive failures.
    pub fn log_rejected_input(operation: &str, error: &dyn std::error::Error) {
        warn!("Rejected {operation} request: {error}");
    }

    /// Log the outcome of a single self-test case
    pub fn log_test_case(name: &str, passed: bool) {
        if passed {
            debug!("Self-test passed: {name}");
        } else {
            warn!("Self-test failed: {name}");
        }
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration: Duration, success: bool) {
        let duration_ms = duration.as_millis();
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// SHA-256 fingerprint of sensitive bytes for log output
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn secure_fingerprint(data: &[u8]) -> String {
        let hash = Sha256::digest(data);
        let hex_hash = hex::encode(hash);
        format!("#{}", &hex_hash[..12])
    }
}

//! Command-line self-test for the pcrypt key derivation engine
//!
//! Runs the built-in suite and prints the log to stdout. Exits non-zero when
//! any case fails or the run cannot complete. Set `RUST_LOG` for diagnostics.

use pcrypt_common::LoggingTransformer;
use pcrypt_selftest::{ConsoleSink, ConsoleTrigger, kdf_suite, run_and_display};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    LoggingTransformer::init();

    let trigger = ConsoleTrigger::new();
    let mut sink = ConsoleSink::stdout();
    let mut runner = kdf_suite();

    match run_and_display(&trigger, &mut runner, &mut sink).await {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::warn!("{} of {} self-tests failed", summary.failed, summary.total());
            ExitCode::FAILURE
        }
        Err(_) => ExitCode::FAILURE,
    }
}

//! Harness errors

use thiserror::Error;

/// Errors raised by a test run as a whole.
///
/// A failing or panicking case is not an error; it is recorded in the log.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The runner has no cases to execute
    #[error("No tests registered")]
    NoTests,

    /// A worker was cancelled before reporting back
    #[error("Test worker failed: {0}")]
    Worker(String),
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

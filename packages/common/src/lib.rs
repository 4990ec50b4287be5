//! Common infrastructure shared by the pcrypt crates
//!
//! This crate provides:
//! - Logging bootstrap on top of `env_logger`, with helpers that never write
//!   secret material to the log
//! - The `NotResult` marker used by `on_result` handlers

pub mod logging;
pub mod traits;

pub use logging::LoggingTransformer;
pub use traits::NotResult;

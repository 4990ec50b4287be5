//! # pcrypt self-test harness
//!
//! Runs a list of named checks on the Tokio blocking pool and records a
//! pass/fail log, plus the glue that drives a run from a trigger and shows
//! the outcome on a display sink.

#![forbid(unsafe_code)]

pub mod display;
pub mod error;
pub mod runner;
pub mod suite;

pub use display::{BusyGuard, ConsoleSink, ConsoleTrigger, DisplaySink, Trigger, run_and_display};
pub use error::{HarnessError, Result};
pub use runner::{RunSummary, TestRunner};
pub use suite::kdf_suite;

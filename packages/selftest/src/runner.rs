//! Test runner
//!
//! Cases run one at a time, in registration order, each on the blocking
//! pool so a slow derivation never stalls the async caller. Failures and
//! panics become `FAIL` lines; only a run that cannot proceed is an error.

use crate::{HarnessError, Result};
use pcrypt_common::LoggingTransformer;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

type CaseBody = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

struct TestCase {
    name: String,
    body: CaseBody,
}

/// Counts from a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases that returned `Ok`
    pub passed: usize,
    /// Cases that returned `Err` or panicked
    pub failed: usize,
}

impl RunSummary {
    /// Total number of cases run
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Whether every case passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Registered cases and the log of the last run
#[derive(Default)]
pub struct TestRunner {
    cases: Vec<TestCase>,
    log: String,
}

impl TestRunner {
    /// Create an empty runner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a case
    pub fn add_case<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.cases.push(TestCase {
            name: name.into(),
            body: Arc::new(body),
        });
        self
    }

    /// Register a case, builder style
    #[must_use]
    pub fn with_case<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.add_case(name, body);
        self
    }

    /// Number of registered cases
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Names of the registered cases, in run order
    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.name.as_str())
    }

    /// Log of the last completed run; empty before the first one
    #[must_use]
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Run every registered case
    ///
    /// # Errors
    ///
    /// Returns `NoTests` when nothing is registered and `Worker` when a
    /// case's worker is cancelled before it reports. Neither, nor a run
    /// dropped before it finishes, touches the previous log.
    pub async fn run_tests_async(&mut self) -> Result<RunSummary> {
        if self.cases.is_empty() {
            return Err(HarnessError::NoTests);
        }

        let mut log = String::new();
        let started = Instant::now();
        let mut summary = RunSummary::default();

        for case in &self.cases {
            let body = Arc::clone(&case.body);
            let outcome = tokio::task::spawn_blocking(move || body()).await;

            let line = match outcome {
                Ok(Ok(())) => {
                    summary.passed += 1;
                    format!("PASS {}", case.name)
                }
                Ok(Err(e)) => {
                    summary.failed += 1;
                    format!("FAIL {}: {e:#}", case.name)
                }
                Err(join) if join.is_panic() => {
                    summary.failed += 1;
                    format!(
                        "FAIL {}: panicked: {}",
                        case.name,
                        panic_message(join.into_panic().as_ref())
                    )
                }
                Err(join) => return Err(HarnessError::Worker(join.to_string())),
            };

            LoggingTransformer::log_test_case(&case.name, line.starts_with("PASS"));
            log.push_str(&line);
            log.push('\n');
        }

        log.push_str(&format!(
            "{} passed, {} failed, {} total\n",
            summary.passed,
            summary.failed,
            summary.total()
        ));
        self.log = log;
        LoggingTransformer::log_performance_metric(
            "self-test run",
            started.elapsed(),
            summary.all_passed(),
        );

        Ok(summary)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

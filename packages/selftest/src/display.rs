//! Run-and-display glue
//!
//! A run is started from a trigger (a button, a CLI invocation) and its
//! outcome goes to a display sink. The trigger is disabled for the duration
//! of the run and re-enabled exactly once on every exit path.

use crate::runner::{RunSummary, TestRunner};
use crate::Result;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Control that starts a run
pub trait Trigger {
    /// Enable or disable the control
    fn set_enabled(&self, enabled: bool);
}

/// Surface that shows the outcome of a run
pub trait DisplaySink {
    /// Replace the displayed text
    fn show(&mut self, text: &str);
}

/// Keeps a trigger disabled while alive
pub struct BusyGuard<'a, T: Trigger + ?Sized> {
    trigger: &'a T,
}

impl<'a, T: Trigger + ?Sized> BusyGuard<'a, T> {
    /// Disable `trigger` until the guard is dropped
    #[must_use = "the trigger is re-enabled as soon as the guard is dropped"]
    pub fn acquire(trigger: &'a T) -> Self {
        trigger.set_enabled(false);
        Self { trigger }
    }
}

impl<T: Trigger + ?Sized> Drop for BusyGuard<'_, T> {
    fn drop(&mut self) {
        self.trigger.set_enabled(true);
    }
}

/// Run every case in `runner` and show the outcome on `sink`.
///
/// On success the sink receives the run log; on failure it receives the
/// error's text. The trigger is disabled before the run starts and
/// re-enabled after the sink has been updated, including when the returned
/// future is dropped mid-run.
///
/// # Errors
///
/// Returns the runner's error after it has been shown on the sink.
pub async fn run_and_display<T, S>(
    trigger: &T,
    runner: &mut TestRunner,
    sink: &mut S,
) -> Result<RunSummary>
where
    T: Trigger + ?Sized,
    S: DisplaySink + ?Sized,
{
    let _busy = BusyGuard::acquire(trigger);

    match runner.run_tests_async().await {
        Ok(summary) => {
            sink.show(runner.log());
            Ok(summary)
        }
        Err(e) => {
            log::error!("Self-test run failed: {e}");
            sink.show(&e.to_string());
            Err(e)
        }
    }
}

/// Trigger for console use; records its state and logs transitions
#[derive(Debug)]
pub struct ConsoleTrigger {
    enabled: AtomicBool,
}

impl ConsoleTrigger {
    /// Create an enabled trigger
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    /// Current state
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl Default for ConsoleTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger for ConsoleTrigger {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
        if enabled {
            log::info!("Self-test trigger ready");
        } else {
            log::info!("Self-test run in progress");
        }
    }
}

/// Sink that writes to a `Write` target, stdout by default
pub struct ConsoleSink<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleSink {
    /// Sink writing to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to an arbitrary target
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn show(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| {
                if text.ends_with('\n') {
                    Ok(())
                } else {
                    self.out.write_all(b"\n")
                }
            })
            .and_then(|()| self.out.flush());

        if let Err(e) = written {
            log::warn!("Failed to write self-test output: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_toggles_console_trigger() {
        let trigger = ConsoleTrigger::new();
        {
            let _busy = BusyGuard::acquire(&trigger);
            assert!(!trigger.is_enabled());
        }
        assert!(trigger.is_enabled());
    }

    #[test]
    fn console_sink_terminates_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.show("no newline");
        sink.show("has newline\n");
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "no newline\nhas newline\n"
        );
    }
}

//! Failure policies with enum dispatch.
//!
//! The policy is selected once at configuration time with [`install`], or
//! passed explicitly per call site; the evaluation and formatting path is
//! identical for all variants. Enum dispatch instead of trait objects
//! keeps the set closed and the dispatch static.

use std::process;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::report::{render, Report};

/// Captures rendered reports for later inspection.
///
/// Used by tests and by embedded hosts that surface failures themselves.
#[derive(Debug, Default)]
pub struct BufferSink {
    entries: Mutex<Vec<String>>,
}

impl BufferSink {
    /// An empty sink.
    pub fn new() -> Self {
        BufferSink::default()
    }

    fn record(&self, message: String) {
        self.entries.lock().push(message);
    }

    /// All reports captured so far.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Drop all captured reports.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// A failure policy.
#[derive(Debug)]
pub enum FailureHandler {
    /// Write the report to stderr and abort the process (default).
    Abort,
    /// Panic with the rendered report.
    Panic,
    /// Emit the report through `tracing` and continue.
    Log,
    /// Capture the rendered report (tests, embedded hosts).
    Buffer(BufferSink),
}

impl FailureHandler {
    /// Apply this policy to a failed assertion's report.
    pub fn notify(&self, report: &Report<'_>) {
        match self {
            Self::Abort => {
                eprintln!("{}", render(report));
                process::abort();
            }
            Self::Panic => panic!("{}", render(report)),
            Self::Log => tracing::error!(target: "attest", "{}", render(report)),
            Self::Buffer(sink) => sink.record(render(report)),
        }
    }

    /// Reports captured so far.
    ///
    /// Returns an empty list for policies that don't capture.
    pub fn captured(&self) -> Vec<String> {
        match self {
            Self::Buffer(sink) => sink.entries(),
            Self::Abort | Self::Panic | Self::Log => Vec::new(),
        }
    }

    /// Drop captured reports. No-op for policies that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(sink) = self {
            sink.clear();
        }
    }
}

/// A failure policy shared between call sites.
pub type SharedHandler = Arc<FailureHandler>;

/// The abort policy (process default).
pub fn abort_handler() -> SharedHandler {
    Arc::new(FailureHandler::Abort)
}

/// The panicking policy.
pub fn panic_handler() -> SharedHandler {
    Arc::new(FailureHandler::Panic)
}

/// The log-and-continue policy.
pub fn log_handler() -> SharedHandler {
    Arc::new(FailureHandler::Log)
}

/// A capturing policy with a fresh sink.
pub fn buffer_handler() -> SharedHandler {
    Arc::new(FailureHandler::Buffer(BufferSink::new()))
}

static INSTALLED: Mutex<Option<SharedHandler>> = Mutex::new(None);

/// Install the process-wide failure policy.
///
/// Intended to be called once during configuration; a later call replaces
/// the previous policy.
pub fn install(handler: SharedHandler) {
    tracing::debug!(target: "attest", "failure handler installed");
    *INSTALLED.lock() = Some(handler);
}

/// The currently installed policy, defaulting to [`FailureHandler::Abort`].
pub fn installed() -> SharedHandler {
    INSTALLED.lock().get_or_insert_with(abort_handler).clone()
}

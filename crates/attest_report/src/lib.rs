//! Failure reports and handler policies.
//!
//! Once a failed assertion has a trace, everything left is policy: kill
//! the process, panic, log and continue, or capture the report for the
//! host to inspect. This crate renders the report text and dispatches it
//! to whichever [`FailureHandler`] is configured. The evaluation side
//! never decides severity.

mod handler;
mod report;

pub use handler::{
    abort_handler, buffer_handler, install, installed, log_handler, panic_handler, BufferSink,
    FailureHandler, SharedHandler,
};
pub use report::{render, Report};

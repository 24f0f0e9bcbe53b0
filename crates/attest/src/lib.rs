//! Traced assertions.
//!
//! [`attest!`] checks a boolean condition and, when it fails, reports the
//! concrete runtime value of every operand and sub-expression — with no
//! hand-written trace code at the call site:
//!
//! ```text
//! let a = 1;
//! let b = 20;
//! attest!(a > 0 && b < 0);
//! // => src/main.rs:4: demo: Assertion `a > 0 && b < 0' failed with `(1 > 0) && (20 < 0)'.
//! ```
//!
//! The condition is captured as a tree by [`capture!`], evaluated exactly
//! once, and the formatted trace is handed to the configured failure
//! policy ([`FailureHandler`]): abort (the default), panic,
//! log-and-continue, or capture for inspection. Install a policy once with
//! [`install`], or pass one per call site with [`attest_with!`].
//!
//! # Capture grammar
//!
//! The six comparisons and `&&`/`||`, composed over parenthesized
//! sub-conditions. Any other expression is an opaque leaf operand,
//! evaluated natively (and exactly once) at capture time. Both operands of
//! `&&`/`||` are always evaluated: the trace shows both sides' concrete
//! values, so native short-circuit semantics are deliberately forfeited.

mod macros;

pub use attest_eval::{
    check, evaluate, EvalError, EvalErrorKind, EvalResult, TraceContext, Verdict,
};
pub use attest_report::{
    abort_handler, buffer_handler, install, installed, log_handler, panic_handler, render,
    BufferSink, FailureHandler, Report, SharedHandler,
};
pub use attest_tree::{BinaryOp, Expr, Value};

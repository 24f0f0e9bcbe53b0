//! Tree-walking evaluator for captured conditions.
//!
//! One recursive walk over an [`attest_tree::Expr`] produces both the
//! boolean outcome and a formatted trace of every sub-result. The trace
//! parenthesizes by nesting depth: every node except the single outermost
//! one is wrapped, so `a > 0 && b < 0` with `a = 1, b = 20` traces as
//! `(1 > 0) && (20 < 0)`.
//!
//! Both operands of `&&` and `||` are always evaluated — the trace has to
//! show both sides' concrete values, so native short-circuit semantics are
//! deliberately forfeited.
//!
//! [`check`] is the single entry point call sites consume: evaluate once,
//! keep the trace only on failure.

mod context;
mod errors;
mod exec;

pub use context::TraceContext;
pub use errors::{
    binary_type_mismatch, condition_not_bool, invalid_binary_op_for, EvalError, EvalErrorKind,
    EvalResult,
};
pub use exec::{check, evaluate, Verdict};

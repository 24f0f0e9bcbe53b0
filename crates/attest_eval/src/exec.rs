//! Recursive evaluation of captured condition trees.
//!
//! The walk computes the boolean outcome and drives the [`TraceContext`]
//! in the same pass. Operator application uses direct enum-based dispatch
//! on the value type pair: the type set is fixed, so pattern matching is
//! preferred over trait objects and keeps every dispatch site exhaustive.

use attest_tree::{BinaryOp, Expr, Value};

use crate::context::TraceContext;
use crate::errors::{
    binary_type_mismatch, condition_not_bool, invalid_binary_op_for, EvalError, EvalResult,
};

/// Outcome of checking one condition.
///
/// `details` is `None` exactly when the condition passed; a failed check
/// always carries the non-empty trace text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verdict {
    /// Whether the condition held.
    pub passed: bool,
    /// Trace of the failing condition's sub-results.
    pub details: Option<String>,
}

/// Check a captured condition: evaluate once, keep the trace on failure.
///
/// This is the single entry point call sites consume. A passing check has
/// no observable effect beyond the boolean itself — the trace is discarded
/// without leaving this function.
pub fn check(expr: Expr) -> Result<Verdict, EvalError> {
    let mut ctx = TraceContext::new();
    let value = evaluate(expr, &mut ctx)?;
    match value.as_bool() {
        Some(passed) => Ok(Verdict {
            passed,
            details: if passed { None } else { Some(ctx.finish()) },
        }),
        None => Err(condition_not_bool(value.type_name())),
    }
}

/// Evaluate a captured condition, recording each sub-result into `ctx`.
///
/// A leaf is recorded and returned unchanged. A binary node evaluates its
/// left child, emits the operator symbol, evaluates its right child, then
/// applies the operator to both results — so both operands of `&&`/`||`
/// are always evaluated. An operand error propagates out of the walk
/// unchanged; the partially written trace is abandoned with the context.
pub fn evaluate(expr: Expr, ctx: &mut TraceContext) -> EvalResult {
    match expr {
        Expr::Leaf(value) => {
            ctx.value(&value);
            Ok(value)
        }
        Expr::Binary { op, lhs, rhs } => {
            ctx.enter();
            let left = evaluate(*lhs, ctx)?;
            ctx.symbol(op);
            let right = evaluate(*rhs, ctx)?;
            ctx.exit();
            apply_operator(&left, &right, op)
        }
    }
}

/// Apply a binary operator using direct pattern matching on the type pair.
fn apply_operator(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_str_binary(a, b, op),
        (Value::Char(a), Value::Char(b)) => eval_char_binary(*a, *b, op),
        _ => Err(binary_type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Binary operators on integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op_for("int", op)),
    }
}

/// Binary operators on floats.
///
/// Comparisons go through `partial_cmp` for IEEE 754 compliant semantics
/// (NaN compares unequal to everything, including itself).
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    use std::cmp::Ordering;
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Equal))),
        BinaryOp::NotEq => Ok(Value::Bool(a.partial_cmp(&b) != Some(Ordering::Equal))),
        BinaryOp::Lt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        BinaryOp::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        ))),
        BinaryOp::Gt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        BinaryOp::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        ))),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op_for("float", op)),
    }
}

/// Binary operators on booleans.
///
/// Ordering comparisons are rejected. Both operands reaching here were
/// already fully evaluated, so `&&`/`||` reduce to plain conjunction and
/// disjunction of the two results.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            Err(invalid_binary_op_for("bool", op))
        }
    }
}

/// Binary operators on strings (lexicographic ordering).
fn eval_str_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op_for("string", op)),
    }
}

/// Binary operators on characters.
fn eval_char_binary(a: char, b: char, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op_for("char", op)),
    }
}

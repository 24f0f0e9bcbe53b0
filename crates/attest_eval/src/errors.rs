//! Evaluation errors.
//!
//! A well-typed condition cannot fail to evaluate; errors exist only for
//! the type confusion a dynamic operand model cannot reject earlier —
//! mismatched comparison operands, a logical operator over non-bools, or a
//! condition that is not a boolean at all. Factory functions populate the
//! structured kind.

use attest_tree::{BinaryOp, Value};
use thiserror::Error;

/// Result of evaluating a captured condition.
pub type EvalResult = Result<Value, EvalError>;

/// Structured category for an evaluation error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalErrorKind {
    /// Binary operator over operands of different types.
    #[error("mismatched operand types: {left} and {right}")]
    BinaryTypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Operator applied to a type that does not support it.
    #[error("operator `{}` is not supported for {} operands", .op.as_symbol(), .type_name)]
    InvalidBinaryOp {
        type_name: &'static str,
        op: BinaryOp,
    },

    /// The condition evaluated to a non-boolean value.
    #[error("condition evaluated to {got}, expected bool")]
    ConditionNotBool { got: &'static str },
}

/// An error produced while evaluating a captured condition.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
}

/// Binary operator over operands of different types.
pub fn binary_type_mismatch(left: &'static str, right: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::BinaryTypeMismatch { left, right },
    }
}

/// Operator applied to operands whose type does not support it.
pub fn invalid_binary_op_for(type_name: &'static str, op: BinaryOp) -> EvalError {
    EvalError {
        kind: EvalErrorKind::InvalidBinaryOp { type_name, op },
    }
}

/// Non-boolean top-level condition.
pub fn condition_not_bool(got: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::ConditionNotBool { got },
    }
}

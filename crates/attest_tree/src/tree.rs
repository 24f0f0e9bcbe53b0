//! The captured condition tree.
//!
//! A condition is reified as a binary tree before evaluation: leaves hold
//! operand values, interior nodes hold an operator and two children. The
//! shape mirrors the source expression's own precedence and associativity;
//! there is no separate grouping node.

use crate::operators::BinaryOp;
use crate::value::Value;

/// A captured condition: a leaf operand or a binary combination.
///
/// Nodes own their children and a tree is consumed exactly once by the
/// evaluator, so re-evaluating a condition is not expressible without an
/// explicit clone. A leaf always holds a [`Value`], never another tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A single operand, evaluated natively at capture time.
    Leaf(Value),
    /// An operator applied to two captured operands.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Capture a bare operand as a leaf.
    pub fn leaf(value: impl Into<Value>) -> Self {
        Expr::Leaf(value.into())
    }

    /// Combine two captured operands under an operator.
    ///
    /// Operands may be bare values or already-built subtrees; a subtree
    /// passes through unchanged rather than being wrapped a second time.
    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Leaf(value)
    }
}

/// Leaf conversions for every operand type `Value` accepts.
macro_rules! impl_expr_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Expr::Leaf(Value::from(value))
                }
            }
        )+
    };
}

impl_expr_from!(i64, i32, u32, f64, bool, char, &str, String);

#[cfg(test)]
mod tests;

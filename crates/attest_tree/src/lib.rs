//! Captured condition trees.
//!
//! This crate contains the data model for traced assertions:
//! - [`BinaryOp`]: the fixed operator set a condition may use
//! - [`Value`]: a captured operand
//! - [`Expr`]: the condition tree built at the call site
//!
//! Building a tree is pure assembly — nothing is compared, nothing is
//! formatted, no boolean is computed. Evaluation and trace rendering live
//! in `attest_eval`; this crate deliberately has no logic beyond
//! construction and display of single values.

mod operators;
mod tree;
mod value;

pub use operators::BinaryOp;
pub use tree::Expr;
pub use value::Value;

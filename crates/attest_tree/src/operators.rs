//! Comparison and logical operators.
//!
//! The operator set is fixed: the six comparisons plus `&&` and `||`.
//! Every interpreter of an operator matches exhaustively on [`BinaryOp`],
//! so the symbol table and the evaluator's dispatch cannot drift apart —
//! adding a variant fails to compile until both are extended.

/// Binary operators available inside a captured condition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in trace text to show the operator between its operands.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Comparison
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// True for the six comparison operators.
    pub const fn is_comparison(self) -> bool {
        !self.is_logical()
    }

    /// True for `&&` and `||`.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

#[cfg(test)]
mod tests;

//! Call-site macros: expression capture and assertion dispatch.
//!
//! [`capture!`] parses a restricted condition grammar with token-tree
//! munchers and expands to [`Expr`](crate::Expr) builder calls:
//!
//! ```text
//! or   := and ( "||" and )*            left-associative
//! and  := cmp ( "&&" cmp )*            left-associative
//! cmp  := atom ( OP atom )?            OP in { == != < <= > >= }
//! atom := a parenthesized sub-condition, or any Rust expression
//!         evaluated natively at capture time
//! ```
//!
//! Rust's own operators are never redefined; composition happens entirely
//! inside the macro expansion, so the grammar exists only within the
//! macro's argument.

/// Capture a condition as an [`Expr`](crate::Expr) tree without evaluating
/// it.
///
/// Builds pure data: nothing is compared and no trace is produced until
/// the tree is handed to [`check`](crate::check). Leaf operands are
/// evaluated natively, exactly once, as the tree is built.
#[macro_export]
macro_rules! capture {
    ($($tokens:tt)+) => {
        $crate::__capture_or!(@scan [] [] $($tokens)+)
    };
}

/// Splits on `||`, folding left-associatively; segments delegate to the
/// `&&` level. The first bracket accumulates the current segment, the
/// second the expression built so far.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture_or {
    (@scan [$($cur:tt)+] [] || $($rest:tt)+) => {
        $crate::__capture_or!(@scan [] [$crate::__capture_and!(@scan [] [] $($cur)+)] $($rest)+)
    };
    (@scan [$($cur:tt)+] [$($acc:tt)+] || $($rest:tt)+) => {
        $crate::__capture_or!(@scan [] [$crate::Expr::binary(
            $crate::BinaryOp::Or,
            $($acc)+,
            $crate::__capture_and!(@scan [] [] $($cur)+),
        )] $($rest)+)
    };
    (@scan [$($cur:tt)*] [$($acc:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__capture_or!(@scan [$($cur)* $next] [$($acc)*] $($rest)*)
    };
    (@scan [$($cur:tt)+] []) => {
        $crate::__capture_and!(@scan [] [] $($cur)+)
    };
    (@scan [$($cur:tt)+] [$($acc:tt)+]) => {
        $crate::Expr::binary(
            $crate::BinaryOp::Or,
            $($acc)+,
            $crate::__capture_and!(@scan [] [] $($cur)+),
        )
    };
}

/// Splits on `&&`, folding left-associatively; segments delegate to the
/// comparison level.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture_and {
    (@scan [$($cur:tt)+] [] && $($rest:tt)+) => {
        $crate::__capture_and!(@scan [] [$crate::__capture_cmp!(@scan [] $($cur)+)] $($rest)+)
    };
    (@scan [$($cur:tt)+] [$($acc:tt)+] && $($rest:tt)+) => {
        $crate::__capture_and!(@scan [] [$crate::Expr::binary(
            $crate::BinaryOp::And,
            $($acc)+,
            $crate::__capture_cmp!(@scan [] $($cur)+),
        )] $($rest)+)
    };
    (@scan [$($cur:tt)*] [$($acc:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__capture_and!(@scan [$($cur)* $next] [$($acc)*] $($rest)*)
    };
    (@scan [$($cur:tt)+] []) => {
        $crate::__capture_cmp!(@scan [] $($cur)+)
    };
    (@scan [$($cur:tt)+] [$($acc:tt)+]) => {
        $crate::Expr::binary(
            $crate::BinaryOp::And,
            $($acc)+,
            $crate::__capture_cmp!(@scan [] $($cur)+),
        )
    };
}

/// Splits a segment on its comparison operator, if any; a segment without
/// one is a bare operand.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture_cmp {
    (@scan [$($lhs:tt)+] == $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::Eq,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)+] != $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::NotEq,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)+] <= $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::LtEq,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)+] >= $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::GtEq,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)+] < $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::Lt,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)+] > $($rhs:tt)+) => {
        $crate::Expr::binary(
            $crate::BinaryOp::Gt,
            $crate::__capture_atom!($($lhs)+),
            $crate::__capture_atom!($($rhs)+),
        )
    };
    (@scan [$($lhs:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__capture_cmp!(@scan [$($lhs)* $next] $($rest)*)
    };
    (@scan [$($lhs:tt)+]) => {
        $crate::__capture_atom!($($lhs)+)
    };
}

/// A single parenthesized group is sub-condition grouping and recurses
/// into the grammar — capturing an already-built subtree never wraps it a
/// second time. Anything else is a leaf operand.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture_atom {
    (($($group:tt)+)) => {
        $crate::__capture_or!(@scan [] [] $($group)+)
    };
    ($($leaf:tt)+) => {
        $crate::Expr::leaf($($leaf)+)
    };
}

/// Check a condition and report failures through the installed policy.
///
/// Expands to a capture, one evaluation, and — only when the condition
/// fails — a [`Report`](crate::Report) carrying `file!()`, `line!()`,
/// `module_path!()` and the condition's source text, dispatched to the
/// policy returned by [`installed()`](crate::installed). A passing check
/// performs no handler call. A condition the evaluator cannot apply
/// (mismatched operand types) is reported the same way, with the error
/// text as the details.
#[macro_export]
macro_rules! attest {
    ($($tokens:tt)+) => {
        $crate::__attest_dispatch!($crate::installed(), $($tokens)+)
    };
}

/// Like [`attest!`], with an explicitly supplied failure policy.
///
/// The handler expression is evaluated only when the condition fails.
#[macro_export]
macro_rules! attest_with {
    ($handler:expr, $($tokens:tt)+) => {
        $crate::__attest_dispatch!($handler, $($tokens)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attest_dispatch {
    ($handler:expr, $($tokens:tt)+) => {{
        let __details = match $crate::check($crate::capture!($($tokens)+)) {
            ::std::result::Result::Ok(__verdict) => __verdict.details,
            ::std::result::Result::Err(__error) => {
                ::std::option::Option::Some(__error.to_string())
            }
        };
        if let ::std::option::Option::Some(__details) = __details {
            let __report = $crate::Report {
                file: ::std::file!(),
                line: ::std::line!(),
                function: ::std::module_path!(),
                source: ::std::stringify!($($tokens)+),
                details: &__details,
            };
            $handler.notify(&__report);
        }
    }};
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn bare_operands_become_leaves() {
    assert_eq!(Expr::leaf(1_i64), Expr::Leaf(Value::Int(1)));
    assert_eq!(Expr::leaf(false), Expr::Leaf(Value::Bool(false)));
    assert_eq!(Expr::leaf("x"), Expr::Leaf(Value::Str("x".to_string())));
}

#[test]
fn binary_captures_bare_operands_on_both_sides() {
    let node = Expr::binary(BinaryOp::Gt, 1_i64, 0_i64);
    assert_eq!(
        node,
        Expr::Binary {
            op: BinaryOp::Gt,
            lhs: Box::new(Expr::Leaf(Value::Int(1))),
            rhs: Box::new(Expr::Leaf(Value::Int(0))),
        }
    );
}

#[test]
fn subtrees_pass_through_without_rewrapping() {
    let inner = Expr::binary(BinaryOp::Lt, 20_i64, 0_i64);
    let combined = Expr::binary(BinaryOp::And, inner.clone(), true);
    match combined {
        Expr::Binary { op, lhs, rhs } => {
            assert_eq!(op, BinaryOp::And);
            assert_eq!(*lhs, inner);
            assert_eq!(*rhs, Expr::Leaf(Value::Bool(true)));
        }
        Expr::Leaf(_) => panic!("expected a binary node"),
    }
}

#[test]
fn trees_mirror_nesting_left_to_right() {
    let lhs = Expr::binary(BinaryOp::Gt, 1_i64, 0_i64);
    let rhs = Expr::binary(BinaryOp::Lt, 20_i64, 0_i64);
    let tree = Expr::binary(BinaryOp::And, lhs.clone(), rhs.clone());
    match tree {
        Expr::Binary { lhs: l, rhs: r, .. } => {
            assert_eq!(*l, lhs);
            assert_eq!(*r, rhs);
        }
        Expr::Leaf(_) => panic!("expected a binary node"),
    }
}

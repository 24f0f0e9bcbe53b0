use super::*;

const ALL: [BinaryOp; 8] = [
    BinaryOp::Eq,
    BinaryOp::NotEq,
    BinaryOp::Lt,
    BinaryOp::LtEq,
    BinaryOp::Gt,
    BinaryOp::GtEq,
    BinaryOp::And,
    BinaryOp::Or,
];

#[test]
fn symbols_match_source_spelling() {
    assert_eq!(BinaryOp::Eq.as_symbol(), "==");
    assert_eq!(BinaryOp::NotEq.as_symbol(), "!=");
    assert_eq!(BinaryOp::Lt.as_symbol(), "<");
    assert_eq!(BinaryOp::LtEq.as_symbol(), "<=");
    assert_eq!(BinaryOp::Gt.as_symbol(), ">");
    assert_eq!(BinaryOp::GtEq.as_symbol(), ">=");
    assert_eq!(BinaryOp::And.as_symbol(), "&&");
    assert_eq!(BinaryOp::Or.as_symbol(), "||");
}

#[test]
fn comparison_and_logical_partition_the_set() {
    for op in ALL {
        assert_ne!(op.is_comparison(), op.is_logical(), "{op:?}");
    }
    assert_eq!(ALL.iter().filter(|op| op.is_logical()).count(), 2);
}

#[test]
fn symbols_are_distinct() {
    for (i, a) in ALL.iter().enumerate() {
        for b in &ALL[i + 1..] {
            assert_ne!(a.as_symbol(), b.as_symbol());
        }
    }
}

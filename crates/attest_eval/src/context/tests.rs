use super::*;
use pretty_assertions::assert_eq;

#[test]
fn outermost_node_is_never_parenthesized() {
    let mut ctx = TraceContext::new();
    ctx.enter();
    ctx.value(&Value::Int(1));
    ctx.symbol(BinaryOp::Eq);
    ctx.value(&Value::Int(20));
    ctx.exit();
    assert_eq!(ctx.finish(), "1 == 20");
}

#[test]
fn nested_nodes_are_parenthesized() {
    // Drive the context the way the evaluator walks `(1 > 0) && (20 < 0)`.
    let mut ctx = TraceContext::new();
    ctx.enter();
    ctx.enter();
    ctx.value(&Value::Int(1));
    ctx.symbol(BinaryOp::Gt);
    ctx.value(&Value::Int(0));
    ctx.exit();
    ctx.symbol(BinaryOp::And);
    ctx.enter();
    ctx.value(&Value::Int(20));
    ctx.symbol(BinaryOp::Lt);
    ctx.value(&Value::Int(0));
    ctx.exit();
    ctx.exit();
    assert_eq!(ctx.finish(), "(1 > 0) && (20 < 0)");
}

#[test]
fn symbols_are_space_separated() {
    let mut ctx = TraceContext::new();
    ctx.symbol(BinaryOp::LtEq);
    assert_eq!(ctx.finish(), " <= ");
}

#[test]
fn bare_leaf_traces_as_its_value() {
    let mut ctx = TraceContext::new();
    ctx.value(&Value::Bool(false));
    assert_eq!(ctx.finish(), "false");
}

#[test]
fn disabled_context_records_nothing() {
    let mut ctx = TraceContext::disabled();
    ctx.enter();
    ctx.enter();
    ctx.value(&Value::Int(1));
    ctx.symbol(BinaryOp::Or);
    ctx.value(&Value::Int(2));
    ctx.exit();
    ctx.exit();
    assert_eq!(ctx.finish(), "");
}

#[test]
fn default_is_an_enabled_context() {
    let mut ctx = TraceContext::default();
    ctx.value(&Value::Int(9));
    assert_eq!(ctx.finish(), "9");
}

// src/value/value_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_leaf_creation() {
    let a = Value::new(2.5);
    assert_eq!(a.value(), 2.5);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.label(), None);
    assert_eq!(a.op_kind(), OpKind::Constant);
    assert!(a.is_leaf());
    assert!(a.operands().is_empty());
}

#[test]
fn test_labeled_leaf() {
    let w = Value::with_label(-3.0, "w1");
    assert_eq!(w.label().as_deref(), Some("w1"));
    w.set_label("weight");
    assert_eq!(w.label().as_deref(), Some("weight"));
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let alias = a.clone();
    alias.set_value(4.0);
    assert_eq!(a.value(), 4.0);
    assert_eq!(a, alias);
    assert_eq!(a.id(), alias.id());
}

#[test]
fn test_identity_not_value_equality() {
    let a = Value::new(1.0);
    let b = Value::new(1.0);
    assert_ne!(a, b);

    let mut set = HashSet::new();
    set.insert(a.clone());
    set.insert(b.clone());
    set.insert(a.clone());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_operands_listed_per_edge() {
    let x = Value::new(3.0);
    let sq = &x * &x;
    let operands = sq.operands();
    assert_eq!(operands.len(), 2);
    assert_eq!(operands[0], x);
    assert_eq!(operands[1], x);
    assert_eq!(sq.op_kind(), OpKind::Mul);
    assert!(!sq.is_leaf());
}

#[test]
fn test_display_and_debug() {
    let a = Value::with_label(1.5, "a");
    assert_eq!(format!("{}", a), "1.5");
    let debug = format!("{:?}", a);
    assert!(debug.contains("\"a\""));
    assert!(debug.contains("Constant"));
}

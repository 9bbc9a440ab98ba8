//! Graphviz rendering of a computation graph.

use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

/// Renders the graph reachable from `root` in the DOT language.
///
/// Every node becomes a record `{ label | data | grad }`; every non-leaf node
/// also gets a small op node (`+`, `*`, `tanh`, ...) between its operands and
/// itself. An operand used twice yields two edges. Layout is left to right.
///
/// The text can be rendered with `dot -Tsvg`.
///
/// # Errors
/// `CycleDetected` if the graph is not acyclic.
pub fn to_dot(root: &Value) -> Result<String, ScalarGradError> {
    let nodes = topological_sort(root)?;
    let ids: HashMap<NodeId, usize> = nodes.iter().enumerate().map(|(i, n)| (n.id(), i)).collect();

    let mut out = String::from("digraph {\n  rankdir=LR;\n");
    for (i, node) in nodes.iter().enumerate() {
        let label = node.label().map(|l| escape(&l)).unwrap_or_default();
        out.push_str(&format!(
            "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];\n",
            i,
            label,
            node.value(),
            node.grad()
        ));

        if node.is_leaf() {
            continue;
        }
        out.push_str(&format!(
            "  n{}_op [label=\"{}\"];\n  n{}_op -> n{};\n",
            i,
            node.op_kind().symbol(),
            i,
            i
        ));
        for operand in node.operands() {
            if let Some(j) = ids.get(&operand.id()) {
                out.push_str(&format!("  n{} -> n{}_op;\n", j, i));
            }
        }
    }
    out.push_str("}\n");
    Ok(out)
}

// Record labels treat these characters as structure.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dot_leaf() {
        let a = Value::with_label(2.0, "a");
        let dot = to_dot(&a).unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("n0 [shape=record, label=\"{ a | data 2.0000 | grad 0.0000 }\"];"));
        assert!(!dot.contains("_op"));
    }

    #[test]
    fn test_to_dot_expression() {
        let a = Value::with_label(2.0, "a");
        let b = Value::with_label(-3.0, "b");
        let c = &a * &b;
        let d = c.tanh();
        let dot = to_dot(&d).unwrap();
        // root first: n0 is tanh, n1 is the product
        assert!(dot.contains("n0_op [label=\"tanh\"];"));
        assert!(dot.contains("n1_op [label=\"*\"];"));
        assert!(dot.contains("n1 -> n0_op;"));
        assert!(dot.contains("n0_op -> n0;"));
        assert_eq!(dot.matches("-> n1_op;").count(), 2);
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_to_dot_repeated_operand_has_two_edges() {
        let x = Value::new(3.0);
        let y = &x * &x;
        let dot = to_dot(&y).unwrap();
        assert_eq!(dot.matches("n1 -> n0_op;").count(), 2);
    }

    #[test]
    fn test_to_dot_shows_gradients() {
        let a = Value::new(1.5);
        let b = a.mul(2.0).unwrap();
        b.backward().unwrap();
        let dot = to_dot(&b).unwrap();
        assert!(dot.contains("grad 2.0000"));
        assert!(dot.contains("grad 1.0000"));
    }

    #[test]
    fn test_escape_record_characters() {
        assert_eq!(escape("(a+b)"), "(a+b)");
        assert_eq!(escape("a|b"), "a\\|b");
        assert_eq!(escape("{x}"), "\\{x\\}");
    }
}

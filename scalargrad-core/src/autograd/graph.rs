use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Returns every node reachable from `root` in reverse topological order.
///
/// The root comes first and leaves last: each node appears after all nodes
/// that use it as an operand, so running the propagation rules in this order
/// fully accumulates a node's gradient before it is pushed further down.
///
/// The traversal is an iterative depth-first post-order. `visited` makes each
/// node appear once no matter how many paths reach it; `on_path` holds the
/// nodes of the current descent and reveals cycles.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if a node is (transitively) an
/// operand of itself.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    let mut post_order: Vec<Value> = Vec::new();
    // (node, children already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        let node_id = node.id();
        if expanded {
            on_path.remove(&node_id);
            post_order.push(node);
            continue;
        }
        if !visited.insert(node_id) {
            if on_path.contains(&node_id) {
                return Err(ScalarGradError::CycleDetected);
            }
            continue;
        }
        on_path.insert(node_id);
        stack.push((node.clone(), true));

        // Reversed so the first operand is explored first.
        for operand in node.operands().into_iter().rev() {
            let operand_id = operand.id();
            if on_path.contains(&operand_id) {
                return Err(ScalarGradError::CycleDetected);
            }
            if !visited.contains(&operand_id) {
                stack.push((operand, false));
            }
        }
    }

    post_order.reverse();
    log::trace!("topological_sort: {} nodes reachable from root", post_order.len());
    Ok(post_order)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

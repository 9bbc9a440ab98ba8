use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Sets this node's gradient to 1.0, then visits every node reachable
    /// through operands in reverse topological order (this node first,
    /// leaves last) and invokes each node's propagation rule exactly once.
    /// Each rule adds its contribution to the operands' gradients, so a node
    /// reached through several paths ends up with the sum over all of them.
    ///
    /// Gradients are accumulated, never reset: call [`Value::zero_grad`] (or
    /// `Optimizer::zero_grad`) on reused nodes before a new pass.
    ///
    /// # Errors
    /// `CycleDetected` if the operand relation is not acyclic.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self)?;
        log::debug!("backward: {} nodes in graph", sorted_nodes.len());

        self.set_grad(1.0);

        for node in &sorted_nodes {
            // Release the borrow before writing into the operands.
            let (value, grad, op) = {
                let guard = node.read_data();
                (guard.value, guard.grad, guard.op.clone())
            };
            op.backward(value, grad);
        }
        Ok(())
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;

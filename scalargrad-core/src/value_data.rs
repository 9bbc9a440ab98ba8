// src/value_data.rs
use crate::autograd::BackwardOp;
use std::rc::Rc;

/// Internal storage of one node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by [`Value`](crate::Value) so the
/// same node can be shared by every consumer that used it as an operand while
/// its gradient stays mutable during the backward pass.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar held by this node.
    pub(crate) value: f64,
    /// Accumulated derivative of the last backward root with respect to this node.
    pub(crate) grad: f64,
    /// The operation that produced this node, holding one operand handle per edge.
    /// Leaves carry `BackwardOp::Constant`.
    pub(crate) op: BackwardOp,
    /// Optional human-readable label, used for diagnostics and graph rendering.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the data of a leaf node (no operands, zero gradient).
    pub fn leaf(value: f64, label: Option<String>) -> Self {
        ValueData {
            value,
            grad: 0.0,
            op: BackwardOp::Constant,
            label,
        }
    }

    /// Creates the data of a node produced by `op`.
    pub fn from_op(value: f64, op: BackwardOp, label: Option<String>) -> Self {
        ValueData {
            value,
            grad: 0.0,
            op,
            label,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

// Operand chains are released with a worklist, not recursively.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, BackwardOp::Constant).into_inputs();
        while let Some(operand) = pending.pop() {
            // Nodes still shared elsewhere only lose one reference here.
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut data = cell.into_inner();
                pending.extend(std::mem::replace(&mut data.op, BackwardOp::Constant).into_inputs());
            }
        }
    }
}

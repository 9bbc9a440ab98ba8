use crate::value::Value;
use std::fmt;

/// Identifies which operation produced a node.
///
/// Only used for labeling, diagnostics and rendering; gradient propagation
/// dispatches on [`BackwardOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Constant,
    Add,
    Mul,
    Pow,
    Exp,
    Tanh,
    Relu,
}

impl OpKind {
    /// Short symbol used when rendering a graph.
    pub fn symbol(&self) -> &'static str {
        match self {
            OpKind::Constant => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "**",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "relu",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Constant => "constant",
            OpKind::Add => "add",
            OpKind::Mul => "multiply",
            OpKind::Pow => "power",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "relu",
        };
        f.write_str(name)
    }
}

/// The backward step of a node, bound when the node is created.
///
/// Each variant holds the operand handles of the node (one per edge, in
/// order) plus whatever constant the local derivative needs. Given the node's
/// own value and accumulated gradient, [`BackwardOp::backward`] adds the
/// chain-rule contribution to every operand.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// Leaf: input constant or trainable parameter. Propagates nothing.
    Constant,
    /// `lhs + rhs`: d/dlhs = d/drhs = 1.
    Add { lhs: Value, rhs: Value },
    /// `lhs * rhs`: d/dlhs = rhs, d/drhs = lhs.
    Mul { lhs: Value, rhs: Value },
    /// `base ^ exponent` with a constant exponent: d/dbase = p * base^(p-1).
    Pow { base: Value, exponent: f64 },
    /// `e ^ input`: the derivative is the node's own value.
    Exp { input: Value },
    /// `tanh(input)`: d/dinput = 1 - t^2 with `t` the node's own value.
    Tanh { input: Value },
    /// `max(0, input)`: d/dinput = 1 when the node's value is > 0, else 0.
    Relu { input: Value },
}

impl BackwardOp {
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Constant => OpKind::Constant,
            BackwardOp::Add { .. } => OpKind::Add,
            BackwardOp::Mul { .. } => OpKind::Mul,
            BackwardOp::Pow { .. } => OpKind::Pow,
            BackwardOp::Exp { .. } => OpKind::Exp,
            BackwardOp::Tanh { .. } => OpKind::Tanh,
            BackwardOp::Relu { .. } => OpKind::Relu,
        }
    }

    /// Returns the operands, one entry per edge.
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Constant => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } | BackwardOp::Relu { input } => {
                vec![input]
            }
        }
    }

    /// Consumes the op and returns its operand handles, one entry per edge.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Constant => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } | BackwardOp::Relu { input } => {
                vec![input]
            }
        }
    }

    /// Accumulates the contribution of one node into its operands' gradients.
    ///
    /// `out_value` and `out_grad` are the value and the (fully accumulated)
    /// gradient of the node owning this op. Each edge gets its own additive
    /// contribution, so an operand used twice receives two.
    pub(crate) fn backward(&self, out_value: f64, out_grad: f64) {
        match self {
            BackwardOp::Constant => {}
            BackwardOp::Add { lhs, rhs } => {
                lhs.acc_grad(out_grad);
                rhs.acc_grad(out_grad);
            }
            BackwardOp::Mul { lhs, rhs } => {
                let lhs_value = lhs.value();
                let rhs_value = rhs.value();
                lhs.acc_grad(rhs_value * out_grad);
                rhs.acc_grad(lhs_value * out_grad);
            }
            BackwardOp::Pow { base, exponent } => {
                // x^0 is constant; 0 * 0^-1 would give NaN at x = 0.
                if *exponent == 0.0 {
                    return;
                }
                let base_value = base.value();
                base.acc_grad(exponent * base_value.powf(exponent - 1.0) * out_grad);
            }
            BackwardOp::Exp { input } => {
                input.acc_grad(out_value * out_grad);
            }
            BackwardOp::Tanh { input } => {
                input.acc_grad((1.0 - out_value * out_value) * out_grad);
            }
            BackwardOp::Relu { input } => {
                let local = if out_value > 0.0 { 1.0 } else { 0.0 };
                input.acc_grad(local * out_grad);
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;

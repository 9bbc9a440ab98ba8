// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{join_labels, IntoOperand};
use crate::value::Value;

/// Adds two operands, promoting numeric literals to constant leaves.
///
/// The new node keeps both operands, even when they are the same node, so
/// `x + x` gives `x` a gradient of 2.
///
/// # Errors
/// `UnsupportedOperandType` if an operand cannot be converted.
pub fn add_op(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let lhs = lhs.into_operand("add")?.into_value();
    let rhs = rhs.into_operand("add")?.into_value();
    Ok(add_values(&lhs, &rhs))
}

pub(crate) fn add_values(lhs: &Value, rhs: &Value) -> Value {
    let value = lhs.value() + rhs.value();
    let label = join_labels(lhs.label(), rhs.label(), "+").map(|l| format!("({})", l));
    Value::from_op(
        value,
        BackwardOp::Add {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        },
        label,
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

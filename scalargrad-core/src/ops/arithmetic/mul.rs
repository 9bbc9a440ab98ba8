// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{join_labels, IntoOperand};
use crate::value::Value;

/// Multiplies two operands, promoting numeric literals to constant leaves.
///
/// # Errors
/// `UnsupportedOperandType` if an operand cannot be converted.
pub fn mul_op(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let lhs = lhs.into_operand("mul")?.into_value();
    let rhs = rhs.into_operand("mul")?.into_value();
    Ok(mul_values(&lhs, &rhs))
}

pub(crate) fn mul_values(lhs: &Value, rhs: &Value) -> Value {
    let value = lhs.value() * rhs.value();
    let label = join_labels(lhs.label(), rhs.label(), "*");
    Value::from_op(
        value,
        BackwardOp::Mul {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        },
        label,
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

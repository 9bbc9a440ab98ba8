// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{wrap_label, IntoOperand};
use crate::value::Value;

/// Applies the Rectified Linear Unit, `max(0, x)`.
///
/// The gradient passes through only where the output is strictly positive.
/// At exactly 0 the sub-gradient used is 0.
///
/// # Errors
/// `UnsupportedOperandType` if the operand cannot be converted.
pub fn relu_op(input: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let input = input.into_operand("relu")?.into_value();
    Ok(relu_value(&input))
}

pub(crate) fn relu_value(input: &Value) -> Value {
    let x = input.value();
    let value = if x > 0.0 { x } else { 0.0 };
    Value::from_op(
        value,
        BackwardOp::Relu {
            input: input.clone(),
        },
        wrap_label("relu", input.label()),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;

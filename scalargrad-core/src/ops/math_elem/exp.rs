// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{wrap_label, IntoOperand};
use crate::value::Value;

/// Computes \( e^x \).
///
/// The derivative of \( e^x \) is the output itself, so the backward rule
/// reads the node's own value: \( \frac{dL}{dx} = e^x \cdot \frac{dL}{dz} \).
///
/// # Errors
/// `UnsupportedOperandType` if the operand cannot be converted.
///
/// # Example
/// ```
/// use scalargrad_core::{ops::exp_op, Value};
///
/// let x = Value::new(0.0);
/// let y = exp_op(&x).unwrap();
/// assert_eq!(y.value(), 1.0);
/// ```
pub fn exp_op(input: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let input = input.into_operand("exp")?.into_value();
    Ok(exp_value(&input))
}

pub(crate) fn exp_value(input: &Value) -> Value {
    Value::from_op(
        input.value().exp(),
        BackwardOp::Exp {
            input: input.clone(),
        },
        wrap_label("exp", input.label()),
    )
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

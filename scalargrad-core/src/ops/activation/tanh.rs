// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::{wrap_label, IntoOperand};
use crate::value::Value;

/// Applies the hyperbolic tangent.
///
/// The forward value uses the closed form \( 1 - \frac{2}{e^{2x} + 1} \).
/// For large positive `x`, \( e^{2x} \) overflows to infinity and the result
/// is exactly 1; for large negative `x` it underflows to 0 and the result is
/// exactly -1.
///
/// The backward rule reads the node's own value `t`:
/// \( \frac{dL}{dx} = (1 - t^2) \cdot \frac{dL}{dz} \).
///
/// # Errors
/// `UnsupportedOperandType` if the operand cannot be converted.
pub fn tanh_op(input: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let input = input.into_operand("tanh")?.into_value();
    Ok(tanh_value(&input))
}

pub(crate) fn tanh_value(input: &Value) -> Value {
    Value::from_op(
        closed_form_tanh(input.value()),
        BackwardOp::Tanh {
            input: input.clone(),
        },
        wrap_label("tanh", input.label()),
    )
}

fn closed_form_tanh(x: f64) -> f64 {
    1.0 - 2.0 / ((2.0 * x).exp() + 1.0)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;

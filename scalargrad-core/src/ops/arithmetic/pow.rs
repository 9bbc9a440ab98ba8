// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::IntoOperand;
use crate::value::Value;

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is not a graph node; only `base` receives a gradient,
/// `exponent * base^(exponent - 1)` per unit of output gradient. A zero
/// exponent yields a constant node whose base gradient is 0, including at
/// `base = 0`.
///
/// # Errors
/// - `InvalidExponent` if `exponent` is NaN or infinite.
/// - `UnsupportedOperandType` if `base` cannot be converted.
pub fn pow_op(base: impl IntoOperand, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent { exponent });
    }
    let base = base.into_operand("pow")?.into_value();
    Ok(pow_value(&base, exponent))
}

/// Builds the power node. `exponent` must already be finite.
pub(crate) fn pow_value(base: &Value, exponent: f64) -> Value {
    let value = base.value().powf(exponent);
    let label = base.label().map(|l| format!("{}**{}", l, exponent));
    Value::from_op(
        value,
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
        label,
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

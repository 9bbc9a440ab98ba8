// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_values, pow_value};
use crate::ops::IntoOperand;
use crate::value::Value;

/// Divides `lhs` by `rhs`, built as `lhs * rhs^-1`.
///
/// Both operands take part in the result and both receive gradients:
/// d/dlhs = 1/rhs and d/drhs = -lhs/rhs^2. Division by a zero-valued node
/// follows IEEE arithmetic (infinite or NaN values) rather than failing.
///
/// # Errors
/// `UnsupportedOperandType` if an operand cannot be converted.
pub fn div_op(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let lhs = lhs.into_operand("div")?.into_value();
    let rhs = rhs.into_operand("div")?.into_value();
    Ok(div_values(&lhs, &rhs))
}

pub(crate) fn div_values(lhs: &Value, rhs: &Value) -> Value {
    mul_values(lhs, &pow_value(rhs, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

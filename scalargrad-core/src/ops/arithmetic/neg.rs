// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_values;
use crate::ops::IntoOperand;
use crate::value::Value;

/// Negates an operand, built as a multiplication by the literal -1.
///
/// # Errors
/// `UnsupportedOperandType` if the operand cannot be converted.
pub fn neg_op(input: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let input = input.into_operand("neg")?.into_value();
    Ok(neg_value(&input))
}

pub(crate) fn neg_value(input: &Value) -> Value {
    mul_values(input, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

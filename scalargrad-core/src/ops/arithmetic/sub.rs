// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_values, neg_value};
use crate::ops::IntoOperand;
use crate::value::Value;

/// Subtracts `rhs` from `lhs`, built as `lhs + (-rhs)`.
///
/// # Errors
/// `UnsupportedOperandType` if an operand cannot be converted.
pub fn sub_op(lhs: impl IntoOperand, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
    let lhs = lhs.into_operand("sub")?.into_value();
    let rhs = rhs.into_operand("sub")?.into_value();
    Ok(sub_values(&lhs, &rhs))
}

pub(crate) fn sub_values(lhs: &Value, rhs: &Value) -> Value {
    add_values(lhs, &neg_value(rhs))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

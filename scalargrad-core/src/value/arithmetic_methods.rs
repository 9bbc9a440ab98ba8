use crate::error::ScalarGradError;
use crate::ops::activation::{relu_value, tanh_value};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_value, pow_op, sub_op};
use crate::ops::math_elem::exp_value;
use crate::ops::IntoOperand;
use crate::value::Value;

// The binary methods take any operand and may fail on an unsupported one,
// so they are inherent methods rather than std::ops impls.
#[allow(clippy::should_implement_trait)]
impl Value {
    /// `self + rhs`. See [`add_op`].
    pub fn add(&self, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
        add_op(self, rhs)
    }

    /// `self - rhs`, built as `self + (-rhs)`.
    pub fn sub(&self, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
        sub_op(self, rhs)
    }

    /// `self * rhs`. See [`mul_op`].
    pub fn mul(&self, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
        mul_op(self, rhs)
    }

    /// `self / rhs`, built as `self * rhs^-1`.
    pub fn div(&self, rhs: impl IntoOperand) -> Result<Value, ScalarGradError> {
        div_op(self, rhs)
    }

    /// `self ^ exponent` for a finite constant exponent.
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    pub fn neg(&self) -> Value {
        neg_value(self)
    }

    pub fn exp(&self) -> Value {
        exp_value(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_value(self)
    }

    pub fn relu(&self) -> Value {
        relu_value(self)
    }
}

// src/value/traits.rs

use crate::ops::arithmetic::{add_values, div_values, mul_values, neg_value, sub_values};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

// Operator sugar for node-with-node arithmetic. Both sides are already nodes,
// so these cannot fail.

impl<'a, 'b> Add<&'b Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: &'b Value) -> Value {
        add_values(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub_values(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: &'b Value) -> Value {
        mul_values(self, rhs)
    }
}

impl<'a, 'b> Div<&'b Value> for &'a Value {
    type Output = Value;

    fn div(self, rhs: &'b Value) -> Value {
        div_values(self, rhs)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_value(self)
    }
}

impl From<f64> for Value {
    /// Creates an unlabeled leaf.
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

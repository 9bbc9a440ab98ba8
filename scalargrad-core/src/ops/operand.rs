use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::any::Any;

/// An operand of a graph operation: an existing node or a numeric literal.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Value),
    Literal(f64),
}

impl Operand {
    /// Returns the node for this operand, promoting a literal to a fresh constant leaf.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Literal(x) => Value::new(x),
        }
    }

    /// Converts an operand whose type is only known at runtime.
    ///
    /// A [`Value`] or one of the supported literal types (`f64`, `f32`,
    /// `i32`, `i64`, `u32`, `usize`) converts; any other type fails.
    ///
    /// # Errors
    /// `ScalarGradError::UnsupportedOperandType` naming `operation` and the
    /// rejected type.
    pub fn from_any<T: Any>(operand: &T, operation: &str) -> Result<Self, ScalarGradError> {
        let any = operand as &dyn Any;
        if let Some(value) = any.downcast_ref::<Value>() {
            return Ok(Operand::Node(value.clone()));
        }
        macro_rules! try_literal {
            ($($t:ty),*) => {
                $(
                    if let Some(x) = any.downcast_ref::<$t>() {
                        return x.into_operand(operation);
                    }
                )*
            };
        }
        try_literal!(f64, f32, i32, i64, u32, usize);
        Err(unsupported::<T>(operation))
    }
}

fn unsupported<T: ?Sized>(operation: &str) -> ScalarGradError {
    ScalarGradError::UnsupportedOperandType {
        operation: operation.to_string(),
        type_name: std::any::type_name::<T>().to_string(),
    }
}

/// Conversion into an [`Operand`], performed at the boundary of every operation.
pub trait IntoOperand {
    fn into_operand(self, operation: &str) -> Result<Operand, ScalarGradError>;
}

impl IntoOperand for Operand {
    fn into_operand(self, _operation: &str) -> Result<Operand, ScalarGradError> {
        Ok(self)
    }
}

impl IntoOperand for Value {
    fn into_operand(self, _operation: &str) -> Result<Operand, ScalarGradError> {
        Ok(Operand::Node(self))
    }
}

impl IntoOperand for &Value {
    fn into_operand(self, _operation: &str) -> Result<Operand, ScalarGradError> {
        Ok(Operand::Node(self.clone()))
    }
}

macro_rules! impl_literal_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self, operation: &str) -> Result<Operand, ScalarGradError> {
                    self.to_f64()
                        .map(Operand::Literal)
                        .ok_or_else(|| unsupported::<$t>(operation))
                }
            }

            impl IntoOperand for &$t {
                fn into_operand(self, operation: &str) -> Result<Operand, ScalarGradError> {
                    (*self).into_operand(operation)
                }
            }
        )*
    };
}

impl_literal_operand!(f64, f32, i32, i64, u32, usize);

#[cfg(test)]
#[path = "operand_test.rs"]
mod tests;

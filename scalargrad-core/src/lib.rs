//! # scalargrad-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, and a
//! small feed-forward neural network stack built on top of it.
//!
//! Every arithmetic or activation operation on a [`Value`] creates a new node
//! that remembers its operands and how to push a gradient back to them.
//! Calling [`Value::backward`] on the root of such a graph fills in the
//! gradient of every node reachable from it.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let x = Value::with_label(3.0, "x");
//! let y = x.mul(&x).unwrap().add(1.0).unwrap(); // x^2 + 1
//! y.backward().unwrap();
//! assert_eq!(y.value(), 10.0);
//! assert_eq!(x.grad(), 6.0);
//! ```

pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod nn;
pub mod optim;
pub mod train;
pub mod viz;

pub mod error;
pub use error::ScalarGradError;

// Re-export the node handle so it is reachable as `scalargrad_core::Value`
pub use value::{NodeId, Value};
pub use autograd::OpKind;
pub use ops::{IntoOperand, Operand};
// Re-export traits required by public functions/structs
pub use num_traits;
pub use rand;

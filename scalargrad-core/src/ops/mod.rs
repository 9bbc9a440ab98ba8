//! # Scalar Operations Module (`ops`)
//!
//! Every function here builds one or more new graph nodes from existing ones.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`,
//!   `tanh_op`, ...) accepting any [`IntoOperand`]. Numeric literals are
//!   promoted to constant leaves at this boundary; unsupported operands fail
//!   with `UnsupportedOperandType`.
//! - **Node builders:** `pub(crate)` helpers taking `&Value` that cannot fail.
//!   They back the methods and operator impls on [`Value`](crate::Value).
//! - **Backward rules:** the propagation rule of every node is a
//!   [`BackwardOp`](crate::autograd::BackwardOp) variant attached at creation.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.
//! - [`operand`]: operand conversion and literal promotion.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
pub use operand::{IntoOperand, Operand};

/// Joins the labels of two operands around `sep`, keeping whichever exists.
pub(crate) fn join_labels(lhs: Option<String>, rhs: Option<String>, sep: &str) -> Option<String> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => Some(format!("{}{}{}", l, sep, r)),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}

/// Wraps the label of a unary operand as `name(label)`.
pub(crate) fn wrap_label(name: &str, inner: Option<String>) -> Option<String> {
    inner.map(|l| format!("{}({})", name, l))
}

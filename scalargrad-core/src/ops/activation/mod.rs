// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities applied to a single scalar node.
//!
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent, output in (-1, 1).
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit, `max(0, x)`.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;

pub(crate) use relu::relu_value;
pub(crate) use tanh::tanh_value;

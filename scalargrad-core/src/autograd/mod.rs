//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph:
//! - [`backward_op`]: the per-node propagation rule ([`BackwardOp`]) and the
//!   operation tag ([`OpKind`]).
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, OpKind};
pub use graph::topological_sort;

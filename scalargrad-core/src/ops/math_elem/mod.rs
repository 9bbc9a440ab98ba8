// Elementary math functions on scalar nodes.
pub mod exp;

pub use exp::exp_op;

pub(crate) use exp::exp_value;

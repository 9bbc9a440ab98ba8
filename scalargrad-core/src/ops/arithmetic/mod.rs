//! Arithmetic operations on scalar nodes.
//!
//! `add`, `mul` and `pow` create graph nodes of their own; `neg`, `sub` and
//! `div` are composed from them:
//! - `neg(a) = a * -1`
//! - `sub(a, b) = a + neg(b)`
//! - `div(a, b) = a * b^-1`

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

pub(crate) use add::add_values;
pub(crate) use div::div_values;
pub(crate) use mul::mul_values;
pub(crate) use neg::neg_value;
pub(crate) use pow::pow_value;
pub(crate) use sub::sub_values;

use super::param_group::ParamGroup;
use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameter values in place from their accumulated
/// gradients. They never touch the graph structure.
pub trait Optimizer {
    /// Performs a single optimization step over every parameter group.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Resets the gradient of every managed parameter to 0.
    ///
    /// Call this before each new backward pass; gradients otherwise keep
    /// accumulating across passes.
    fn zero_grad(&mut self);

    /// Adds a new parameter group with its own hyperparameters.
    fn add_param_group(&mut self, param_group: ParamGroup);

    fn param_groups(&self) -> &[ParamGroup];

    /// Mutable access to the groups, used by schedulers to change learning rates.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}

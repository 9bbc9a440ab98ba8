use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;

/// Defines the interface for learning rate schedulers.
///
/// A scheduler owns its optimizer and adjusts the learning rate of every
/// parameter group according to a policy. Call [`LRScheduler::step`] once per
/// epoch (or iteration, depending on the policy).
pub trait LRScheduler<O: Optimizer> {
    /// Advances the schedule by one step.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Returns the current learning rate of each parameter group, in group order.
    fn get_last_lr(&self) -> Vec<f64>;

    fn optimizer(&self) -> &O;

    fn optimizer_mut(&mut self) -> &mut O;
}

/// Implements the StepLR learning rate scheduler.
///
/// Multiplies the learning rate of each parameter group by `gamma` every
/// `step_size` steps.
#[derive(Debug)]
pub struct StepLR<O: Optimizer> {
    optimizer: O,
    step_size: usize,
    gamma: f64,
    last_epoch: usize,
    base_lrs: Vec<f64>,
}

impl<O: Optimizer> StepLR<O> {
    /// Creates a new `StepLR` scheduler.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `step_size` is 0 or `gamma` is negative or
    /// not finite.
    pub fn new(optimizer: O, step_size: usize, gamma: f64) -> Result<Self, ScalarGradError> {
        if step_size == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "StepLR: step_size cannot be zero".to_string(),
            ));
        }
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "StepLR: gamma must be a finite non-negative number, got {}",
                gamma
            )));
        }
        let base_lrs = optimizer.param_groups().iter().map(|pg| pg.lr()).collect();

        Ok(StepLR {
            optimizer,
            step_size,
            gamma,
            last_epoch: 0,
            base_lrs,
        })
    }

    /// Number of `step` calls so far.
    pub fn last_epoch(&self) -> usize {
        self.last_epoch
    }

    /// Learning rates of the groups when the scheduler was created.
    pub fn base_lrs(&self) -> &[f64] {
        &self.base_lrs
    }

    pub fn into_optimizer(self) -> O {
        self.optimizer
    }
}

impl<O: Optimizer> LRScheduler<O> for StepLR<O> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        self.last_epoch += 1;

        if self.last_epoch % self.step_size == 0 {
            for pg in self.optimizer.param_groups_mut().iter_mut() {
                let new_lr = pg.lr() * self.gamma;
                pg.set_lr(new_lr);
            }
            log::debug!(
                "StepLR epoch {}: learning rates now {:?}",
                self.last_epoch,
                self.get_last_lr()
            );
        }
        Ok(())
    }

    fn get_last_lr(&self) -> Vec<f64> {
        self.optimizer
            .param_groups()
            .iter()
            .map(|pg| pg.lr())
            .collect()
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }
}

#[cfg(test)]
#[path = "lr_scheduler_test.rs"]
mod tests;

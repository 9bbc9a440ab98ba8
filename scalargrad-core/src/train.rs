//! Full-batch training of a [`Module`] with squared error and decaying SGD.

use crate::error::ScalarGradError;
use crate::nn::{MSELoss, Module, Reduction};
use crate::optim::{LRScheduler, Optimizer, SgdOptimizer, StepLR};
use crate::value::Value;

/// One training example: input features and target outputs.
pub type Sample = (Vec<f64>, Vec<f64>);

/// Hyperparameters of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Factor applied to the learning rate after every epoch.
    pub lr_decay: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            epochs: 100,
            learning_rate: 0.05,
            lr_decay: 0.99,
        }
    }
}

/// Runs one optimization step on `batch` and returns the loss before the update.
///
/// Builds a fresh graph for every sample, computes the loss over all
/// outputs, zeroes the gradients, runs the backward pass and steps the
/// optimizer.
///
/// # Errors
/// - `EmptyBatch` if `batch` is empty.
/// - `InputSizeMismatch` if a sample does not fit the model.
pub fn train_step<M, O>(
    model: &M,
    loss_fn: &MSELoss,
    optimizer: &mut O,
    batch: &[Sample],
) -> Result<f64, ScalarGradError>
where
    M: Module + ?Sized,
    O: Optimizer + ?Sized,
{
    let mut predictions: Vec<Value> = Vec::new();
    let mut targets: Vec<f64> = Vec::new();
    for (x, y) in batch {
        predictions.extend(model.forward_f64(x)?);
        targets.extend_from_slice(y);
    }
    let loss = loss_fn.calculate_f64(&predictions, &targets)?;

    optimizer.zero_grad();
    loss.backward()?;
    optimizer.step()?;
    Ok(loss.value())
}

/// Trains `model` on the whole of `samples` for `config.epochs` epochs.
///
/// Uses a summed squared error, plain SGD at `config.learning_rate`, and
/// multiplies the learning rate by `config.lr_decay` after every epoch.
/// Returns the loss of each epoch.
pub fn fit<M: Module + ?Sized>(
    model: &M,
    samples: &[Sample],
    config: &TrainingConfig,
) -> Result<Vec<f64>, ScalarGradError> {
    let loss_fn = MSELoss::new(Reduction::Sum);
    let optimizer = SgdOptimizer::new(model.parameters(), config.learning_rate);
    let mut scheduler = StepLR::new(optimizer, 1, config.lr_decay)?;

    let mut history = Vec::with_capacity(config.epochs);
    for epoch in 0..config.epochs {
        let loss = train_step(model, &loss_fn, scheduler.optimizer_mut(), samples)?;
        log::debug!(
            "epoch {}: loss {:.6}, lr {:.6}",
            epoch,
            loss,
            scheduler.get_last_lr().first().copied().unwrap_or(0.0)
        );
        history.push(loss);
        scheduler.step()?;
    }
    Ok(history)
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;

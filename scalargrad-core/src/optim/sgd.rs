use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For every parameter `p` of a group with learning rate `lr` and weight
/// decay `wd`:
///
/// ```text
/// d = p.grad + wd * p.value
/// buf = momentum * buf + d      (only if momentum != 0)
/// d = buf
/// p.value -= lr * d
/// ```
///
/// Only leaves are updated; a non-leaf handle is skipped with a warning.
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    momentum: f64,
    momentum_buffers: HashMap<NodeId, f64>,
    step_count: usize,
}

impl SgdOptimizer {
    /// Creates an optimizer with a single parameter group.
    ///
    /// To use several groups with different learning rates, add them with
    /// [`Optimizer::add_param_group`].
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        let params_vec: Vec<Value> = params.into_iter().collect();
        SgdOptimizer {
            param_groups: vec![ParamGroup::new(params_vec, lr)],
            momentum: 0.0,
            momentum_buffers: HashMap::new(),
            step_count: 0,
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// Sets the weight decay of every group added so far.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        for group in self.param_groups.iter_mut() {
            group.weight_decay = weight_decay;
        }
        self
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let mut updated = 0usize;
        for group in self.param_groups.iter() {
            if !group.lr.is_finite() {
                return Err(ScalarGradError::InvalidConfiguration(format!(
                    "SGD learning rate must be finite, got {}",
                    group.lr
                )));
            }
            for param in group.params.iter() {
                if !param.is_leaf() {
                    log::warn!(
                        "SgdOptimizer::step skipping non-leaf node {:?}; only parameters are updated",
                        param.label()
                    );
                    continue;
                }

                let value = param.value();
                let mut d_p = param.grad();
                if group.weight_decay != 0.0 {
                    d_p += group.weight_decay * value;
                }
                if self.momentum != 0.0 {
                    let buffer = self.momentum_buffers.entry(param.id()).or_insert(0.0);
                    *buffer = self.momentum * *buffer + d_p;
                    d_p = *buffer;
                }
                param.set_value(value - group.lr * d_p);
                updated += 1;
            }
        }
        self.step_count += 1;
        log::debug!("SGD step {}: updated {} parameters", self.step_count, updated);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for group in self.param_groups.iter() {
            for param in group.params.iter() {
                param.zero_grad();
            }
        }
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        self.param_groups.push(param_group);
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;

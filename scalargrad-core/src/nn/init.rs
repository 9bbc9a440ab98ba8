// src/nn/init.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution used to draw the initial value of parameters.
///
/// Constructed through [`Initializer::uniform`] or [`Initializer::normal`],
/// which validate the distribution parameters, so sampling cannot fail.
#[derive(Debug, Clone, Copy)]
pub enum Initializer {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Initializer {
    /// Uniform distribution over the closed interval `[low, high]`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if a bound is not finite or `low > high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self, ScalarGradError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "Invalid uniform bounds [{}, {}]",
                low, high
            )));
        }
        Ok(Initializer::Uniform(Uniform::new_inclusive(low, high)))
    }

    /// Normal distribution with the given mean and standard deviation.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `mean` is not finite or `std_dev` is
    /// negative or not finite.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, ScalarGradError> {
        if !mean.is_finite() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "Invalid normal mean {}",
                mean
            )));
        }
        Normal::new(mean, std_dev)
            .map(Initializer::Normal)
            .map_err(|e| {
                ScalarGradError::InvalidConfiguration(format!(
                    "Invalid normal std_dev {}: {}",
                    std_dev, e
                ))
            })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Initializer::Uniform(dist) => dist.sample(rng),
            Initializer::Normal(dist) => dist.sample(rng),
        }
    }

    /// Draws `n` fresh leaf nodes.
    pub fn values<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Value> {
        (0..n).map(|_| Value::new(self.sample(rng))).collect()
    }
}

impl Default for Initializer {
    /// Uniform over `[-1, 1]`.
    fn default() -> Self {
        Initializer::Uniform(Uniform::new_inclusive(-1.0, 1.0))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file

use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: fully connected layers applied in sequence.
///
/// Layer `k` maps `sizes[k]` inputs to `sizes[k + 1]` outputs, where
/// `sizes = [n_in] ++ n_outs`.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use scalargrad_core::nn::{Mlp, Module};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mlp = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
/// assert_eq!(mlp.num_parameters(), 41);
/// let out = mlp.forward_f64(&[2.0, 3.0, -1.0]).unwrap();
/// assert_eq!(out.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network whose layers all use tanh.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `n_outs` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        n_in: usize,
        n_outs: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_activations(n_in, n_outs, Activation::Tanh, Activation::Tanh, rng)
    }

    /// Creates a network using `hidden` on every layer but the last, and
    /// `output` on the last one.
    pub fn with_activations<R: Rng + ?Sized>(
        n_in: usize,
        n_outs: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_initializer(n_in, n_outs, hidden, output, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        n_in: usize,
        n_outs: &[usize],
        hidden: Activation,
        output: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if n_outs.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "Mlp needs at least one layer".to_string(),
            ));
        }
        if n_outs.contains(&0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "Mlp layer sizes must be non-zero, got {:?}",
                n_outs
            )));
        }

        let mut sizes = Vec::with_capacity(n_outs.len() + 1);
        sizes.push(n_in);
        sizes.extend_from_slice(n_outs);

        let last = n_outs.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last { output } else { hidden };
                Layer::with_initializer(pair[0], pair[1], activation, initializer, rng)
            })
            .collect();
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_in(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_in)
    }

    pub fn n_out(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_out)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    /// One `n_in X n_out` line per layer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

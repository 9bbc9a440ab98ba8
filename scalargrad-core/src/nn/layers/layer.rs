use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_out` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        n_in: usize,
        n_out: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Self::with_initializer(n_in, n_out, activation, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        n_in: usize,
        n_out: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_out)
            .map(|_| Neuron::with_initializer(n_in, activation, initializer, rng))
            .collect();
        Layer { neurons, n_in }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the neurons do not all take `n_in` inputs.
    pub fn from_neurons(n_in: usize, neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_in() != n_in) {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: n_in,
                actual: bad.n_in(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, n_in })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// Returns one output node per neuron.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.n_in {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.n_in,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} X {}", self.n_in, self.n_out())
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

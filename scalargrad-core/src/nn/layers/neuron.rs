use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `act(b + sum_i w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn uniformly
    /// from `[-1, 1]`.
    pub fn new<R: Rng + ?Sized>(n_in: usize, activation: Activation, rng: &mut R) -> Self {
        Self::with_initializer(n_in, activation, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        n_in: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Self {
        let weights = initializer.values(n_in, rng);
        let bias = Value::new(initializer.sample(rng));
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_parameters(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    /// Builds the graph of this neuron for one input vector and returns its output node.
    ///
    /// The weighted sum starts at the bias: `((b + w0*x0) + w1*x1) + ...`.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `inputs.len() != self.n_in()`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

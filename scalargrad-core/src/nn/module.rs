use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module maps a slice of input nodes to a vector of output nodes, building
/// a fresh graph on every call, and owns a set of trainable leaf nodes.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `inputs` does not have the expected length.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all trainable parameters, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.2.bias"`), in the same order as
    /// [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Runs [`Module::forward`] on plain numbers, wrapping each in a fresh leaf.
    fn forward_f64(&self, inputs: &[f64]) -> Result<Vec<Value>, ScalarGradError> {
        let inputs: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&inputs)
    }
}

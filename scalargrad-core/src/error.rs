use thiserror::Error;

/// Custom error type for the scalargrad engine and the layers built on it.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Unsupported operand type for operation '{operation}': {type_name}")]
    UnsupportedOperandType {
        operation: String,
        type_name: String,
    },

    #[error("Invalid exponent {exponent}: the exponent of a power must be a finite real number")]
    InvalidExponent { exponent: f64 },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Input size mismatch during operation {operation}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received an empty batch")]
    EmptyBatch { operation: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

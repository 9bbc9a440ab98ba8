// src/nn/mod.rs
// Neural network building blocks made of scalar nodes.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use init::Initializer;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;

//! # scalargrad-data
//!
//! Datasets, index samplers and a batching [`DataLoader`] feeding training
//! loops built on `scalargrad-core`.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};

// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks of scalar nodes.
//!
//! This module provides the `Optimizer` trait, the `ParamGroup` structure
//! holding per-group hyperparameters, stochastic gradient descent, and
//! learning rate schedulers.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

// Re-export key items for easier access
pub use lr_scheduler::{LRScheduler, StepLR};
pub use optimizer_trait::Optimizer;
pub use param_group::ParamGroup;
pub use sgd::SgdOptimizer;

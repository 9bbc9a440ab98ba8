use crate::value::Value;

/// A group of parameters sharing optimizer hyperparameters.
///
/// This allows applying different settings (like learning rate or weight
/// decay) to different parts of a model.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    /// Handles to the trainable leaves of this group.
    pub params: Vec<Value>,
    pub lr: f64,
    /// L2 penalty factor added to the gradient: `grad + weight_decay * value`.
    pub weight_decay: f64,
}

impl ParamGroup {
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        ParamGroup {
            params,
            lr,
            weight_decay: 0.0,
        }
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

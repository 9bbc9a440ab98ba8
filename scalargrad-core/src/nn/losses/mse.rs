// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the squared error loss between predictions and targets.
///
/// With [`Reduction::Sum`] the loss is \( \sum_i (\hat{y}_i - y_i)^2 \);
/// with [`Reduction::Mean`] it is divided by the number of pairs. The result
/// is a graph node, so calling `backward` on it reaches every prediction.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// # Errors
    /// - `InputSizeMismatch` if the slices differ in length.
    /// - `EmptyBatch` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        let mut total: Option<Value> = None;
        for (p, t) in predictions.iter().zip(targets) {
            let term = (p - t).pow(2.0)?;
            total = Some(match total {
                Some(acc) => &acc + &term,
                None => term,
            });
        }
        let total = total.ok_or_else(|| ScalarGradError::EmptyBatch {
            operation: "MSELoss::calculate".to_string(),
        })?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => total.div(predictions.len()),
        }
    }

    /// Same as [`MSELoss::calculate`] with plain-number targets.
    pub fn calculate_f64(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        let targets: Vec<Value> = targets.iter().map(|&y| Value::new(y)).collect();
        self.calculate(predictions, &targets)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

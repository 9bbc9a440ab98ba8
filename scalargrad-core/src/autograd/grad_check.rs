use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks the analytic gradients of `func` at `inputs` against centered finite differences.
///
/// `func` receives one fresh leaf per input and must build a graph whose root
/// it returns. It is called once for the analytic pass and twice per input for
/// the numerical estimate `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`.
/// A gradient passes when it is within `abs_tol` or within `rel_tol`
/// relative to the larger magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytic pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    let evaluate = |point: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = point.iter().map(|&x| Value::new(x)).collect();
        let out = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.value())
    };

    // --- 2. Numerical estimate, one input at a time ---
    let mut perturbed = inputs.to_vec();
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        perturbed[input_index] = inputs[input_index] + epsilon;
        let loss_plus = evaluate(&perturbed)?;
        perturbed[input_index] = inputs[input_index] - epsilon;
        let loss_minus = evaluate(&perturbed)?;
        perturbed[input_index] = inputs[input_index];

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        log::trace!(
            "check_grad: input {} analytical={} numerical={}",
            input_index,
            analytical_grad,
            numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

/// Computes the gradient of a plain function with central finite differences.
///
/// Returns `[df/dx_0, df/dx_1, ...]` at `point`.
pub fn finite_diff_grad<F>(f: F, point: &[f64], epsilon: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    let mut grads = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let f_plus = f(&perturbed);
        perturbed[i] = point[i] - epsilon;
        let f_minus = f(&perturbed);
        perturbed[i] = point[i];
        grads.push((f_plus - f_minus) / (2.0 * epsilon));
    }
    grads
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

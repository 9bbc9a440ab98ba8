use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_mse_sum() -> Result<(), ScalarGradError> {
    let preds = vec![Value::new(0.5), Value::new(-0.5)];
    let loss = MSELoss::new(Reduction::Sum).calculate_f64(&preds, &[1.0, -1.0])?;
    assert_relative_eq!(loss.value(), 0.5, epsilon = 1e-12);
    loss.backward()?;
    // d/dp (p - y)^2 = 2(p - y)
    assert_relative_eq!(preds[0].grad(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_mean() -> Result<(), ScalarGradError> {
    let preds = vec![Value::new(2.0), Value::new(0.0), Value::new(1.0), Value::new(3.0)];
    let loss = MSELoss::new(Reduction::Mean).calculate_f64(&preds, &[0.0, 0.0, 0.0, 0.0])?;
    assert_relative_eq!(loss.value(), 14.0 / 4.0, epsilon = 1e-12);
    loss.backward()?;
    assert_relative_eq!(preds[0].grad(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(preds[3].grad(), 1.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_targets_receive_gradient() -> Result<(), ScalarGradError> {
    let p = Value::new(3.0);
    let y = Value::new(1.0);
    let loss = MSELoss::default().calculate(&[p.clone()], &[y.clone()])?;
    loss.backward()?;
    assert_relative_eq!(p.grad(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(y.grad(), -4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_length_mismatch() {
    let preds = vec![Value::new(1.0)];
    let err = MSELoss::default().calculate_f64(&preds, &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        ScalarGradError::InputSizeMismatch { expected: 1, actual: 2, .. }
    ));
}

#[test]
fn test_mse_empty_batch() {
    let err = MSELoss::default().calculate_f64(&[], &[]).unwrap_err();
    assert!(matches!(err, ScalarGradError::EmptyBatch { .. }));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert_eq!(MSELoss::default().reduction(), Reduction::Sum);
}

#[test]
fn test_mse_grad_check() {
    let func = |v: &[Value]| MSELoss::new(Reduction::Mean).calculate_f64(v, &[0.3, -0.7, 1.1]);
    let result = check_grad(func, &[0.1, 0.2, -0.4], 1e-6, 1e-6, 1e-4);
    assert!(result.is_ok(), "MSE grad check failed: {:?}", result.err());
}

#[test]
fn test_mse_large_batch_is_dropped_cleanly() -> Result<(), ScalarGradError> {
    let n = 50_000;
    let preds: Vec<Value> = (0..n).map(|_| Value::new(1.0)).collect();
    let targets = vec![0.0; n];
    let loss = MSELoss::new(Reduction::Mean).calculate_f64(&preds, &targets)?;
    loss.backward()?;
    assert_relative_eq!(loss.value(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(preds[0].grad(), 2.0 / n as f64, epsilon = 1e-12);
    drop(loss);
    assert_eq!(preds[n - 1].value(), 1.0);
    Ok(())
}

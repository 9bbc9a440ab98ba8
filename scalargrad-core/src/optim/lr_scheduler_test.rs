use super::*;
use crate::optim::{ParamGroup, SgdOptimizer};
use crate::Value;
use approx::assert_relative_eq;

fn optimizer(lr: f64) -> SgdOptimizer {
    SgdOptimizer::new(vec![Value::new(1.0)], lr)
}

#[test]
fn test_step_lr_decays_every_step_size() -> Result<(), ScalarGradError> {
    let mut scheduler = StepLR::new(optimizer(1.0), 2, 0.5)?;
    scheduler.step()?;
    assert_relative_eq!(scheduler.get_last_lr()[0], 1.0);
    scheduler.step()?;
    assert_relative_eq!(scheduler.get_last_lr()[0], 0.5);
    scheduler.step()?;
    scheduler.step()?;
    assert_relative_eq!(scheduler.get_last_lr()[0], 0.25);
    assert_eq!(scheduler.last_epoch(), 4);
    assert_eq!(scheduler.base_lrs(), &[1.0]);
    Ok(())
}

#[test]
fn test_step_lr_every_step_matches_exponential_decay() -> Result<(), ScalarGradError> {
    let mut scheduler = StepLR::new(optimizer(0.05), 1, 0.99)?;
    for _ in 0..100 {
        scheduler.step()?;
    }
    assert_relative_eq!(
        scheduler.get_last_lr()[0],
        0.05 * 0.99f64.powi(100),
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn test_step_lr_applies_to_all_groups() -> Result<(), ScalarGradError> {
    let mut opt = optimizer(1.0);
    opt.add_param_group(ParamGroup::new(vec![Value::new(0.0)], 0.1));
    let mut scheduler = StepLR::new(opt, 1, 0.1)?;
    scheduler.step()?;
    let lrs = scheduler.get_last_lr();
    assert_relative_eq!(lrs[0], 0.1, epsilon = 1e-12);
    assert_relative_eq!(lrs[1], 0.01, epsilon = 1e-12);
    assert_eq!(scheduler.optimizer().param_groups().len(), 2);
    Ok(())
}

#[test]
fn test_step_lr_zero_step_size() {
    let err = StepLR::new(optimizer(1.0), 0, 0.5).unwrap_err();
    assert!(matches!(err, ScalarGradError::InvalidConfiguration(_)));
}

#[test]
fn test_step_lr_invalid_gamma() {
    assert!(StepLR::new(optimizer(1.0), 1, f64::NAN).is_err());
    assert!(StepLR::new(optimizer(1.0), 1, -0.5).is_err());
}

#[test]
fn test_step_lr_optimizer_mut_steps_parameters() -> Result<(), ScalarGradError> {
    let p = Value::new(1.0);
    let loss = p.mul(2.0)?;
    loss.backward()?;
    let mut scheduler = StepLR::new(SgdOptimizer::new(vec![p.clone()], 0.5), 1, 0.5)?;
    scheduler.optimizer_mut().step()?;
    assert_relative_eq!(p.value(), 0.0, epsilon = 1e-12);
    scheduler.step()?;
    let opt = scheduler.into_optimizer();
    assert_relative_eq!(opt.param_groups()[0].lr, 0.25, epsilon = 1e-12);
    Ok(())
}

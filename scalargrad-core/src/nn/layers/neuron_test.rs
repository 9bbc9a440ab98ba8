use super::*;
use crate::OpKind;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_creation() {
    let mut rng = StdRng::seed_from_u64(3);
    let neuron = Neuron::new(4, Activation::Tanh, &mut rng);
    assert_eq!(neuron.n_in(), 4);
    assert_eq!(neuron.num_parameters(), 5);
    for p in neuron.parameters() {
        assert!(p.is_leaf());
        assert!((-1.0..=1.0).contains(&p.value()));
    }
}

#[test]
fn test_neuron_forward_value() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_parameters(&[0.5, -1.0], 0.25, Activation::Linear);
    let out = neuron.forward_f64(&[2.0, 3.0])?;
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0].value(), 0.25 + 1.0 - 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_sum_starts_at_bias() {
    let neuron = Neuron::from_parameters(&[2.0], 1.0, Activation::Linear);
    let out = neuron.activate(&[Value::new(3.0)]).unwrap();
    // (b + w0*x0): the bias is the first operand of the outer add.
    assert_eq!(out.op_kind(), OpKind::Add);
    assert_eq!(out.operands()[0], *neuron.bias());
}

#[test]
fn test_neuron_tanh_backward() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_parameters(&[1.0], 0.0, Activation::Tanh);
    let x = Value::new(0.5);
    let out = neuron.activate(&[x.clone()])?;
    out.backward()?;
    let t = 0.5f64.tanh();
    let dt = 1.0 - t * t;
    assert_relative_eq!(neuron.weights()[0].grad(), dt * 0.5, epsilon = 1e-12);
    assert_relative_eq!(neuron.bias().grad(), dt, epsilon = 1e-12);
    assert_relative_eq!(x.grad(), dt, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_relu_dead_unit() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_parameters(&[1.0], -5.0, Activation::Relu);
    let out = neuron.activate(&[Value::new(1.0)])?;
    assert_eq!(out.value(), 0.0);
    out.backward()?;
    assert_eq!(neuron.weights()[0].grad(), 0.0);
    Ok(())
}

#[test]
fn test_neuron_input_size_mismatch() {
    let neuron = Neuron::from_parameters(&[1.0, 2.0], 0.0, Activation::Tanh);
    let err = neuron.forward_f64(&[1.0]).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_neuron_named_parameters() {
    let neuron = Neuron::from_parameters(&[1.0, 2.0], 3.0, Activation::Tanh);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
}

#[test]
fn test_neuron_zero_inputs() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_parameters(&[], 0.3, Activation::Linear);
    let out = neuron.forward(&[])?;
    assert_eq!(out[0].value(), 0.3);
    Ok(())
}

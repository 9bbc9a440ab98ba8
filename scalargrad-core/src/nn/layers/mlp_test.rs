use super::*;
use crate::autograd::grad_check::finite_diff_grad;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_mlp() -> Mlp {
    let mut rng = StdRng::seed_from_u64(42);
    Mlp::new(3, &[4, 4, 1], &mut rng).unwrap()
}

#[test]
fn test_mlp_structure() {
    let mlp = seeded_mlp();
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.n_in(), 3);
    assert_eq!(mlp.n_out(), 1);
    // 4*(3+1) + 4*(4+1) + 1*(4+1)
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(mlp.to_string(), "3 X 4\n4 X 4\n4 X 1");
}

#[test]
fn test_mlp_output_in_tanh_range() -> Result<(), ScalarGradError> {
    let mlp = seeded_mlp();
    let out = mlp.forward_f64(&[2.0, 3.0, -1.0])?;
    assert_eq!(out.len(), 1);
    assert!(out[0].value() > -1.0 && out[0].value() < 1.0);
    Ok(())
}

#[test]
fn test_mlp_same_seed_same_network() {
    let a = seeded_mlp();
    let b = seeded_mlp();
    let va: Vec<f64> = a.parameters().iter().map(Value::value).collect();
    let vb: Vec<f64> = b.parameters().iter().map(Value::value).collect();
    assert_eq!(va, vb);
}

#[test]
fn test_mlp_output_activation_override() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(5);
    let mlp = Mlp::with_activations(2, &[3, 1], Activation::Relu, Activation::Linear, &mut rng)?;
    assert_eq!(mlp.layers()[0].neurons()[0].activation(), Activation::Relu);
    assert_eq!(mlp.layers()[1].neurons()[0].activation(), Activation::Linear);
    Ok(())
}

#[test]
fn test_mlp_invalid_sizes() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(3, &[], &mut rng),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Mlp::new(3, &[4, 0, 1], &mut rng),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_mlp_input_size_mismatch() {
    let mlp = seeded_mlp();
    let err = mlp.forward_f64(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        ScalarGradError::InputSizeMismatch { expected: 3, actual: 2, .. }
    ));
}

#[test]
fn test_mlp_parameter_gradients_match_finite_differences() -> Result<(), ScalarGradError> {
    let mlp = seeded_mlp();
    let x = [0.5, -1.0, 2.0];
    let out = mlp.forward_f64(&x)?;
    out[0].backward()?;

    let params = mlp.parameters();
    let point: Vec<f64> = params.iter().map(Value::value).collect();
    let numeric = finite_diff_grad(
        |p: &[f64]| {
            for (param, &v) in params.iter().zip(p) {
                param.set_value(v);
            }
            mlp.forward_f64(&x).map(|o| o[0].value()).unwrap_or(f64::NAN)
        },
        &point,
        1e-6,
    );
    for (param, expected) in params.iter().zip(numeric) {
        assert_relative_eq!(param.grad(), expected, epsilon = 1e-6, max_relative = 1e-4);
    }
    Ok(())
}

#[test]
fn test_mlp_named_parameters_are_hierarchical() {
    let mlp = seeded_mlp();
    let named = mlp.named_parameters();
    assert_eq!(named.len(), 41);
    assert_eq!(named[0].0, "layers.0.neurons.0.weight.0");
    assert_eq!(named[40].0, "layers.2.neurons.0.bias");
}

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_is_unit_uniform() {
    let mut rng = StdRng::seed_from_u64(0);
    let init = Initializer::default();
    for _ in 0..1_000 {
        let x = init.sample(&mut rng);
        assert!((-1.0..=1.0).contains(&x), "sample {} out of [-1, 1]", x);
    }
}

#[test]
fn test_uniform_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let init = Initializer::uniform(2.0, 3.0).unwrap();
    let values = init.values(200, &mut rng);
    assert_eq!(values.len(), 200);
    for v in &values {
        assert!(v.is_leaf());
        assert!((2.0..=3.0).contains(&v.value()));
        assert_eq!(v.grad(), 0.0);
    }
}

#[test]
fn test_uniform_invalid_bounds() {
    assert!(matches!(
        Initializer::uniform(1.0, -1.0),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(Initializer::uniform(f64::NEG_INFINITY, 0.0).is_err());
    assert!(Initializer::uniform(0.5, 0.5).is_ok());
}

#[test]
fn test_normal_sample_statistics() {
    let mut rng = StdRng::seed_from_u64(7);
    let init = Initializer::normal(0.5, 0.1).unwrap();
    let n = 5_000;
    let mean = (0..n).map(|_| init.sample(&mut rng)).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "sample mean {}", mean);
}

#[test]
fn test_normal_invalid_std() {
    assert!(matches!(
        Initializer::normal(0.0, -1.0),
        Err(ScalarGradError::InvalidConfiguration(_))
    ));
    assert!(Initializer::normal(f64::NAN, 1.0).is_err());
}

#[test]
fn test_seeded_initialization_is_reproducible() {
    let init = Initializer::default();
    let a: Vec<f64> = init
        .values(5, &mut StdRng::seed_from_u64(42))
        .iter()
        .map(Value::value)
        .collect();
    let b: Vec<f64> = init
        .values(5, &mut StdRng::seed_from_u64(42))
        .iter()
        .map(Value::value)
        .collect();
    assert_eq!(a, b);
}

use scalargrad_core::train::Sample;
use scalargrad_core::Value;

// Installs the logger once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Creates a labeled leaf.
#[allow(dead_code)]
pub(crate) fn leaf(value: f64, label: &str) -> Value {
    Value::with_label(value, label)
}

// The four-sample, three-feature dataset with targets [1, -1, -1, 1].
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> Vec<Sample> {
    vec![
        (vec![2.0, 3.0, -1.0], vec![1.0]),
        (vec![3.0, -1.0, 0.5], vec![-1.0]),
        (vec![0.5, 1.0, 1.0], vec![-1.0]),
        (vec![1.0, 1.0, -1.0], vec![1.0]),
    ]
}

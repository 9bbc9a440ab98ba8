use scalargrad_core::train::Sample;
use scalargrad_data::VecDataset;

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// The four-sample, three-feature dataset with targets [1, -1, -1, 1].
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> VecDataset<Sample> {
    VecDataset::new(vec![
        (vec![2.0, 3.0, -1.0], vec![1.0]),
        (vec![3.0, -1.0, 0.5], vec![-1.0]),
        (vec![0.5, 1.0, 1.0], vec![-1.0]),
        (vec![1.0, 1.0, -1.0], vec![1.0]),
    ])
}

//! Trains a small MLP on the four-sample toy dataset and prints the loss of
//! every epoch.
//!
//! Run with `cargo run -p scalargrad-data --example train_mlp`.
//! Set `RUST_LOG=debug` to also see optimizer and scheduler logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{MSELoss, Mlp, Module, Reduction};
use scalargrad_core::optim::{LRScheduler, SgdOptimizer, StepLR};
use scalargrad_core::train::{train_step, Sample, TrainingConfig};
use scalargrad_core::ScalarGradError;
use scalargrad_data::{DataLoader, Dataset, SequentialSampler, VecDataset};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let samples: Vec<Sample> = vec![
        (vec![2.0, 3.0, -1.0], vec![1.0]),
        (vec![3.0, -1.0, 0.5], vec![-1.0]),
        (vec![0.5, 1.0, 1.0], vec![-1.0]),
        (vec![1.0, 1.0, -1.0], vec![1.0]),
    ];
    let dataset = VecDataset::new(samples);
    let batch_size = dataset.len();

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("{}", mlp);
    println!("{} parameters", mlp.num_parameters());

    let config = TrainingConfig::default();
    let loss_fn = MSELoss::new(Reduction::Sum);
    let optimizer = SgdOptimizer::new(mlp.parameters(), config.learning_rate);
    let mut scheduler = StepLR::new(optimizer, 1, config.lr_decay)?;
    let mut loader = DataLoader::new(dataset, batch_size, SequentialSampler::new(), false)?;

    for epoch in 0..config.epochs {
        loader.reset();
        let mut epoch_loss = 0.0;
        for batch in loader.by_ref() {
            epoch_loss += train_step(&mlp, &loss_fn, scheduler.optimizer_mut(), &batch?)?;
        }
        scheduler.step()?;
        println!("epoch {:3}  loss {:.6}", epoch, epoch_loss);
    }

    for (x, y) in loader.dataset().as_slice() {
        let prediction = mlp.forward_f64(x)?;
        println!("{:?} -> {:+.4} (target {:+.1})", x, prediction[0].value(), y[0]);
    }
    Ok(())
}

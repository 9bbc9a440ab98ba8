// scalargrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
///
/// Without a seed every pass draws a fresh order from the thread-local
/// generator. With [`RandomSampler::with_seed`] every pass repeats the same
/// order.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn draw<R: Rng>(&self, rng: &mut R, dataset_len: usize) -> Vec<usize> {
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(actual_num_samples);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && actual_num_samples > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                actual_num_samples,
                dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let indices = match self.seed {
            Some(seed) => self.draw(&mut StdRng::seed_from_u64(seed), dataset_len),
            None => self.draw(&mut rand::thread_rng(), dataset_len),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && actual_num_samples > dataset_len) {
            return 0;
        }
        actual_num_samples
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;

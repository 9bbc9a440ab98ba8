// dataloader.rs
//! # DataLoader
//!
//! Groups the samples of a [`Dataset`] into batches, in the order chosen by
//! a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::VecDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use scalargrad_core::ScalarGradError;

/// Batching iterator over a dataset.
///
/// Iterating yields `Result<Vec<Item>, ScalarGradError>` batches of
/// `batch_size` items (the last one may be shorter unless `drop_last`).
/// Once exhausted, [`DataLoader::reset`] starts a new epoch, asking the
/// sampler for a fresh index order.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader positioned at the start of an epoch.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `batch_size` is 0.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "DataLoader: batch_size must be greater than zero".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Starts a new epoch.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches in one full epoch.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, ScalarGradError>;

    /// Returns the next batch, or `None` at the end of the epoch.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

impl<D: Dataset, S: Sampler> std::fmt::Debug for DataLoader<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("dataset_len", &self.dataset.len())
            .field("batch_size", &self.batch_size)
            .field("sampler", &self.sampler)
            .field("drop_last", &self.drop_last)
            .finish()
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;

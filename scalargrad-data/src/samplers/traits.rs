// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// to fetch data from a `Dataset`. Each call to [`Sampler::iter`] starts a
/// new pass (epoch).
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over indices in `0..dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices one pass of [`Sampler::iter`] yields.
    ///
    /// This might differ from `dataset_len`, for samplers that draw a fixed
    /// number of samples or sample with replacement.
    fn len(&self, dataset_len: usize) -> usize;
}

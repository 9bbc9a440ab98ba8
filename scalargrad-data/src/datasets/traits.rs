use scalargrad_core::ScalarGradError;

/// Trait representing a dataset.
///
/// A dataset provides access to individual samples (e.g. input features and
/// the corresponding targets) by index.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// `ScalarGradError::IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

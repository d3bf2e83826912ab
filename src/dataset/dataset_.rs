use super::LabeledSample;
use crate::common::*;

/// The dataset that can be random accessed.
///
/// This is the whole surface a training harness consumes: a record count
/// and a per-index sample lookup.
pub trait RandomAccessDataset
where
    Self: Debug + Send,
{
    /// Get number of records in the dataset.
    fn num_records(&self) -> usize;

    /// Get the nth record in the dataset.
    fn nth(&self, index: usize) -> Result<LabeledSample>;
}

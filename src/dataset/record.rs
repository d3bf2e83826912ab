use crate::common::*;

/// The result of one indexed access: a transformed image paired with its
/// dense integer label. Computed fresh on every access, never memoized.
#[derive(Debug)]
pub struct LabeledSample {
    pub image: Tensor,
    pub label: usize,
}

//! Dataset loading toolkit.

mod annotation;
mod dataset_;
mod labeled;
mod record;

pub use annotation::*;
pub use dataset_::*;
pub use labeled::*;
pub use record::*;

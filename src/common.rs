pub use crate::error::{Error, Result};
pub use anyhow::ensure;
pub use indexmap::IndexSet;
pub use itertools::Itertools as _;
pub use log::info;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};
pub use tch::{vision, Kind, Tensor};

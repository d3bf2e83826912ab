//! Dataset configuration format.

use crate::{common::*, dataset::LabeledImageDataset, transform::Transform};

/// On-disk dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The space-delimited annotation file.
    pub annotation_file: PathBuf,
    /// The directory `file_name` values are resolved against.
    pub image_dir: PathBuf,
}

impl DatasetConfig {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }

    /// Build the dataset described by this configuration.
    pub fn load<T>(&self, transform: T) -> Result<LabeledImageDataset<T>>
    where
        T: Transform,
    {
        LabeledImageDataset::open(&self.annotation_file, &self.image_dir, transform)
    }
}

use super::{build_label_index, load_annotation_file, AnnotationRecord};
use super::{LabeledSample, RandomAccessDataset};
use crate::{common::*, transform::Transform};

/// The dataset described by a space-delimited annotation file.
///
/// Construction reads the whole annotation table into memory and derives
/// the label index; image files are only touched on indexed access. All
/// state is read-only after construction.
#[derive(Debug)]
pub struct LabeledImageDataset<T>
where
    T: Transform,
{
    image_dir: PathBuf,
    records: Vec<AnnotationRecord>,
    classes: IndexSet<String>,
    transform: T,
}

impl<T> LabeledImageDataset<T>
where
    T: Transform,
{
    /// Parse the annotation file and build the label index. `file_name`
    /// values are later resolved relative to `image_dir`.
    pub fn open(
        annotation_file: impl AsRef<Path>,
        image_dir: impl AsRef<Path>,
        transform: T,
    ) -> Result<Self> {
        let annotation_file = annotation_file.as_ref();
        let image_dir = image_dir.as_ref();

        let records = load_annotation_file(annotation_file)?;
        let classes = build_label_index(&records);

        info!(
            "loaded {} samples with {} distinct labels from '{}'",
            records.len(),
            classes.len(),
            annotation_file.display()
        );

        Ok(Self {
            image_dir: image_dir.to_owned(),
            records,
            classes,
            transform,
        })
    }

    /// Load, decode, and transform the image at `index`, paired with its
    /// integer label.
    pub fn nth(&self, index: usize) -> Result<LabeledSample> {
        let record = self.records.get(index).ok_or(Error::InvalidIndex {
            index,
            len: self.records.len(),
        })?;

        let path = self.image_dir.join(&record.file_name);
        let image = load_image(&path)?;
        let image = self
            .transform
            .apply(image)
            .map_err(|source| Error::Transform {
                path: path.clone(),
                source,
            })?;
        let label = self
            .classes
            .get_index_of(record.logo.as_str())
            .ok_or_else(|| Error::UnknownLabel {
                label: record.logo.clone(),
            })?;

        Ok(LabeledSample { image, label })
    }

    /// The distinct labels in first-seen order. A label's position is its
    /// integer class index.
    pub fn classes(&self) -> &IndexSet<String> {
        &self.classes
    }

    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> RandomAccessDataset for LabeledImageDataset<T>
where
    T: Transform + Debug + Send,
{
    fn num_records(&self) -> usize {
        self.records.len()
    }

    fn nth(&self, index: usize) -> Result<LabeledSample> {
        LabeledImageDataset::nth(self, index)
    }
}

/// Read and decode one image into a CHW u8 tensor.
///
/// The file handle lives only for the duration of the read, so repeated
/// accesses over a large index range do not accumulate descriptors.
fn load_image(path: &Path) -> Result<Tensor> {
    let bytes = fs::read(path).map_err(|source| Error::ImageIo {
        path: path.to_owned(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| Error::DecodeImage {
        path: path.to_owned(),
        source,
    })?;

    let image = image.into_rgb8();
    let (width, height) = image.dimensions();
    let tensor = Tensor::of_slice(&image.into_raw())
        .view([height as i64, width as i64, 3])
        .permute(&[2, 0, 1]);
    Ok(tensor)
}

//! Failure modes of dataset construction and indexed access.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The annotation file is missing or unreadable. Fatal to construction.
    #[error("failed to read annotation file '{}'", path.display())]
    ReadAnnotations {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row does not have exactly 8 whitespace-delimited fields. Blank
    /// lines count as zero fields. Fatal to construction.
    #[error("malformed row at line {line} of '{}': expected 8 fields, found {found}", path.display())]
    MalformedAnnotation {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// An image file is missing or unreadable at access time. Other
    /// indices stay valid.
    #[error("failed to read image file '{}'", path.display())]
    ImageIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The image bytes are not a decodable image.
    #[error("failed to decode image file '{}'", path.display())]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid index {index} for dataset of {len} records")]
    InvalidIndex { index: usize, len: usize },

    /// The label is absent from the label index. The index is derived from
    /// the same table at construction, so this cannot occur unless the
    /// table is tampered with afterwards.
    #[error("label '{label}' is not in the label index")]
    UnknownLabel { label: String },

    /// The caller-supplied transform failed. The source error is forwarded
    /// unchanged.
    #[error("transform failed on image '{}'", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

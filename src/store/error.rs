use std::path::PathBuf;
use thiserror::Error;

use super::PhotoId;

/// Failures inside the photo store.
///
/// The public store API swallows all of these; they exist so the fallible
/// `try_*` methods can tell a missing photo from a damaged one.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No stored photo for {0}")]
    NotFound(PhotoId),

    #[error("Stored photo at {path} could not be decoded: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to encode image as JPEG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

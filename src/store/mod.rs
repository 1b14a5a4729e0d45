//! Best-effort persistence of gallery and profile photos.
//!
//! Each photo lives in its own JPEG file whose name is derived purely from
//! its [`PhotoId`]. There is no index or manifest: the directory listing is
//! the only record of which photos exist.
//!
//! The plain API (`save`, `load`, `delete`, ...) never reports failure. A
//! failed save is a no-op and a missing or unreadable photo loads as `None`.
//! The `try_*` variants expose the underlying [`StoreError`] for callers that
//! need to tell the cases apart. Absorbed failures only show up as `trace`
//! events.

pub mod codec;
pub mod error;
pub mod identity;

use image::DynamicImage;
use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::config::StoreConfig;

pub use codec::DEFAULT_QUALITY;
pub use error::{Result, StoreError};
pub use identity::{FileNaming, PhotoId, StandardNaming};

/// Grid of loaded photos indexed `[tab][slot]`.
pub type PhotoGrid = Vec<Vec<Option<DynamicImage>>>;

/// Stores photos under a single private directory.
pub struct PhotoStore<N: FileNaming = StandardNaming> {
    root: PathBuf,
    naming: N,
    quality: u8,
}

impl PhotoStore<StandardNaming> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_naming(root, StandardNaming)
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone()).with_quality(config.quality)
    }
}

impl<N: FileNaming> PhotoStore<N> {
    pub fn with_naming(root: impl Into<PathBuf>, naming: N) -> Self {
        Self {
            root: root.into(),
            naming,
            quality: DEFAULT_QUALITY,
        }
    }

    /// Override the JPEG quality (1-100) used by subsequent saves.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Deterministic location of the file backing `id`.
    pub fn path_for(&self, id: PhotoId) -> PathBuf {
        self.root.join(self.naming.file_name(id))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))?;
        }
        Ok(())
    }

    // === Grid and profile photos ===

    /// Persist `image` for `id`, replacing any earlier photo. Failures are ignored.
    pub fn save(&self, id: PhotoId, image: &DynamicImage) {
        if let Err(e) = self.try_save(id, image) {
            trace!("Discarding photo for {}: {}", id, e);
        }
    }

    /// Load the photo for `id`, or `None` if it is missing or unreadable.
    pub fn load(&self, id: PhotoId) -> Option<DynamicImage> {
        match self.try_load(id) {
            Ok(image) => Some(image),
            Err(StoreError::NotFound(_)) => None,
            Err(e) => {
                trace!("Treating photo for {} as absent: {}", id, e);
                None
            }
        }
    }

    /// Remove the photo for `id`. Removing a photo that does not exist is fine.
    pub fn delete(&self, id: PhotoId) {
        if let Err(e) = self.try_delete(id) {
            trace!("Could not delete photo for {}: {}", id, e);
        }
    }

    /// Load every cell of a `tab_count` x `slots_per_tab` grid.
    pub fn load_all(&self, tab_count: usize, slots_per_tab: usize) -> PhotoGrid {
        (0..tab_count)
            .into_par_iter()
            .map(|tab| {
                (0..slots_per_tab)
                    .into_par_iter()
                    .map(|slot| self.load(PhotoId::slot(tab, slot)))
                    .collect()
            })
            .collect()
    }

    pub fn save_profile_photo(&self, image: &DynamicImage) {
        self.save(PhotoId::Profile, image);
    }

    pub fn load_profile_photo(&self) -> Option<DynamicImage> {
        self.load(PhotoId::Profile)
    }

    // === Fallible variants ===

    pub fn try_save(&self, id: PhotoId, image: &DynamicImage) -> Result<()> {
        let bytes = codec::encode_jpeg(image, self.quality)?;

        self.ensure_root()?;
        let path = self.path_for(id);
        fs::write(&path, &bytes).map_err(|e| StoreError::io(&path, e))?;

        trace!("Saved {} ({} bytes) to {:?}", id, bytes.len(), path);
        Ok(())
    }

    pub fn try_load(&self, id: PhotoId) -> Result<DynamicImage> {
        let path = self.path_for(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound(id)),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        codec::decode(&bytes).map_err(|source| StoreError::Corrupt { path, source })
    }

    /// Returns whether a file was actually removed.
    pub fn try_delete(&self, id: PhotoId) -> Result<bool> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                trace!("Deleted {} at {:?}", id, path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    // === Enumeration ===

    /// Identities with a file present, sorted with grid slots first.
    ///
    /// Files the naming does not recognise are skipped. Presence says nothing
    /// about whether the file decodes.
    pub fn stored_ids(&self) -> Vec<PhotoId> {
        let entries = match fs::read_dir(&self.root) {
            Ok(e) => e,
            Err(_) => return Vec::new(),
        };

        let mut ids: Vec<PhotoId> = entries
            .flatten()
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let name = entry.file_name();
                self.naming.parse(&name.to_string_lossy())
            })
            .collect();

        ids.sort();
        ids
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.path_for(id).is_file()
    }
}

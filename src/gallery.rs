//! In-memory state behind the photo tabs and the profile card.
//!
//! Screens hold one of these, call `refresh` whenever they appear, and route
//! picked images through `assign` so the on-screen cell updates at once and
//! the photo is written to the store.

use image::DynamicImage;

use crate::config::GalleryConfig;
use crate::store::{FileNaming, PhotoGrid, PhotoId, PhotoStore};

/// Tabbed grid of photo slots.
pub struct Gallery {
    tab_titles: Vec<String>,
    slots_per_tab: usize,
    selected_tab: usize,
    photos: PhotoGrid,
}

impl Gallery {
    pub fn new(config: &GalleryConfig) -> Self {
        let tab_count = config.tab_titles.len();
        Self {
            tab_titles: config.tab_titles.clone(),
            slots_per_tab: config.slots_per_tab,
            selected_tab: 0,
            photos: empty_grid(tab_count, config.slots_per_tab),
        }
    }

    pub fn tab_titles(&self) -> &[String] {
        &self.tab_titles
    }

    pub fn tab_count(&self) -> usize {
        self.tab_titles.len()
    }

    pub fn slots_per_tab(&self) -> usize {
        self.slots_per_tab
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    /// Switch tabs. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, tab: usize) {
        if tab < self.tab_count() {
            self.selected_tab = tab;
        }
    }

    /// Re-read every cell from the store.
    pub fn refresh<N: FileNaming>(&mut self, store: &PhotoStore<N>) {
        self.photos = store.load_all(self.tab_count(), self.slots_per_tab);
    }

    pub fn photo(&self, tab: usize, slot: usize) -> Option<&DynamicImage> {
        self.photos.get(tab)?.get(slot)?.as_ref()
    }

    /// Cells of the selected tab in slot order.
    pub fn current_slots(&self) -> &[Option<DynamicImage>] {
        self.photos
            .get(self.selected_tab)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Place a picked image into `slot` of the selected tab and persist it.
    ///
    /// Targets outside the grid are ignored and nothing is written.
    pub fn assign<N: FileNaming>(&mut self, store: &PhotoStore<N>, slot: usize, image: DynamicImage) {
        let tab = self.selected_tab;
        let Some(cell) = self.photos.get_mut(tab).and_then(|row| row.get_mut(slot)) else {
            return;
        };
        store.save(PhotoId::slot(tab, slot), &image);
        *cell = Some(image);
    }

    /// Empty `slot` of the selected tab and remove its stored photo.
    pub fn clear<N: FileNaming>(&mut self, store: &PhotoStore<N>, slot: usize) {
        let tab = self.selected_tab;
        let Some(cell) = self.photos.get_mut(tab).and_then(|row| row.get_mut(slot)) else {
            return;
        };
        store.delete(PhotoId::slot(tab, slot));
        *cell = None;
    }

    pub fn slot_label(slot: usize) -> String {
        format!("Photo {}", slot + 1)
    }

    pub fn filled_count(&self) -> usize {
        self.photos.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

fn empty_grid(tab_count: usize, slots_per_tab: usize) -> PhotoGrid {
    (0..tab_count)
        .map(|_| (0..slots_per_tab).map(|_| None).collect())
        .collect()
}

/// Profile photo shown on the about page.
#[derive(Default)]
pub struct ProfileCard {
    image: Option<DynamicImage>,
}

impl ProfileCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh<N: FileNaming>(&mut self, store: &PhotoStore<N>) {
        self.image = store.load_profile_photo();
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn assign<N: FileNaming>(&mut self, store: &PhotoStore<N>, image: DynamicImage) {
        store.save_profile_photo(&image);
        self.image = Some(image);
    }
}

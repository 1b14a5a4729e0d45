//! Logical photo identities and their mapping onto file names.

use std::fmt;

const PROFILE_FILE_NAME: &str = "profile_photo.jpg";

/// Key addressing one stored photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhotoId {
    /// A cell in the tabbed gallery grid.
    Slot { tab: usize, slot: usize },
    /// The single profile photo shown on the about page.
    Profile,
}

impl PhotoId {
    pub fn slot(tab: usize, slot: usize) -> Self {
        PhotoId::Slot { tab, slot }
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoId::Slot { tab, slot } => write!(f, "tab {} slot {}", tab, slot),
            PhotoId::Profile => write!(f, "profile"),
        }
    }
}

/// Pure mapping between identities and file names inside the store directory.
///
/// Implementations must be a bijection over the identities they accept:
/// `parse(&file_name(id)) == Some(id)`, and distinct ids never share a name.
pub trait FileNaming: Send + Sync {
    fn file_name(&self, id: PhotoId) -> String;

    /// Recover the identity a file name belongs to, or `None` for foreign files.
    fn parse(&self, file_name: &str) -> Option<PhotoId>;
}

/// `tab_{tab}_slot_{slot}.jpg` for grid cells, `profile_photo.jpg` for the profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNaming;

impl FileNaming for StandardNaming {
    fn file_name(&self, id: PhotoId) -> String {
        match id {
            PhotoId::Slot { tab, slot } => format!("tab_{}_slot_{}.jpg", tab, slot),
            PhotoId::Profile => PROFILE_FILE_NAME.to_string(),
        }
    }

    fn parse(&self, file_name: &str) -> Option<PhotoId> {
        if file_name == PROFILE_FILE_NAME {
            return Some(PhotoId::Profile);
        }

        let inner = file_name.strip_prefix("tab_")?.strip_suffix(".jpg")?;
        let (tab, slot) = inner.split_once("_slot_")?;

        Some(PhotoId::Slot {
            tab: parse_index(tab)?,
            slot: parse_index(slot)?,
        })
    }
}

/// Only canonical decimal forms map back, so "01" and "+1" never alias "1".
fn parse_index(s: &str) -> Option<usize> {
    let value: usize = s.parse().ok()?;
    if value.to_string() == s {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_file_names() {
        let naming = StandardNaming;
        assert_eq!(naming.file_name(PhotoId::slot(2, 3)), "tab_2_slot_3.jpg");
        assert_eq!(naming.file_name(PhotoId::slot(0, 0)), "tab_0_slot_0.jpg");
        assert_eq!(naming.file_name(PhotoId::Profile), "profile_photo.jpg");
    }

    #[test]
    fn test_names_are_unique_across_grid() {
        let naming = StandardNaming;
        let mut names = HashSet::new();
        for tab in 0..12 {
            for slot in 0..12 {
                let name = naming.file_name(PhotoId::slot(tab, slot));
                assert_eq!(naming.parse(&name), Some(PhotoId::slot(tab, slot)));
                assert!(names.insert(name));
            }
        }
        assert!(names.insert(naming.file_name(PhotoId::Profile)));
        assert_eq!(naming.parse("profile_photo.jpg"), Some(PhotoId::Profile));
    }

    #[test]
    fn test_parse_rejects_foreign_names() {
        let naming = StandardNaming;
        assert_eq!(naming.parse("tab_01_slot_2.jpg"), None);
        assert_eq!(naming.parse("tab_1_slot_+2.jpg"), None);
        assert_eq!(naming.parse("tab_1_slot_2.png"), None);
        assert_eq!(naming.parse("tab__slot_2.jpg"), None);
        assert_eq!(naming.parse("tab_1_slot_2_slot_3.jpg"), None);
        assert_eq!(naming.parse("notes.txt"), None);
        assert_eq!(naming.parse("profile_photo.jpeg"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PhotoId::slot(1, 4).to_string(), "tab 1 slot 4");
        assert_eq!(PhotoId::Profile.to_string(), "profile");
    }
}

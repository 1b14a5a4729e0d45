//! Photo persistence for the portfolio app.
//!
//! [`store::PhotoStore`] keeps the gallery grid and profile photo as JPEG
//! files in a private directory; [`gallery`] holds the screen-side state that
//! drives it.

pub mod config;
pub mod gallery;
pub mod logging;
pub mod store;

pub use config::Config;
pub use gallery::{Gallery, ProfileCard};
pub use store::{PhotoId, PhotoStore, StoreError};

//! Domain types for the portfolio gallery.
//!
//! - [`GalleryItem`], [`MediaType`], [`ItemLayout`] - Parsed feed entries
//! - [`MediaKind`], [`MediaAsset`] - Per-asset classification and URLs
//! - [`Category`] - The fixed filter categories

mod category;
mod item;
mod media;

pub use category::Category;
pub use item::{DEFAULT_ASPECT_RATIO, GalleryItem, ItemLayout, MediaType};
pub use media::{
    IMAGE_SUFFIXES, MediaAsset, MediaKind, STREAM_SUFFIX, STREAM_URL_TEMPLATE, URL_PREFIX,
    is_stream_url, resolve_media_url,
};

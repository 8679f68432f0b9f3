//! Portfolio gallery.
//!
//! - [`Gallery`] - Loading placeholder, then the filtered entries
//! - `GalleryEntry` - One item: media, title, category badge, description
//! - `use_feed_loader` - Loads the feed once per mount

mod entry;
mod gallery;
mod hook;

pub use gallery::Gallery;

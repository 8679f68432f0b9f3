//! Core logic for the folio portfolio site.
//!
//! Everything here is independent of the browser so it can be tested on the
//! host:
//!
//! - [`models`] - Gallery items, media classification, categories
//! - [`feed`] - XML feed parsing, fetch-with-retry, loading state
//! - [`filter`] - Category selection and the visible-item filter
//! - [`carousel`] - Looping slide navigation
//! - [`playback`] - Visibility-driven play/pause decisions
//! - [`error`] - Fetch and feed error types

pub mod carousel;
pub mod error;
pub mod feed;
pub mod filter;
pub mod models;
pub mod playback;

pub use carousel::CarouselState;
pub use error::{FeedError, FetchError};
pub use feed::{FeedSource, FeedState, LoadTicket, RetryPolicy, load_feed, parse_feed};
pub use filter::{Selection, filter_items};
pub use models::{Category, GalleryItem, ItemLayout, MediaAsset, MediaKind, MediaType};
pub use playback::{PlaybackCommand, PlaybackGate};

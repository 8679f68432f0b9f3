//! Feed loading: parsing, retry, and the loading state slot.
//!
//! - [`parse_feed`] - XML document to [`GalleryItem`](crate::models::GalleryItem)s
//! - [`load_feed`] - Fetch through a [`FeedSource`] with [`RetryPolicy`], then parse
//! - [`FeedState`] - Items, loading flag, and stale-response guard

mod loader;
mod parser;
mod retry;
mod state;

pub use loader::{FeedSource, load_feed};
pub use parser::parse_feed;
pub use retry::RetryPolicy;
pub use state::{FeedState, LoadTicket};

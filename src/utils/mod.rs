//! Browser utilities.
//!
//! Provides:
//! - [`fetch_portfolio`] - Feed loading over the Fetch API with timeout and retry
//! - [`media`] - Idempotent play/pause for video elements
//! - [`hls`] - hls.js attachment for stream URLs

mod fetch;
pub mod hls;
pub mod media;

pub use fetch::fetch_portfolio;

//! Error types for feed loading.
//!
//! - [`FetchError`] - transport failures while retrieving the feed body
//! - [`FeedError`] - anything that prevents a feed from becoming gallery items
//!
//! Both are `Clone` so they can live inside reactive state.

use thiserror::Error;

/// Network/fetch-related errors for the feed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Server-side (5xx) statuses, timeouts and network failures are
    /// transient. Client errors and unreadable bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::Timeout => true,
            Self::HttpError(status) => *status >= 500,
            Self::NoWindow
            | Self::RequestCreationFailed
            | Self::ResponseReadFailed
            | Self::InvalidContent => false,
        }
    }
}

/// Reasons a feed could not be turned into gallery items.
///
/// Item indices are zero-based positions of `<item>` elements in document
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The feed could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The body is not well-formed XML.
    #[error("Malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },
    /// The body contains no root element at all.
    #[error("Feed has no root element")]
    NoRootElement,
    /// A required child element is absent from an item.
    #[error("Item {item}: missing <{element}> element")]
    MissingElement { item: usize, element: &'static str },
    /// The `<media>` text is not a JSON array of strings.
    #[error("Item {item}: invalid media list: {message}")]
    MediaJson { item: usize, message: String },
}

impl FeedError {
    /// Whether the failure happened before a body was received.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_retryable())
    }
}

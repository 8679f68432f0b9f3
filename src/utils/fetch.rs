//! Network fetching utilities with timeout support.
//!
//! Provides the browser [`FeedSource`] used to load the portfolio feed.

use std::time::Duration;

use folio_core::{FeedError, FeedSource, FetchError, GalleryItem, load_feed};
use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{FEED_URL, FETCH_TIMEOUT_MS, feed_retry_policy};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text from a URL using the Fetch API with timeout.
///
/// If the request takes longer than `FETCH_TIMEOUT_MS`, returns
/// `FetchError::Timeout`.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}

// =============================================================================
// Feed Source
// =============================================================================

/// Feed source backed by the browser Fetch API.
#[derive(Debug, Clone, Copy)]
pub struct HttpFeedSource {
    url: &'static str,
}

impl HttpFeedSource {
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new(FEED_URL)
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        fetch_text(self.url).await
    }
}

/// Load and parse the portfolio feed with the configured retry policy.
///
/// Retrying stops as soon as `is_current` reports that the result is no
/// longer wanted.
pub async fn fetch_portfolio(
    is_current: impl Fn() -> bool,
) -> Result<Vec<GalleryItem>, FeedError> {
    load_feed(
        &HttpFeedSource::default(),
        feed_retry_policy(),
        |delay: Duration| {
            web_sys::console::log_1(
                &format!("Portfolio feed unavailable, retrying in {} ms", delay.as_millis())
                    .into(),
            );
            gloo_timers::future::sleep(delay)
        },
        is_current,
    )
    .await
}

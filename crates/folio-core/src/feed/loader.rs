//! Fetch-then-parse pipeline for the feed.

use std::future::Future;
use std::time::Duration;

use super::parse_feed;
use super::retry::RetryPolicy;
use crate::error::{FeedError, FetchError};
use crate::models::GalleryItem;

/// Something that can retrieve the raw feed document.
///
/// The browser implementation issues a single `GET`; tests script responses.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetch the feed, retrying transient failures, then parse it.
///
/// `sleep` is awaited between attempts with the backoff delay, which keeps
/// this function independent of any particular timer. Parse failures are
/// returned immediately since the same body would fail again.
///
/// `is_current` is checked around every backoff; once it returns `false`
/// nobody is waiting for the result, so the last fetch error is returned
/// without further attempts.
pub async fn load_feed<S, F, Fut, C>(
    source: &S,
    policy: RetryPolicy,
    mut sleep: F,
    is_current: C,
) -> Result<Vec<GalleryItem>, FeedError>
where
    S: FeedSource,
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    C: Fn() -> bool,
{
    let mut attempt = 1;
    loop {
        match source.fetch().await {
            Ok(body) => return parse_feed(&body),
            Err(err) => match policy.delay_after(attempt) {
                Some(delay) if err.is_retryable() && is_current() => {
                    sleep(delay).await;
                    if !is_current() {
                        return Err(err.into());
                    }
                    attempt += 1;
                }
                _ => return Err(err.into()),
            },
        }
    }
}

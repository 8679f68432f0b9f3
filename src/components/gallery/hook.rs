//! Feed loading hook.
//!
//! Starts one feed load when the calling component mounts. The load holds a
//! [`LoadTicket`](folio_core::LoadTicket); unmounting cancels it, which stops
//! any pending retries and drops a late response instead of writing it into
//! the page.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::fetch_portfolio;

/// Load the portfolio feed into `AppContext::feed`.
///
/// Failures are logged to the console and leave the gallery empty with
/// loading cleared.
pub fn use_feed_loader() {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let feed = ctx.feed;

    let ticket = feed.try_update(|state| state.begin());

    on_cleanup(move || {
        feed.try_update(|state| state.cancel());
    });

    let Some(ticket) = ticket else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let is_current = move || {
            feed.try_with_untracked(|state| state.is_current(ticket))
                .unwrap_or(false)
        };
        let result = fetch_portfolio(is_current).await;

        if let Err(err) = &result {
            web_sys::console::error_1(&format!("Error fetching portfolio feed: {}", err).into());
        }

        let applied = feed.try_update(|state| state.complete(ticket, result));
        if applied != Some(true) {
            web_sys::console::warn_1(&"Discarding stale portfolio feed response".into());
        }
    });
}

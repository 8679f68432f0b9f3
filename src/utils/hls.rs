//! HLS playback through hls.js.
//!
//! Stream URLs are HLS playlists. Safari plays them natively; other browsers
//! need hls.js, which `index.html` loads as `window.Hls`. Interop goes
//! through the Reflect API so a missing or blocked script only means the
//! element keeps its plain `src`.

use folio_core::models::is_stream_url;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlMediaElement;

/// MIME type a native HLS implementation answers `canPlayType` for.
const HLS_MIME: &str = "application/vnd.apple.mpegurl";

/// An hls.js instance bound to one media element.
///
/// Dropping it calls `destroy()`, which detaches the element and stops
/// loading segments.
pub struct HlsPlayer {
    inner: Object,
}

impl Drop for HlsPlayer {
    fn drop(&mut self) {
        if let Err(err) = call_method(&self.inner, "destroy", &Array::new()) {
            web_sys::console::warn_2(&"Failed to release HLS player".into(), &err);
        }
    }
}

/// Get the `window.Hls` constructor, if hls.js is loaded and usable here.
fn get_hls() -> Option<Function> {
    let window = web_sys::window()?;
    let hls = Reflect::get(&window, &"Hls".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()?;

    let supported = call_method(&hls, "isSupported", &Array::new())
        .ok()?
        .as_bool()
        .unwrap_or(false);
    supported.then_some(hls)
}

/// Helper to call `target.name(...args)`.
fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    Reflect::get(target, &name.into())?
        .dyn_into::<Function>()?
        .apply(target, args)
}

/// Attach hls.js to `media` when `url` is a stream the browser cannot play
/// by itself.
///
/// Returns `None` for non-stream URLs, native HLS support, or when hls.js is
/// unavailable. Keep the returned player alive as long as the element.
pub fn attach(media: &HtmlMediaElement, url: &str) -> Option<HlsPlayer> {
    if !is_stream_url(url) || !media.can_play_type(HLS_MIME).is_empty() {
        return None;
    }

    let hls = get_hls()?;
    let inner = Reflect::construct(&hls, &Array::new())
        .ok()?
        .dyn_into::<Object>()
        .ok()?;
    let player = HlsPlayer { inner };

    let attached = call_method(&player.inner, "loadSource", &Array::of1(&url.into()))
        .and_then(|_| call_method(&player.inner, "attachMedia", &Array::of1(media)));
    match attached {
        Ok(_) => Some(player),
        Err(err) => {
            web_sys::console::warn_2(&format!("HLS attach failed: {}", url).into(), &err);
            None
        }
    }
}

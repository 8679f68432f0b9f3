//! Play/pause helpers for `<video>` elements.
//!
//! Both operations are safe to call repeatedly. A rejected `play()` (for
//! example an autoplay policy refusal) is logged and leaves the video paused.

use folio_core::PlaybackCommand;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

/// Apply a playback decision to a video element.
pub fn apply(video: &HtmlVideoElement, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Play => play(video),
        PlaybackCommand::Pause => pause(video),
    }
}

/// Start playback, logging (not surfacing) any rejection.
pub fn play(video: &HtmlVideoElement) {
    if !video.paused() {
        return;
    }
    let src = video.current_src();
    match video.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    web_sys::console::warn_2(&format!("Autoplay blocked: {}", src).into(), &err);
                }
            });
        }
        Err(err) => {
            web_sys::console::warn_2(&format!("Autoplay blocked: {}", src).into(), &err);
        }
    }
}

pub fn pause(video: &HtmlVideoElement) {
    if video.paused() {
        return;
    }
    if let Err(err) = video.pause() {
        web_sys::console::warn_2(&"Failed to pause video".into(), &err);
    }
}

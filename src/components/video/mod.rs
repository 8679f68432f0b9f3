//! Auto-playing video.
//!
//! Each video watches its own visibility through an intersection observer
//! that lives as long as the component. Playback follows
//! [`PlaybackGate::decide`]: it runs while enough of the element is on
//! screen and, when an `active` signal is given (carousel slides), only while
//! that signal is true.
//!
//! Stream URLs are handed to hls.js on browsers without native HLS; see
//! [`use_hls`].

use folio_core::PlaybackGate;
use leptos::prelude::*;
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};

use crate::utils::{hls, media};

stylance::import_crate_style!(css, "src/components/video/video.module.css");

/// Latest intersection observation for one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Visibility {
    intersecting: bool,
    ratio: f64,
}

/// Keep an hls.js player attached to the referenced video for stream URLs.
///
/// The player is released with the owning component.
pub fn use_hls(video_ref: NodeRef<leptos::html::Video>, url: String) {
    let player = StoredValue::new_local(None::<hls::HlsPlayer>);

    Effect::new(move |_| {
        if let Some(video) = video_ref.get()
            && player.with_value(Option::is_none)
        {
            player.set_value(hls::attach(&video, &url));
        }
    });
}

#[component]
pub fn AutoPlayVideo(
    /// Resolved, loadable URL.
    #[prop(into)]
    src: String,
    /// CSS aspect ratio, e.g. `16/9`.
    #[prop(into)]
    aspect_ratio: String,
    #[prop(default = PlaybackGate::SINGLE)] gate: PlaybackGate,
    /// Whether the enclosing carousel slide is active.
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let visibility = RwSignal::new(Visibility::default());

    use_hls(video_ref, src.clone());

    use_intersection_observer_with_options(
        video_ref,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                visibility.set(Visibility {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![gate.threshold]),
    );

    Effect::new(move |_| {
        let seen = visibility.get();
        let is_active = active.map(|a| a.get()).unwrap_or(true);
        if let Some(video) = video_ref.get() {
            media::apply(&video, gate.decide(seen.intersecting, seen.ratio, is_active));
        }
    });

    view! {
        <div class=css::frame style=format!("aspect-ratio: {}", aspect_ratio)>
            <video
                node_ref=video_ref
                class=css::video
                src=src
                prop:loop=true
                prop:muted=true
                muted=true
                playsinline=true
                preload="metadata"
            />
        </div>
    }
}

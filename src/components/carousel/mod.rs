//! Carousel for entries with several media assets.
//!
//! One slide per view, looping navigation through side arrows, the
//! pagination dots or a horizontal swipe. Videos on inactive slides stay
//! paused.

use folio_core::{CarouselState, MediaAsset, MediaKind, PlaybackGate};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::video::AutoPlayVideo;

stylance::import_crate_style!(css, "src/components/carousel/carousel.module.css");

#[component]
pub fn Carousel(
    slides: Vec<MediaAsset>,
    #[prop(into)] aspect_ratio: String,
    /// Alt text for image slides.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(slides.len()));
    let count = slides.len();

    // Touch start x, cleared once the gesture ends
    let (swipe_start_x, set_swipe_start_x) = signal(None::<f64>);

    let on_touch_start = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            set_swipe_start_x.set(Some(touch.client_x() as f64));
        }
    };

    let on_touch_end = move |event: leptos::ev::TouchEvent| {
        let Some(start) = swipe_start_x.get_untracked() else {
            return;
        };
        set_swipe_start_x.set(None);
        if let Some(touch) = event.changed_touches().get(0) {
            let dx = touch.client_x() as f64 - start;
            state.update(|s| s.swipe(dx));
        }
    };

    let on_touch_cancel = move |_: leptos::ev::TouchEvent| {
        set_swipe_start_x.set(None);
    };

    let track_style = move || {
        format!(
            "transform: translateX(-{}%)",
            state.with(|s| s.active()) * 100
        )
    };

    let slide_views = slides
        .into_iter()
        .enumerate()
        .map(|(index, asset)| {
            let is_active = Signal::derive(move || state.with(|s| s.is_active(index)));
            let content = match asset.kind {
                MediaKind::Image => view! {
                    <div class=css::imageSlide style=format!("aspect-ratio: {}", aspect_ratio)>
                        <img class=css::image src=asset.url alt=title.clone() />
                    </div>
                }
                .into_any(),
                MediaKind::Video => view! {
                    <AutoPlayVideo
                        src=asset.url
                        aspect_ratio=aspect_ratio.clone()
                        gate=PlaybackGate::CAROUSEL
                        active=is_active
                    />
                }
                .into_any(),
            };

            view! {
                <div class=css::slide aria-hidden=move || (!is_active.get()).to_string()>
                    {content}
                </div>
            }
        })
        .collect_view();

    let dots = (0..count)
        .map(|index| {
            let class = move || {
                if state.with(|s| s.is_active(index)) {
                    format!("{} {}", css::dot, css::dotActive)
                } else {
                    css::dot.to_string()
                }
            };
            view! {
                <button
                    class=class
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_| state.update(|s| s.go_to(index))
                />
            }
        })
        .collect_view();

    view! {
        <div class=css::carousel>
            <div
                class=css::viewport
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
            >
                <div class=css::track style=track_style>
                    {slide_views}
                </div>
                <div class=css::pagination>{dots}</div>
            </div>

            <button
                class=css::prev
                aria-label="Previous slide"
                on:click=move |_| state.update(|s| s.prev())
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=css::next
                aria-label="Next slide"
                on:click=move |_| state.update(|s| s.next())
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
    }
}

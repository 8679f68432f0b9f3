//! Masthead: animated logo with contact links beside it.

use folio_core::models::resolve_media_url;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::video::use_hls;
use crate::config::{branding, profile};

stylance::import_crate_style!(css, "src/components/masthead/masthead.module.css");

#[component]
pub fn Masthead() -> impl IntoView {
    let logo_url = resolve_media_url(branding::LOGO_VIDEO_ID);
    let logo_ref = NodeRef::<leptos::html::Video>::new();
    use_hls(logo_ref, logo_url.clone());

    view! {
        <header class=css::masthead>
            <div
                class=css::logo
                style=format!("aspect-ratio: {}", branding::LOGO_ASPECT_RATIO)
            >
                <video
                    node_ref=logo_ref
                    class=css::logoVideo
                    src=logo_url
                    autoplay=true
                    prop:muted=true
                    muted=true
                    playsinline=true
                />
            </div>
            <div class=css::contact>
                <a
                    class=css::link
                    href=profile::INSTAGRAM_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class=css::icon><Icon icon=ic::INSTAGRAM /></span>
                    {profile::INSTAGRAM_HANDLE}
                </a>
                <a class=css::link href=format!("mailto:{}", profile::EMAIL)>
                    <span class=css::icon><Icon icon=ic::MAIL /></span>
                    {profile::EMAIL}
                </a>
            </div>
        </header>
    }
}

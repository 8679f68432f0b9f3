//! A single gallery entry.

use folio_core::{GalleryItem, ItemLayout, MediaKind};
use leptos::prelude::*;

use crate::components::accent;
use crate::components::carousel::Carousel;
use crate::components::video::AutoPlayVideo;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Media column for an item: image, video, or carousel.
fn media_view(item: &GalleryItem) -> AnyView {
    match item.layout() {
        ItemLayout::Carousel(slides) => view! {
            <Carousel
                slides=slides
                aspect_ratio=item.aspect_ratio.clone()
                title=item.title.clone()
            />
        }
        .into_any(),
        ItemLayout::Single(asset) if asset.kind == MediaKind::Image => view! {
            <img class=css::image src=asset.url alt=item.title.clone() />
        }
        .into_any(),
        ItemLayout::Single(asset) => view! {
            <AutoPlayVideo src=asset.url aspect_ratio=item.aspect_ratio.clone() />
        }
        .into_any(),
        ItemLayout::Empty => ().into_any(),
    }
}

#[component]
pub fn GalleryEntry(item: GalleryItem) -> impl IntoView {
    let media = media_view(&item);
    let badge = item.category_label();
    let badge_class = format!("{} {}", css::badge, accent::for_label(&badge));
    let GalleryItem {
        title, description, ..
    } = item;

    view! {
        <article class=css::entry>
            <div class=css::media>
                {media}
                <div class=css::rule></div>
            </div>
            <div class=css::caption>
                <div class=css::captionHeader>
                    <h2 class=css::titleCompact>{title.clone()}</h2>
                    <span class=badge_class>{badge}</span>
                </div>
                <h2 class=css::title>{title}</h2>
                <p class=css::description>{description}</p>
            </div>
        </article>
    }
}

//! Gallery list component.

use leptos::prelude::*;

use super::entry::GalleryEntry;
use super::hook::use_feed_loader;
use crate::app::AppContext;
use crate::config::LOADING_TEXT;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Filtered list of portfolio entries.
///
/// Shows a placeholder while the feed loads. A failed load renders as an
/// empty list.
#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    use_feed_loader();

    let loading = Signal::derive(move || ctx.feed.with(|f| f.is_loading()));
    let visible = Memo::new(move |_| ctx.visible_items());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class=css::loading>{LOADING_TEXT}</p> }
        >
            <div class=css::list>
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|item| view! { <GalleryEntry item=item /> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

//! Category filter buttons.
//!
//! One button per [`Category`]. Pressing a button filters the gallery to that
//! category; pressing the active button again shows everything.

use folio_core::Category;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::accent;

stylance::import_crate_style!(css, "src/components/filter_bar/filter_bar.module.css");

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::bar>
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let label = category.as_str();
                    let is_active = Signal::derive(move || ctx.selection.with(|s| s.is_active(label)));
                    let class = move || {
                        if is_active.get() {
                            format!("{} {}", css::button, accent::for_category(category))
                        } else {
                            css::button.to_string()
                        }
                    };

                    view! {
                        <button
                            class=class
                            aria-pressed=move || is_active.get().to_string()
                            on:click=move |_| ctx.toggle_filter(label)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

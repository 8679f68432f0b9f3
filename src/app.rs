//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use folio_core::{FeedState, GalleryItem, Selection, filter_items};
use leptos::prelude::*;

use crate::components::{FilterBar, Footer, Gallery, Masthead};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child components
/// with `use_context::<AppContext>()`. Data flows one way: the feed loader
/// writes `feed`, the filter bar writes `selection`, and the gallery reads
/// both.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded gallery items and the loading flag.
    pub feed: RwSignal<FeedState>,

    /// Active category filter.
    pub selection: RwSignal<Selection>,
}

impl AppContext {
    /// Creates a new application context: feed loading, no filter.
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(FeedState::new()),
            selection: RwSignal::new(Selection::All),
        }
    }

    /// Toggle the filter for a category button.
    pub fn toggle_filter(&self, label: &str) {
        self.selection.update(|s| s.toggle(label));
    }

    /// Items to render for the current selection, in feed order.
    ///
    /// Items without media are never rendered.
    pub fn visible_items(&self) -> Vec<GalleryItem> {
        let selection = self.selection.get();
        self.feed.with(|feed| {
            filter_items(feed.items(), &selection)
                .into_iter()
                .filter(|item| item.has_media())
                .cloned()
                .collect()
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the page in an ErrorBoundary for graceful error handling
/// - Lays out filter bar, masthead, gallery and footer
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::page>
                <FilterBar />
                <Masthead />
                <Gallery />
                <Footer />
            </div>
        </ErrorBoundary>
    }
}

//! Page footer with the logo and copyright line.

use leptos::prelude::*;

use crate::config::{COPYRIGHT_YEAR, OWNER_NAME, branding};

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <img
                class=css::logo
                src=branding::FOOTER_LOGO_URL
                alt=format!("{} Logo", OWNER_NAME)
            />
            <p class=css::copyright>
                {format!("{}, Copyright © {}", OWNER_NAME, COPYRIGHT_YEAR)}
            </p>
        </footer>
    }
}

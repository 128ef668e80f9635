//! Main browser component.
//!
//! ## Layout
//!
//! - Header with back button, location and search bar
//! - File list filling the remaining height
//! - Preview panel overlaid on the list while a file is open

use leptos::prelude::*;

use super::{FileList, Header, PreviewPanel};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Repository browser view component.
#[component]
pub fn RepoBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_preview = Signal::derive(move || ctx.view.preview.with(Option::is_some));

    view! {
        <div class=css::browser>
            <Header />

            <main class=css::body>
                <FileList />
            </main>

            <Show when=move || has_preview.get()>
                <PreviewPanel />
            </Show>
        </div>
    }
}

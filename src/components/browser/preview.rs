//! Preview panel component.
//!
//! Shows the open file's name and, for playable videos, an inline
//! `<video controls>` element. Closing drops the panel and its player.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::PreviewMedia;

stylance::import_crate_style!(css, "src/components/browser/preview.module.css");

/// File preview panel.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let preview = ctx.view.preview;

    let title = move || preview.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let media = move || preview.with(|p| p.as_ref().map(|p| p.media.clone()));

    view! {
        <div id="file-viewer" class=css::viewer role="dialog" aria-label="File preview">
            <div class=css::panel>
                <header class=css::header>
                    <span id="file-title" class=css::title>{title}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| ctx.close_viewer()
                        title="Close preview"
                        aria-label="Close preview panel"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div id="file-player" class=css::player>
                    {move || match media() {
                        Some(PreviewMedia::Video { src }) => view! {
                            <video class=css::video src=src controls=true preload="metadata"></video>
                        }.into_any(),
                        Some(PreviewMedia::Unsupported) => view! {
                            <p class=css::unsupported>{messages::UNSUPPORTED_PREVIEW}</p>
                        }.into_any(),
                        None => ().into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

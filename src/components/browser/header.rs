//! Browser header component.
//!
//! Contains the back button, the current location and the search bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::FilterTerm;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Browser header with navigation and search.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let repo_label = ctx.repo_label();
    let current_path = ctx.view.current_path;
    let is_root = Signal::derive(move || current_path.with(String::is_empty));

    view! {
        <header class=css::header>
            <Show when=move || ctx.view.back_visible.get()>
                <button
                    id="back-btn"
                    class=css::backButton
                    on:click=move |_| ctx.go_back()
                    title="Go back"
                    aria-label="Go back to the previous directory"
                >
                    <Icon icon=ic::BACK />
                </button>
            </Show>

            <div class=css::title>
                <span class=css::titleIcon>
                    {move || if is_root.get() {
                        view! { <Icon icon=ic::HOME /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::FOLDER /> }.into_any()
                    }}
                </span>
                <span class=css::titleRepo>{repo_label}</span>
                <span class=css::titlePath>
                    {move || current_path.with(|p| {
                        if p.is_empty() { String::new() } else { format!("/{}", p) }
                    })}
                </span>
            </div>

            <SearchBar />
        </header>
    }
}

/// Search input filtering the rendered rows.
#[component]
fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let filter = ctx.view.filter;

    let handle_input = move |ev: leptos::ev::Event| {
        filter.set(FilterTerm::new(&event_target_value(&ev)));
    };

    view! {
        <label class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                id="search-bar"
                type="search"
                class=css::searchInput
                placeholder="Filter by name"
                autocomplete="off"
                spellcheck="false"
                prop:value=move || filter.with(|t| t.input().to_string())
                on:input=handle_input
            />
        </label>
    }
}

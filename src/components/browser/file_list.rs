//! File list component.
//!
//! Renders one row per listing entry in API order. Rows hidden by the
//! search filter stay mounted with `display: none`.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::ListingState;
use crate::models::{Entry, MediaType};

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Get icon for an entry based on its kind and name
fn get_icon(entry: &Entry) -> IconData {
    if entry.is_dir() {
        ic::FOLDER
    } else {
        match entry.media_type() {
            MediaType::Video => ic::FILE_VIDEO,
            MediaType::Unknown => ic::FILE,
        }
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let listing = ctx.view.listing;
    let generation = ctx.view.generation;

    // Rows keyed by (generation, path) so a new listing never reuses rows
    let rows = move || match listing.get() {
        ListingState::Entries(entries) => {
            let generation = generation.get_untracked();
            entries
                .into_iter()
                .map(|entry| (generation, entry))
                .collect::<Vec<_>>()
        }
        _ => Vec::new(),
    };

    let message = move || match listing.get() {
        ListingState::Loading => Some(messages::LOADING),
        ListingState::Empty => Some(messages::EMPTY_LISTING),
        ListingState::Failed => Some(messages::FETCH_FAILED),
        ListingState::Entries(_) => None,
    };

    view! {
        <div id="file-list" class=css::list role="list" aria-label="Repository contents">
            {move || message().map(|text| view! { <p class=css::message>{text}</p> })}
            <For
                each=rows
                key=|(generation, entry)| (*generation, entry.path.clone())
                children=move |(_, entry)| {
                    view! { <FileListItem entry=entry /> }
                }
            />
        </div>
    }
}

#[component]
fn FileListItem(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let filter = ctx.view.filter;

    let is_dir = entry.is_dir();
    let icon = get_icon(&entry);
    let name = entry.name.clone();

    // The row's visible text is the entry name
    let name_for_filter = entry.name.clone();
    let is_visible = Signal::derive(move || filter.with(|term| term.matches(&name_for_filter)));

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };

    let clicked = entry.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.activate(&clicked);
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if activates_row(&ev.key()) {
            ev.prevent_default();
            ctx.activate(&entry);
        }
    };

    view! {
        <div
            class=css::item
            style:display=move || if is_visible.get() { "" } else { "none" }
            on:click=handle_click
            on:keydown=handle_keydown
            role="listitem"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{name}</span>
            <span class=css::chevron aria-hidden="true">
                {is_dir.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}

/// Keys that open a focused row, as a click would.
fn activates_row(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_space_activate_row() {
        assert!(activates_row("Enter"));
        assert!(activates_row(" "));
        assert!(!activates_row("Tab"));
        assert!(!activates_row("ArrowDown"));
    }
}

//! Root application module.
//!
//! Contains the main App component, the reactive [`BrowserSignals`] view and
//! the [`AppContext`] that connects UI events to the [`Browser`] controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RepoBrowser;
use crate::core::{
    Browser, BrowserView, ContentsSource, FilterTerm, ListingRequest, ListingState, Preview,
    RepoParams,
};
use crate::models::Entry;
use crate::utils::GithubContents;

// ============================================================================
// BrowserSignals
// ============================================================================

/// Browser view state managed with Leptos signals.
///
/// This is the [`BrowserView`] the controller writes to; components only
/// read from it (the search term is the one exception, written by the
/// search bar).
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct BrowserSignals {
    /// What the listing area shows.
    pub listing: RwSignal<ListingState>,
    /// Bumped on every listing render; part of each row key so no row
    /// outlives the listing it came from.
    pub generation: RwSignal<u64>,
    /// Open preview, if any.
    pub preview: RwSignal<Option<Preview>>,
    /// Back button visibility.
    pub back_visible: RwSignal<bool>,
    /// Current path, mirrored for the header.
    pub current_path: RwSignal<String>,
    /// Search term applied to rendered rows.
    pub filter: RwSignal<FilterTerm>,
}

impl BrowserSignals {
    pub fn new() -> Self {
        Self {
            listing: RwSignal::new(ListingState::Loading),
            generation: RwSignal::new(0),
            preview: RwSignal::new(None),
            back_visible: RwSignal::new(false),
            current_path: RwSignal::new(String::new()),
            filter: RwSignal::new(FilterTerm::default()),
        }
    }
}

impl Default for BrowserSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserView for BrowserSignals {
    fn render_listing(&mut self, listing: ListingState) {
        // A fresh listing starts unfiltered
        self.filter.set(FilterTerm::default());
        self.generation.update(|g| *g += 1);
        self.listing.set(listing);
    }

    fn show_preview(&mut self, preview: Preview) {
        self.preview.set(Some(preview));
    }

    fn hide_preview(&mut self) {
        self.preview.set(None);
    }

    fn set_back_visible(&mut self, visible: bool) {
        self.back_visible.set(visible);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. All navigation goes through here so
/// every listing request is tokened by the controller.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive view state.
    pub view: BrowserSignals,
    browser: StoredValue<Browser<BrowserSignals>>,
}

impl AppContext {
    pub fn new(params: RepoParams) -> Self {
        let view = BrowserSignals::new();
        Self {
            view,
            browser: StoredValue::new(Browser::new(params, view)),
        }
    }

    /// `owner/name` of the browsed repository.
    pub fn repo_label(&self) -> String {
        self.browser.with_value(|b| b.params().display())
    }

    /// Load the repository root.
    pub fn start(&self) {
        let request = self.browser.try_update_value(|b| b.start());
        self.dispatch(request);
    }

    /// Row click: enter a directory or preview a file.
    pub fn activate(&self, entry: &Entry) {
        let request = self.browser.try_update_value(|b| b.activate(entry)).flatten();
        self.dispatch(request);
    }

    pub fn go_back(&self) {
        let request = self.browser.try_update_value(|b| b.go_back()).flatten();
        self.dispatch(request);
    }

    pub fn close_viewer(&self) {
        self.browser.update_value(|b| b.close_viewer());
    }

    /// Fetch a listing in the background and hand the result back.
    fn dispatch(&self, request: Option<ListingRequest>) {
        let Some(request) = request else {
            return;
        };

        self.view.current_path.set(request.path.clone());

        let browser = self.browser;
        spawn_local(async move {
            let result = GithubContents.list(&request.url).await;
            browser.update_value(|b| {
                b.complete(request.token, result);
            });
        });
    }
}

/// Root application component.
///
/// Creates and provides the [`AppContext`], kicks off the root listing and
/// renders the browser.
#[component]
pub fn App(params: RepoParams) -> impl IntoView {
    let ctx = AppContext::new(params);
    provide_context(ctx);
    ctx.start();

    view! { <RepoBrowser /> }
}

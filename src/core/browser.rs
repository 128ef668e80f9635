//! Browser controller.
//!
//! Owns the navigation stack and request tokens and drives a [`BrowserView`].
//! Rendering is behind the view trait so the whole click → fetch → render
//! cycle runs without a DOM.
//!
//! # Request lifecycle
//!
//! Every navigation returns a [`ListingRequest`]. The caller fetches
//! `request.url` and hands the outcome back through [`Browser::complete`].
//! Only the most recently issued request is applied; responses to superseded
//! requests are dropped no matter when they arrive.

use crate::core::error::FetchError;
use crate::core::listing::{ContentsEndpoint, ContentsSource, Listing, ListingState};
use crate::core::navigator::{NavStack, RequestToken, RequestTokens};
use crate::core::params::RepoParams;
use crate::core::preview::Preview;
use crate::models::Entry;

/// Display surface driven by [`Browser`].
pub trait BrowserView {
    /// Replace the listing area wholesale.
    fn render_listing(&mut self, listing: ListingState);
    /// Open the preview panel.
    fn show_preview(&mut self, preview: Preview);
    /// Close the preview panel.
    fn hide_preview(&mut self);
    /// Show or hide the back affordance.
    fn set_back_visible(&mut self, visible: bool);
}

/// A listing fetch the caller must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub token: RequestToken,
    /// Repository path being listed (`""` for root)
    pub path: String,
    /// Fully built contents URL
    pub url: String,
}

/// Repository browser state machine.
pub struct Browser<V> {
    params: RepoParams,
    endpoint: ContentsEndpoint,
    nav: NavStack,
    tokens: RequestTokens,
    view: V,
}

impl<V: BrowserView> Browser<V> {
    /// Browser for `params` on the configured API host.
    pub fn new(params: RepoParams, view: V) -> Self {
        let endpoint = ContentsEndpoint::new(&params);
        Self::with_endpoint(params, endpoint, view)
    }

    pub fn with_endpoint(params: RepoParams, endpoint: ContentsEndpoint, view: V) -> Self {
        Self {
            params,
            endpoint,
            nav: NavStack::new(),
            tokens: RequestTokens::new(),
            view,
        }
    }

    pub fn params(&self) -> &RepoParams {
        &self.params
    }

    /// Path of the directory being displayed (`""` at root).
    pub fn current_path(&self) -> &str {
        self.nav.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial load: list the repository root.
    pub fn start(&mut self) -> ListingRequest {
        self.nav = NavStack::new();
        self.view.set_back_visible(false);
        self.request_current()
    }

    /// Enter the directory at `path` and list it.
    pub fn open_directory(&mut self, path: &str) -> ListingRequest {
        self.nav.push(path);
        self.view.set_back_visible(true);
        self.request_current()
    }

    /// Return to the previously displayed directory.
    ///
    /// Returns `None` (and does nothing) at the root.
    pub fn go_back(&mut self) -> Option<ListingRequest> {
        self.nav.pop()?;
        self.view.set_back_visible(self.nav.can_go_back());
        Some(self.request_current())
    }

    /// Open the preview panel for a file entry.
    pub fn open_file(&mut self, entry: &Entry) {
        self.view.show_preview(Preview::for_entry(entry));
    }

    pub fn close_viewer(&mut self) {
        self.view.hide_preview();
    }

    /// Dispatch a row click: directories navigate, everything else previews.
    pub fn activate(&mut self, entry: &Entry) -> Option<ListingRequest> {
        if entry.is_dir() {
            Some(self.open_directory(&entry.path))
        } else {
            self.open_file(entry);
            None
        }
    }

    /// Apply the outcome of a listing request.
    ///
    /// Returns `false` when `token` was superseded and the result dropped.
    pub fn complete(&mut self, token: RequestToken, result: Result<Listing, FetchError>) -> bool {
        if !self.tokens.is_latest(token) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Discarding stale listing response #{}", token.value()).into(),
            );
            return false;
        }

        #[cfg(target_arch = "wasm32")]
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Error fetching files: {}", e).into());
        }

        self.view.render_listing(ListingState::from(result));
        true
    }

    /// Fetch and apply `request` in one step.
    ///
    /// Only usable where nothing else can navigate while the fetch is
    /// pending; the UI drives [`Browser::complete`] itself.
    pub async fn load<S: ContentsSource>(&mut self, source: &S, request: ListingRequest) -> bool {
        let result = source.list(&request.url).await;
        self.complete(request.token, result)
    }

    fn request_current(&mut self) -> ListingRequest {
        let token = self.tokens.issue();
        let path = self.nav.current().to_string();
        let url = self.endpoint.contents_url(&path);
        self.view.render_listing(ListingState::Loading);
        ListingRequest { token, path, url }
    }
}

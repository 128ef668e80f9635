//! Browse a GitHub repository's contents from the browser.
//!
//! The page is opened as `index.html?username=<owner>&repo=<name>`. The
//! browser lists the repository root, navigates into directories and back,
//! previews `.mp4` files inline and filters the rendered rows by name.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::messages;
use crate::core::{ParamError, RepoParams};
use crate::utils::dom;

/// Read the repository from `query`, or fail the page.
///
/// On a missing parameter the page body is replaced with a static error
/// message and nothing else runs.
pub fn boot(query: &str) -> Result<RepoParams, ParamError> {
    RepoParams::from_query(query).inspect_err(fail_page)
}

/// [`boot`] from the page's own `location.search`.
pub fn boot_from_location() -> Result<RepoParams, ParamError> {
    RepoParams::from_location().inspect_err(fail_page)
}

fn fail_page(_err: &ParamError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("Cannot start: {}", _err).into());
    dom::replace_body_with_error(messages::MISSING_PARAMS);
}

/// Application entry point: check parameters, then mount into `#app`.
pub fn run() {
    console_error_panic_hook::set_once();

    let Ok(params) = boot_from_location() else {
        return;
    };

    dom::set_title(&params.display());

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App params=params /> }).forget();
}

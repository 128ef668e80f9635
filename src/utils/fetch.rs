//! Network fetching utilities with timeout support.
//!
//! Provides the browser transport for listing requests: a Fetch API GET
//! raced against a timeout, and [`GithubContents`], the production
//! [`ContentsSource`].

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::listing::{ContentsSource, Listing, parse_listing};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Arguments
/// * `promise` - The promise to race against timeout
/// * `timeout_ms` - Timeout duration in milliseconds
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(
            e.as_string()
                .or_else(|| {
                    e.dyn_ref::<js_sys::Error>()
                        .map(|err| String::from(err.message()))
                })
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Response body and HTTP status of a completed request.
#[derive(Debug)]
pub struct FetchedText {
    pub status: u16,
    pub body: String,
}

/// GET `url` and read the body as text, whatever the HTTP status.
///
/// Uses [`race_with_timeout`]; if the request takes longer than
/// `FETCH_TIMEOUT_MS`, returns `FetchError::Timeout`.
pub async fn fetch_text(url: &str) -> Result<FetchedText, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            Ok(FetchedText {
                status: resp.status(),
                body: text.as_string().ok_or(FetchError::InvalidContent)?,
            })
        }
    }
}

// =============================================================================
// Contents Source
// =============================================================================

/// Lists repository paths through the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GithubContents;

impl ContentsSource for GithubContents {
    async fn list(&self, url: &str) -> Result<Listing, FetchError> {
        let fetched = fetch_text(url).await?;

        // Error objects (404, rate limit) still carry a JSON body; they
        // decode as an empty listing.
        if !(200..300).contains(&fetched.status) {
            web_sys::console::warn_1(
                &format!("Contents request returned HTTP {}: {}", fetched.status, url).into(),
            );
        }

        parse_listing(&fetched.body)
    }
}

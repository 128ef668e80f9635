//! Core browser logic, independent of the DOM.
//!
//! This module provides:
//! - [`RepoParams`] query parameter reading
//! - [`ContentsEndpoint`] and [`parse_listing`] for the contents API
//! - [`Browser`] navigation controller driving a [`BrowserView`]
//! - [`Preview`] classification and the [`FilterTerm`] row filter

mod browser;
pub mod error;
pub mod filter;
pub mod listing;
pub mod navigator;
pub mod params;
pub mod preview;

pub use browser::{Browser, BrowserView, ListingRequest};
pub use error::{FetchError, ParamError};
pub use filter::FilterTerm;
pub use listing::{ContentsEndpoint, ContentsSource, Listing, ListingState, parse_listing};
pub use navigator::{NavStack, RequestToken};
pub use params::RepoParams;
pub use preview::{Preview, PreviewMedia};

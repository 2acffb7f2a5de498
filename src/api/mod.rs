//! Remote service boundary.
//!
//! This module defines the [`NewsApi`] trait, the [`ApiError`] taxonomy, and
//! the wire data model.  The concrete HTTP implementation lives in
//! [`http`]; the synchronization worker only ever sees the trait, so tests
//! substitute a fake without touching the network.
//!
//! ## For contributors — pointing at a different backend
//!
//! The trait is the seam: implement [`NewsApi`] for your transport (gRPC,
//! on-disk fixtures, whatever) and hand it to `sync::spawn` in `main.rs`.
//! The worker calls it from a background thread, so implementations must be
//! [`Send`].

mod http;
mod news_item;

pub use http::HttpNewsApi;
pub use news_item::{
    HoaxLabel, IngestSummary, NewsItem, NewsListResponse, DATE_PLACEHOLDER, UNKNOWN_SOURCE,
};

use thiserror::Error;

/// Default number of items requested from the list endpoint.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Everything that can go wrong talking to the backend.
///
/// The client makes no recovery attempt for any of these; the
/// synchronization controller collapses them into one generic notice per
/// workflow and logs the underlying kind for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure or a non-success HTTP status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A single-item lookup matched no record.
    #[error("no news item with id {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Typed boundary to the backend news service.
///
/// No retry, no caching, no transformation beyond JSON decoding — errors
/// propagate to the caller as-is.
pub trait NewsApi: Send {
    /// Fetch up to `limit` news items, in backend storage order.
    fn list_news(&self, limit: u32) -> Result<Vec<NewsItem>, ApiError>;

    /// Fetch a single item by its backend identifier.
    fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError>;

    /// Ask the backend to pull fresh articles from its RSS source.
    ///
    /// A write with backend-side effects: new records may appear.  Safe to
    /// issue repeatedly, though the returned counts will differ.  No client
    /// timeout is imposed; the call settles with the transport.
    fn trigger_rss_ingestion(&self) -> Result<IngestSummary, ApiError>;
}

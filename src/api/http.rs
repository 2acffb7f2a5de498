//! HTTP implementation of [`NewsApi`] over `reqwest`'s blocking client.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, IngestSummary, NewsApi, NewsItem, NewsListResponse};

/// Used when neither the CLI argument nor `HOAXWATCH_API_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "HOAXWATCH_API_URL";

/// Blocking HTTP client for the news backend.
///
/// Explicitly constructed and handed to the synchronization worker — there
/// is no process-wide shared instance, so tests can swap in a fake.
pub struct HttpNewsApi {
    client: Client,
    base_url: String,
}

impl HttpNewsApi {
    /// Create a client against the given base endpoint, e.g.
    /// `http://localhost:8000/api`.  A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Resolve the base endpoint: [`BASE_URL_ENV`] if set, otherwise the
    /// local fallback.
    pub fn base_url_from_env() -> String {
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the status, then decode the body.
    ///
    /// The body is read as text first so that a non-success status and a
    /// shape mismatch surface as distinct error kinds.
    fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(ApiError::Transport(format!("HTTP {status}: {body}")));
        }
        decode(&body)
    }
}

/// Decode a response body, mapping shape mismatches to [`ApiError::Decode`].
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

impl NewsApi for HttpNewsApi {
    fn list_news(&self, limit: u32) -> Result<Vec<NewsItem>, ApiError> {
        let url = self.url(&format!("/news?limit={limit}"));
        debug!(%url, "listing news");
        let response = self.client.get(&url).send()?;
        let envelope: NewsListResponse = self.handle_response(response)?;
        Ok(envelope.news)
    }

    fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError> {
        let url = self.url(&format!("/news/{id}"));
        debug!(%url, "fetching news item");
        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }
        self.handle_response(response)
    }

    fn trigger_rss_ingestion(&self) -> Result<IngestSummary, ApiError> {
        let url = self.url("/news/fetch-rss");
        debug!(%url, "triggering RSS ingestion");
        let response = self.client.post(&url).send()?;
        self.handle_response(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

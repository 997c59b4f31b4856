//! The fetch seam and its HTTP implementation.

use async_trait::async_trait;

use crate::{PageQuery, PageResponse};

/// Error type for page fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// Source of listing pages.
///
/// The engine only talks to this trait; tests substitute an in-memory
/// implementation and the host wires in `HttpPageSource`.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse, FetchError>;
}

/// `PageSource` over a plain HTTP GET of the listing endpoint.
pub struct HttpPageSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPageSource {
    /// Create a source for the given endpoint URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured `reqwest` client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The configured endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse, FetchError> {
        let url = query.url_for(&self.base_url);
        tracing::debug!(%url, "fetching page");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FetchError::Connection(e.to_string())
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        let page: PageResponse = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        Ok(page)
    }
}

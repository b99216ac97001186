//! Client for the free-text park search service.

use async_trait::async_trait;
use parkmatch_core::SearchCandidate;
use reqwest::{Client, Url};

use crate::client::build_http_client;
use crate::error::ImageryError;
use crate::types::SearchResponse;

/// Resolves a free-text park name into search candidates.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Returns the candidates for `query` in service order.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageryError`] when the service is unreachable or
    /// answers with an unexpected body.
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, ImageryError>;
}

/// HTTP implementation of [`SearchService`] (`GET <search_url>?q=<query>`).
#[derive(Debug, Clone)]
pub struct ThemeParksSearchClient {
    client: Client,
    search_url: Url,
}

impl ThemeParksSearchClient {
    /// Creates a search client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::InvalidUrl`] if `search_url` does not parse,
    /// or [`ImageryError::Http`] if the HTTP client cannot be built.
    pub fn new(search_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ImageryError> {
        Self::with_client(build_http_client(timeout_secs, user_agent)?, search_url)
    }

    /// Creates a search client on top of an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::InvalidUrl`] if `search_url` does not parse.
    pub fn with_client(client: Client, search_url: &str) -> Result<Self, ImageryError> {
        let search_url = Url::parse(search_url).map_err(|e| ImageryError::InvalidUrl {
            url: search_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, search_url })
    }

    /// Builds the request URL with `q` safely percent-encoded.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait]
impl SearchService for ThemeParksSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, ImageryError> {
        let url = self.build_url(query);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let payload: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ImageryError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        tracing::debug!(query, count = payload.theme_parks.len(), "park search answered");
        Ok(payload
            .theme_parks
            .into_iter()
            .map(SearchCandidate::from)
            .collect())
    }
}

/// Absolutizes an image reference from the search service.
///
/// References that already carry a scheme are returned as-is; anything else
/// is treated as a path on `base`, with surrounding slashes trimmed.
#[must_use]
pub fn resolve_image_url(base: &Url, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(absolute) = Url::parse(raw) {
        return Some(absolute);
    }

    let relative = raw.trim_matches('/');
    if relative.is_empty() {
        return None;
    }
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{base_path}/{relative}"));
    Some(url)
}

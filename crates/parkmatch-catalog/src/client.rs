use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;

/// HTTP client shared by the catalog sources.
///
/// Cheap to clone; every clone reuses the same connection pool. Requests are
/// bounded by the configured timeout and never retried: a failed fetch means
/// the source is unavailable for this aggregation pass.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the body of `url` as text.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] for any non-2xx status.
    /// - [`CatalogError::Network`] on transport failure or timeout.
    pub async fn fetch_text(&self, url: &str) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

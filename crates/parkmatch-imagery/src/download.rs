use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::client::build_http_client;
use crate::error::ImageryError;

/// Fetches raw image bytes.
#[async_trait]
pub trait ImageDownloader: Send + Sync {
    /// Downloads the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageryError`] on transport failure or a non-2xx status.
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ImageryError>;
}

/// [`ImageDownloader`] over HTTP. No retries: a failed image is skipped by
/// the caller.
#[derive(Debug, Clone)]
pub struct HttpImageDownloader {
    client: Client,
}

impl HttpImageDownloader {
    /// # Errors
    ///
    /// Returns [`ImageryError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ImageryError> {
        Ok(Self::with_client(build_http_client(timeout_secs, user_agent)?))
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageDownloader for HttpImageDownloader {
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ImageryError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

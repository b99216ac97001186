//! Catalog sources.
//!
//! A [`ParkSource`] fetches one upstream catalog and decodes it into raw
//! records. Sources share no mutable state so the aggregator can run them
//! concurrently.

use async_trait::async_trait;
use parkmatch_core::RawParkRecord;

use crate::client::CatalogClient;
use crate::decode::{decode_queue_times, theme_parks_record};
use crate::error::CatalogError;
use crate::types::ThemeParksListResponse;

/// One upstream park catalog.
#[async_trait]
pub trait ParkSource: Send + Sync {
    /// Short identifier used in logs (e.g. `"queue_times"`).
    fn name(&self) -> &str;

    /// Fetches and decodes the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`]/[`CatalogError::UnexpectedStatus`]
    /// when the upstream is unreachable, [`CatalogError::Parse`] when no known
    /// response shape matched, or [`CatalogError::DataCorrupted`] for
    /// uninterpretable coordinates.
    async fn fetch(&self) -> Result<Vec<RawParkRecord>, CatalogError>;
}

/// Source A: the tolerant, multi-shape Queue-Times style catalog.
#[derive(Debug, Clone)]
pub struct QueueTimesSource {
    client: CatalogClient,
    url: String,
}

impl QueueTimesSource {
    #[must_use]
    pub fn new(client: CatalogClient, url: &str) -> Self {
        Self {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl ParkSource for QueueTimesSource {
    fn name(&self) -> &str {
        "queue_times"
    }

    async fn fetch(&self) -> Result<Vec<RawParkRecord>, CatalogError> {
        let body = self.client.fetch_text(&self.url).await?;
        decode_queue_times(&body, &format!("catalog from {}", self.url))
    }
}

/// Source B: the theme-parks list endpoint with string coordinates.
///
/// Records without usable coordinates are skipped one by one; only a body
/// that does not match the list shape fails the fetch.
#[derive(Debug, Clone)]
pub struct ThemeParksListSource {
    client: CatalogClient,
    url: String,
}

impl ThemeParksListSource {
    #[must_use]
    pub fn new(client: CatalogClient, url: &str) -> Self {
        Self {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl ParkSource for ThemeParksListSource {
    fn name(&self) -> &str {
        "theme_parks"
    }

    async fn fetch(&self) -> Result<Vec<RawParkRecord>, CatalogError> {
        let body = self.client.fetch_text(&self.url).await?;
        let payload: ThemeParksListResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
                context: format!("theme-parks list from {}", self.url),
                source: e,
            })?;

        let total = payload.data.len();
        let records: Vec<RawParkRecord> = payload
            .data
            .into_iter()
            .filter_map(theme_parks_record)
            .collect();

        if records.len() < total {
            tracing::debug!(
                source = self.name(),
                skipped = total - records.len(),
                "skipped records without usable coordinates"
            );
        }
        Ok(records)
    }
}

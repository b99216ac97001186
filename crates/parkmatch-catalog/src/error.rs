use thiserror::Error;

/// Errors produced while fetching or decoding a park catalog.
///
/// `Network` and `UnexpectedStatus` together mean "source unavailable";
/// [`crate::ParkAggregator`] downgrades every variant except `EmptyResult`
/// to an empty list for the failing source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no known response shape matched {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupted data in {context}: {reason}")]
    DataCorrupted { context: String, reason: String },

    #[error("every catalog source returned nothing")]
    EmptyResult,
}

impl CatalogError {
    /// True for transport failures and non-2xx responses.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::UnexpectedStatus { .. })
    }
}

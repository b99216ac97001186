use thiserror::Error;

/// Errors returned by the search client, image downloader and disk cache.
///
/// Callers of the high-level lookups on [`crate::ImageDiskCache`] never see
/// these: a failed image is logged and skipped.
#[derive(Debug, Error)]
pub enum ImageryError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Downloaded bytes could not be decoded, or the thumbnail not encoded.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking image task panicked or was cancelled.
    #[error("image task failed: {0}")]
    Task(String),
}

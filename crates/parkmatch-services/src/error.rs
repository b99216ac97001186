use std::time::Duration;

use parkmatch_catalog::CatalogError;
use parkmatch_imagery::ImageryError;
use thiserror::Error;

/// Failure to obtain the device position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No callback arrived before the deadline.
    #[error("no location fix within {0:?}")]
    Timeout(Duration),

    /// The bridge was dropped while a request was pending.
    #[error("location request cancelled")]
    Cancelled,

    /// The platform reported an error.
    #[error("location provider failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Imagery(#[from] ImageryError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("tracing setup failed: {0}")]
    Telemetry(String),
}

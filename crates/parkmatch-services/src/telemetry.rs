use tracing_subscriber::EnvFilter;

use crate::error::ServicesError;

/// Filter from `RUST_LOG`, or `fallback_level` when it is unset or invalid.
///
/// # Errors
///
/// Returns [`ServicesError::Telemetry`] if `fallback_level` is not a valid
/// filter directive either.
pub fn env_filter(fallback_level: &str) -> Result<EnvFilter, ServicesError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .map_err(|e| ServicesError::Telemetry(e.to_string()))
}

/// Installs the global `fmt` subscriber. Call once from the host process.
///
/// # Errors
///
/// Returns [`ServicesError::Telemetry`] for an invalid filter or when a
/// global subscriber is already installed.
pub fn init_tracing(fallback_level: &str) -> Result<(), ServicesError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_level)?)
        .try_init()
        .map_err(|e| ServicesError::Telemetry(e.to_string()))
}

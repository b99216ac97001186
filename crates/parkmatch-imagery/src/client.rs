use std::time::Duration;

use reqwest::Client;

use crate::error::ImageryError;

/// Builds the HTTP client shared by search and image downloads.
///
/// # Errors
///
/// Returns [`ImageryError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed.
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ImageryError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

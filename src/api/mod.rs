pub mod nobitex;
pub mod rates;

use thiserror::Error;

/// Errors shared by the upstream API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error ({0}): {1}")]
    Http(u16, String),
    #[error("Failed to parse response: {0}")]
    Deserialization(String),
    #[error("Upstream returned status '{0}'")]
    UpstreamStatus(String),
}

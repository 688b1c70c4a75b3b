use std::time::Duration;

use reqwest::Client as HttpClient;

use super::models::PriceSnapshot;
use crate::api::ApiError;

/// Client for the sectioned fiat/gold rates endpoint
pub struct RatesClient {
    http_client: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl RatesClient {
    const DEFAULT_BASE_URL: &'static str = "https://apiarz.qprjz.workers.dev/";

    /// Create a new rates client against the default endpoint
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string(), timeout)
    }

    /// Create a new client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            timeout,
        }
    }

    /// Fetch one full snapshot of the rates document
    pub async fn fetch_snapshot(&self) -> Result<PriceSnapshot, ApiError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body_text));
        }

        response
            .json::<PriceSnapshot>()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

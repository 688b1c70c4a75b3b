use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use super::models::{OrderbookEntry, SingleOrderbookResponse};
use crate::api::ApiError;

/// Client for the crypto exchange order book endpoints
pub struct NobitexClient {
    http_client: HttpClient,
    all_url: String,
    single_url: String,
    timeout: Duration,
}

impl NobitexClient {
    const DEFAULT_ALL_URL: &'static str = "https://api.nobitex.ir/v3/orderbook/all";
    const DEFAULT_SINGLE_URL: &'static str = "https://api.nobitex.ir/v3/orderbook/";

    /// Create a new client against the default endpoints
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_urls(
            Self::DEFAULT_ALL_URL.to_string(),
            Self::DEFAULT_SINGLE_URL.to_string(),
            timeout,
        )
    }

    /// Create a new client with custom endpoint URLs (for testing)
    pub fn with_base_urls(all_url: String, single_url: String, timeout: Duration) -> Self {
        Self {
            http_client: HttpClient::new(),
            all_url,
            single_url,
            timeout,
        }
    }

    /// Fetch order books for every trading pair in one bulk request.
    ///
    /// The response is a flat map of symbol to order book plus a `status`
    /// field that must be `"ok"`.
    pub async fn fetch_all(&self) -> Result<HashMap<String, OrderbookEntry>, ApiError> {
        let response = self
            .http_client
            .get(&self.all_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body_text));
        }

        let mut body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Self::check_upstream_status(&body)?;

        // Drop the status field, everything left is symbol -> order book
        if let Some(map) = body.as_object_mut() {
            map.remove("status");
        }
        serde_json::from_value::<HashMap<String, OrderbookEntry>>(body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Fetch the order book for a single trading pair
    pub async fn fetch_symbol(&self, symbol: &str) -> Result<OrderbookEntry, ApiError> {
        let url = format!("{}{}", self.single_url, symbol);
        let response = self
            .http_client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body_text));
        }

        let body = response
            .json::<SingleOrderbookResponse>()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        match body.status.as_deref() {
            Some("ok") => Ok(body.entry),
            other => Err(ApiError::UpstreamStatus(
                other.unwrap_or("missing").to_string(),
            )),
        }
    }

    fn check_upstream_status(body: &Value) -> Result<(), ApiError> {
        match body.get("status").and_then(Value::as_str) {
            Some("ok") => Ok(()),
            Some(other) => Err(ApiError::UpstreamStatus(other.to_string())),
            None => Err(ApiError::UpstreamStatus("missing".to_string())),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One trading pair's order book state from the crypto exchange.
///
/// Prices arrive as decimal strings; order levels are `[price, amount]`
/// string pairs sorted best-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderbookEntry {
    #[serde(rename = "lastUpdate", default)]
    pub last_update: Option<i64>,
    #[serde(rename = "lastTradePrice", default)]
    pub last_trade_price: Option<String>,
    #[serde(default)]
    pub asks: Vec<(String, String)>,
    #[serde(default)]
    pub bids: Vec<(String, String)>,
}

impl OrderbookEntry {
    pub fn parsed_last_price(&self) -> Option<f64> {
        self.last_trade_price
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
    }

    /// Best (price, amount) level of the given side, skipping
    /// unparseable entries
    pub fn best_level(levels: &[(String, String)]) -> Option<(f64, f64)> {
        levels.first().and_then(|(price, amount)| {
            let price = price.trim().parse::<f64>().ok()?;
            let amount = amount.trim().parse::<f64>().ok()?;
            Some((price, amount))
        })
    }
}

/// Response of the per-symbol order book endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SingleOrderbookResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub entry: OrderbookEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_response_deserialization() {
        let body = r#"{
            "status": "ok",
            "lastUpdate": 1715000000000,
            "lastTradePrice": "959000000",
            "asks": [["960000000", "0.012"], ["961000000", "0.5"]],
            "bids": [["958000000", "0.02"]]
        }"#;

        let response: SingleOrderbookResponse = serde_json::from_str(body).expect("parse failed");
        assert_eq!(response.status.as_deref(), Some("ok"));
        assert_eq!(response.entry.parsed_last_price(), Some(959_000_000.0));
        assert_eq!(
            OrderbookEntry::best_level(&response.entry.asks),
            Some((960_000_000.0, 0.012))
        );
    }

    #[test]
    fn test_garbage_level_skipped() {
        let entry = OrderbookEntry {
            asks: vec![("oops".to_string(), "1".to_string())],
            ..Default::default()
        };
        assert_eq!(OrderbookEntry::best_level(&entry.asks), None);
    }
}

use serde::{Deserialize, Serialize};

/// One polled capture of the whole rates document.
///
/// Published as `Arc<PriceSnapshot>` by the currency cache and never
/// mutated afterwards; a new poll replaces the whole snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSnapshot {
    #[serde(rename = "mainCurrencies", default)]
    pub main_currencies: CurrencySection,
    #[serde(rename = "minorCurrencies", default)]
    pub minor_currencies: CurrencySection,
    #[serde(rename = "GoldType", default)]
    pub gold: CurrencySection,
    /// Opaque display string from the upstream, not a parseable instant
    #[serde(rename = "lastUpdate", default)]
    pub last_update: Option<String>,
}

/// One named section of the rates document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencySection {
    #[serde(default)]
    pub data: Vec<CurrencyQuote>,
}

/// One instrument's state as delivered by the rates endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyQuote {
    /// Display name, the primary lookup key within a section
    #[serde(rename = "currencyName", default)]
    pub currency_name: String,
    #[serde(rename = "currencySymbol", default)]
    pub currency_symbol: Option<String>,
    #[serde(rename = "currencyCode", default)]
    pub currency_code: Option<String>,
    #[serde(rename = "livePrice", default)]
    pub live_price: Option<RawPrice>,
    #[serde(rename = "lowPrice", default)]
    pub low_price: Option<RawPrice>,
    #[serde(rename = "highPrice", default)]
    pub high_price: Option<RawPrice>,
    /// Change descriptor string, format `(±X.XX%) ±value`
    #[serde(default)]
    pub change: Option<String>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: Option<String>,
}

impl CurrencyQuote {
    /// Live price as a number, or None when missing/unparseable
    pub fn parsed_price(&self) -> Option<f64> {
        self.live_price.as_ref().and_then(RawPrice::as_f64)
    }
}

/// A price field that arrives either as a JSON number or as a
/// comma-formatted string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawPrice::Number(n) => Some(*n),
            RawPrice::Text(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialization() {
        let body = r#"{
            "mainCurrencies": {"data": [
                {"currencyName": "دلار", "livePrice": "58,000", "change": "(0.35%) 200", "lastUpdate": "14:30"}
            ]},
            "minorCurrencies": {"data": []},
            "GoldType": {"data": [{"currencyName": "مثقال طلا", "livePrice": 28500000}]},
            "lastUpdate": "1403/01/01 14:30"
        }"#;

        let snapshot: PriceSnapshot = serde_json::from_str(body).expect("parse failed");
        assert_eq!(snapshot.main_currencies.data.len(), 1);
        assert_eq!(snapshot.main_currencies.data[0].parsed_price(), Some(58_000.0));
        assert_eq!(snapshot.gold.data[0].parsed_price(), Some(28_500_000.0));
        assert_eq!(snapshot.last_update.as_deref(), Some("1403/01/01 14:30"));
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let snapshot: PriceSnapshot = serde_json::from_str("{}").expect("parse failed");
        assert!(snapshot.main_currencies.data.is_empty());
        assert!(snapshot.last_update.is_none());
    }

    #[test]
    fn test_unparseable_price_is_none() {
        let quote = CurrencyQuote {
            live_price: Some(RawPrice::Text("n/a".to_string())),
            ..Default::default()
        };
        assert_eq!(quote.parsed_price(), None);
    }
}

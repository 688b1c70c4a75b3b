pub mod client;
pub mod models;

pub use client::RatesClient;
pub use models::{CurrencyQuote, CurrencySection, PriceSnapshot};

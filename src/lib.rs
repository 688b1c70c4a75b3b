//! Narkhbot - currency, gold and crypto rates bot core
//!
//! Background price caches plus the free-text resolution and conversion
//! engine. The chat transport consumes this crate and renders what it
//! returns.

pub mod api;
pub mod cache;
pub mod config;
pub mod services;
pub mod utils;

// Re-export the long-lived pieces the composition root wires together
pub use cache::{CryptoCache, CurrencyCache};
pub use config::Config;

pub mod crypto_cache;
pub mod currency_cache;
pub mod symbols;

pub use crypto_cache::{CryptoCache, CryptoSymbolState};
pub use currency_cache::CurrencyCache;
pub use symbols::CryptoInfo;

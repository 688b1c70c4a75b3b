use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::nobitex::{NobitexClient, OrderbookEntry};
use crate::cache::symbols::{self, CryptoInfo, WATCHLIST};

/// Cached state of one watch-list trading pair.
///
/// All prices are in Tomans: IRT-quoted pairs arrive from the upstream
/// in Rials and are divided by 10 once, here, when the record is built.
#[derive(Debug, Clone)]
pub struct CryptoSymbolState {
    pub symbol: String,
    pub last_trade_price: Option<f64>,
    /// Last trade price of the immediately preceding poll, None on
    /// first population
    pub previous_price: Option<f64>,
    pub price_change: Option<f64>,
    pub price_change_percent: Option<f64>,
    pub best_ask: Option<(f64, f64)>,
    pub best_bid: Option<(f64, f64)>,
    /// Upstream update time in epoch milliseconds
    pub last_update: Option<i64>,
    pub captured_at: Instant,
    /// True when the record came from the per-symbol fallback path
    /// rather than the bulk poll
    pub via_fallback: bool,
}

/// Background-refreshed cache of crypto order-book records, keyed by
/// trading-pair symbol.
///
/// Each cycle tries one bulk request for the whole watch-list; when that
/// fails it degrades to sequential per-symbol requests, where one
/// symbol's failure never aborts the rest.
pub struct CryptoCache {
    inner: Arc<Inner>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    client: NobitexClient,
    update_interval: Duration,
    records: RwLock<HashMap<String, CryptoSymbolState>>,
    last_update: RwLock<Option<DateTime<Utc>>>,
    running: AtomicBool,
    shutdown: Notify,
}

impl CryptoCache {
    pub fn new(client: NobitexClient, update_interval: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                update_interval,
                records: RwLock::new(HashMap::new()),
                last_update: RwLock::new(None),
                running: AtomicBool::new(false),
                shutdown: Notify::new(),
            }),
            handle: Mutex::new(None),
        }
    }

    /// Start the background update task
    pub fn start(&self) {
        self.inner.running.store(true, Ordering::SeqCst);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            Self::update_loop(inner).await;
        });
        if let Ok(mut slot) = self.handle.lock() {
            *slot = Some(handle);
        }
        info!("Crypto cache update task started");
    }

    /// Signal the update task to exit and wait for it to terminate
    pub async fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        // notify_one stores a permit, so the task wakes even if it is
        // mid-poll rather than parked in the sleep
        self.inner.shutdown.notify_one();
        let handle = self.handle.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        info!("Crypto cache update task stopped");
    }

    /// Cached record for one symbol
    pub fn get_data(&self, symbol: &str) -> Option<CryptoSymbolState> {
        self.inner
            .records
            .read()
            .ok()
            .and_then(|records| records.get(symbol).cloned())
    }

    /// Snapshot of every cached record
    pub fn get_all(&self) -> HashMap<String, CryptoSymbolState> {
        self.inner
            .records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// All symbols currently present in the cache
    pub fn symbols(&self) -> Vec<String> {
        self.inner
            .records
            .read()
            .map(|records| records.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Display info for a bare base symbol (e.g. "BTC"); never fails
    pub fn get_crypto_info(&self, base_symbol: &str) -> CryptoInfo {
        symbols::crypto_info(base_symbol)
    }

    /// Wall-clock time of the last completed update cycle
    pub fn last_update_time(&self) -> Option<DateTime<Utc>> {
        self.inner.last_update.read().ok().and_then(|guard| *guard)
    }

    /// Fetch and cache one symbol immediately, outside the scheduled
    /// interval. Used when a requested symbol is not in the cache yet.
    pub async fn refresh_symbol(&self, symbol: &str) -> Option<CryptoSymbolState> {
        match self.inner.client.fetch_symbol(symbol).await {
            Ok(entry) => {
                Self::apply_entry(&self.inner, symbol, &entry, true);
                self.get_data(symbol)
            }
            Err(e) => {
                warn!("On-demand refresh failed for {}: {}", symbol, e);
                None
            }
        }
    }

    async fn update_loop(inner: Arc<Inner>) {
        while inner.running.load(Ordering::SeqCst) {
            Self::update_once(&inner).await;
            tokio::select! {
                _ = inner.shutdown.notified() => break,
                _ = tokio::time::sleep(inner.update_interval) => {}
            }
        }
    }

    async fn update_once(inner: &Inner) {
        debug!("Updating crypto cache...");
        match inner.client.fetch_all().await {
            Ok(books) => {
                let mut updated = 0usize;
                for (symbol, entry) in &books {
                    if !WATCHLIST.contains(&symbol.as_str()) {
                        continue;
                    }
                    Self::apply_entry(inner, symbol, entry, false);
                    updated += 1;
                }
                Self::mark_cycle_complete(inner);
                info!("Crypto cache updated with {} symbols", updated);
            }
            Err(e) => {
                warn!(
                    "Bulk crypto fetch failed ({}), falling back to per-symbol updates",
                    e
                );
                let mut updated = 0usize;
                for symbol in WATCHLIST {
                    match inner.client.fetch_symbol(symbol).await {
                        Ok(entry) => {
                            Self::apply_entry(inner, symbol, &entry, true);
                            updated += 1;
                        }
                        Err(e) => {
                            warn!("Per-symbol update failed for {}: {}", symbol, e);
                        }
                    }
                }
                Self::mark_cycle_complete(inner);
                info!("Crypto cache updated with {} symbols via fallback", updated);
            }
        }
    }

    /// Build and store one symbol's record. The write lock covers only
    /// this record's read-modify-write, never a network call.
    fn apply_entry(inner: &Inner, symbol: &str, entry: &OrderbookEntry, via_fallback: bool) {
        let divisor = rial_divisor(symbol);
        let current_price = entry.parsed_last_price().map(|p| p / divisor);
        let best_ask = OrderbookEntry::best_level(&entry.asks).map(|(p, a)| (p / divisor, a));
        let best_bid = OrderbookEntry::best_level(&entry.bids).map(|(p, a)| (p / divisor, a));

        let mut records = match inner.records.write() {
            Ok(records) => records,
            Err(_) => return,
        };
        let previous_price = records
            .get(symbol)
            .and_then(|record| record.last_trade_price);

        let price_change = match (previous_price, current_price) {
            (Some(prev), Some(cur)) => Some(cur - prev),
            _ => None,
        };
        let price_change_percent = match (previous_price, price_change) {
            (Some(prev), Some(change)) if prev != 0.0 => Some(change / prev * 100.0),
            _ => None,
        };

        records.insert(
            symbol.to_string(),
            CryptoSymbolState {
                symbol: symbol.to_string(),
                last_trade_price: current_price,
                previous_price,
                price_change,
                price_change_percent,
                best_ask,
                best_bid,
                last_update: entry.last_update,
                captured_at: Instant::now(),
                via_fallback,
            },
        );
    }

    fn mark_cycle_complete(inner: &Inner) {
        if let Ok(mut guard) = inner.last_update.write() {
            *guard = Some(Utc::now());
        }
    }
}

/// IRT pairs are quoted in Rials upstream; everything cached is in
/// Tomans (10 Rials)
fn rial_divisor(symbol: &str) -> f64 {
    if symbol.ends_with("IRT") {
        10.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_for_tests() -> CryptoCache {
        let client = NobitexClient::with_base_urls(
            "http://127.0.0.1:1/all".to_string(),
            "http://127.0.0.1:1/single/".to_string(),
            Duration::from_millis(50),
        );
        CryptoCache::new(client, Duration::from_secs(60))
    }

    fn entry(price: &str) -> OrderbookEntry {
        OrderbookEntry {
            last_update: Some(1_715_000_000_000),
            last_trade_price: Some(price.to_string()),
            asks: vec![(price.to_string(), "0.5".to_string())],
            bids: vec![(price.to_string(), "0.25".to_string())],
        }
    }

    #[test]
    fn test_delta_between_consecutive_polls() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("100"), false);
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("110"), false);

        let record = cache.get_data("BTCUSDT").expect("record missing");
        assert_eq!(record.last_trade_price, Some(110.0));
        assert_eq!(record.previous_price, Some(100.0));
        assert_eq!(record.price_change, Some(10.0));
        assert_eq!(record.price_change_percent, Some(10.0));
    }

    #[test]
    fn test_first_population_has_no_delta() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("100"), false);

        let record = cache.get_data("BTCUSDT").expect("record missing");
        assert_eq!(record.previous_price, None);
        assert_eq!(record.price_change, None);
        assert_eq!(record.price_change_percent, None);
    }

    #[test]
    fn test_zero_previous_price_skips_percent() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("0"), false);
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("50"), false);

        let record = cache.get_data("BTCUSDT").expect("record missing");
        assert_eq!(record.price_change, Some(50.0));
        assert_eq!(record.price_change_percent, None);
    }

    #[test]
    fn test_irt_prices_normalized_to_toman_once() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "BTCIRT", &entry("1000"), false);

        let record = cache.get_data("BTCIRT").expect("record missing");
        assert_eq!(record.last_trade_price, Some(100.0));
        assert_eq!(record.best_ask.map(|(p, _)| p), Some(100.0));
        assert_eq!(record.best_bid.map(|(p, _)| p), Some(100.0));

        // The next poll's delta is computed against the already
        // normalized previous price
        CryptoCache::apply_entry(&cache.inner, "BTCIRT", &entry("1100"), false);
        let record = cache.get_data("BTCIRT").expect("record missing");
        assert_eq!(record.previous_price, Some(100.0));
        assert_eq!(record.last_trade_price, Some(110.0));
        assert_eq!(record.price_change, Some(10.0));
    }

    #[test]
    fn test_usdt_prices_not_divided() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "ETHUSDT", &entry("2500"), false);
        let record = cache.get_data("ETHUSDT").expect("record missing");
        assert_eq!(record.last_trade_price, Some(2500.0));
    }

    #[test]
    fn test_fallback_flag() {
        let cache = cache_for_tests();
        CryptoCache::apply_entry(&cache.inner, "BTCUSDT", &entry("100"), false);
        assert!(!cache.get_data("BTCUSDT").expect("record missing").via_fallback);

        CryptoCache::apply_entry(&cache.inner, "ETHUSDT", &entry("2500"), true);
        assert!(cache.get_data("ETHUSDT").expect("record missing").via_fallback);
    }

    #[test]
    fn test_get_data_missing_symbol() {
        let cache = cache_for_tests();
        assert!(cache.get_data("BTCUSDT").is_none());
        assert!(cache.get_all().is_empty());
    }

    #[tokio::test]
    async fn test_stop_terminates_update_task() {
        let cache = cache_for_tests();
        cache.start();
        cache.stop().await;
        assert!(cache
            .handle
            .lock()
            .expect("handle lock poisoned")
            .is_none());
    }
}

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use narkhbot::api::nobitex::NobitexClient;
use narkhbot::api::rates::RatesClient;
use narkhbot::{Config, CryptoCache, CurrencyCache};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("narkhbot=debug".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting narkhbot core...");

    let config = Config::from_env();
    info!(
        "Polling every {}s (HTTP timeout {}s)",
        config.update_interval.as_secs(),
        config.http_timeout.as_secs()
    );

    // The caches are owned here and handed out as Arc handles; there are
    // no global singletons
    let currency_cache = Arc::new(CurrencyCache::new(
        RatesClient::with_base_url(config.rates_api_url.clone(), config.http_timeout),
        config.update_interval,
    ));
    let crypto_cache = Arc::new(CryptoCache::new(
        NobitexClient::with_base_urls(
            config.crypto_api_all_url.clone(),
            config.crypto_api_single_url.clone(),
            config.http_timeout,
        ),
        config.update_interval,
    ));

    currency_cache.start();
    crypto_cache.start();
    info!("Caches started, press Ctrl-C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }

    info!("Shutting down...");
    currency_cache.stop().await;
    crypto_cache.stop().await;
}

use std::time::Duration;

/// Runtime configuration, read once at startup from the environment
/// (with `.env` support). Every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub rates_api_url: String,
    pub crypto_api_all_url: String,
    pub crypto_api_single_url: String,
    /// Fixed poll interval shared by both caches
    pub update_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rates_api_url: env_or("RATES_API_URL", "https://apiarz.qprjz.workers.dev/"),
            crypto_api_all_url: env_or(
                "CRYPTO_API_ALL_URL",
                "https://api.nobitex.ir/v3/orderbook/all",
            ),
            crypto_api_single_url: env_or(
                "CRYPTO_API_SINGLE_URL",
                "https://api.nobitex.ir/v3/orderbook/",
            ),
            update_interval: Duration::from_secs(env_secs("CACHE_UPDATE_INTERVAL", 60)),
            http_timeout: Duration::from_secs(env_secs("HTTP_TIMEOUT_SECS", 30)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vars_fall_back_to_defaults() {
        assert_eq!(env_or("NARKHBOT_UNSET_TEST_VAR", "fallback"), "fallback");
        assert_eq!(env_secs("NARKHBOT_UNSET_TEST_VAR", 60), 60);
    }
}

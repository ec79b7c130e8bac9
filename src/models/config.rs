//! Configuration module
//!
//! The process environment is read exactly once, in [`AppConfig::from_env`].
//! Provider clients only ever see the resulting [`ProviderConfig`], so tests
//! can point them at mock servers without touching env vars.

use std::time::Duration;
use tracing::info;

use crate::utils::constants::{
    COINGECKO_API_URL, DEFAULT_HOST, DEFAULT_PORT, ETHERSCAN_API_URL, MESSARI_API_URL,
    PLACEHOLDER_API_KEY, UPSTREAM_TIMEOUT,
};

/// Upstream endpoints and credentials injected into the provider clients
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub coingecko_url: String,
    pub etherscan_url: String,
    pub messari_url: String,
    /// Etherscan key; enrichment is skipped entirely without it
    pub etherscan_api_key: Option<String>,
    /// Messari key; requests go out unauthenticated without it
    pub messari_api_key: Option<String>,
    /// Per-call ceiling, single attempt
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            coingecko_url: COINGECKO_API_URL.to_string(),
            etherscan_url: ETHERSCAN_API_URL.to_string(),
            messari_url: MESSARI_API_URL.to_string(),
            etherscan_api_key: None,
            messari_api_key: None,
            timeout: UPSTREAM_TIMEOUT,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub providers: ProviderConfig,
    /// Only reported by `/test`; no database is used
    pub database_url: Option<String>,
    /// Only reported by `/test`; no database is used
    pub database_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            providers: ProviderConfig::default(),
            database_url: None,
            database_name: None,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProviderConfig::default();
        let providers = ProviderConfig {
            coingecko_url: non_empty(lookup("COINGECKO_API_URL")).unwrap_or(defaults.coingecko_url),
            etherscan_url: non_empty(lookup("ETHERSCAN_API_URL")).unwrap_or(defaults.etherscan_url),
            messari_url: non_empty(lookup("MESSARI_API_URL")).unwrap_or(defaults.messari_url),
            etherscan_api_key: api_key(lookup("ETHERSCAN_API_KEY")),
            messari_api_key: api_key(lookup("MESSARI_API_KEY")),
            timeout: defaults.timeout,
        };

        // Keys are NEVER logged
        if providers.etherscan_api_key.is_some() {
            info!("🔑 ETHERSCAN_API_KEY configured (key hidden)");
        }
        if providers.messari_api_key.is_some() {
            info!("🔑 MESSARI_API_KEY configured (key hidden)");
        }

        Self {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            providers,
            database_url: non_empty(lookup("DATABASE_URL")),
            database_name: non_empty(lookup("DATABASE_NAME")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn api_key(value: Option<String>) -> Option<String> {
    non_empty(value).filter(|k| k != PLACEHOLDER_API_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.providers.coingecko_url, COINGECKO_API_URL);
        assert!(config.providers.etherscan_api_key.is_none());
        assert_eq!(config.providers.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_port_and_keys() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("ETHERSCAN_API_KEY", "abc"),
            ("MESSARI_API_KEY", ""),
            ("DATABASE_NAME", "crypto"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.providers.etherscan_api_key.as_deref(), Some("abc"));
        assert!(config.providers.messari_api_key.is_none());
        assert_eq!(config.database_name.as_deref(), Some("crypto"));
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_placeholder_key_is_unset() {
        let config = config_from(&[("ETHERSCAN_API_KEY", "YOUR_API_KEY")]);
        assert!(config.providers.etherscan_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 8000);
    }
}

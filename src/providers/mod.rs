//! Providers Module - External Data Sources
//!
//! CoinGecko is the primary source; Etherscan and Messari are enrichment
//! sources whose failures degrade to null fields.

pub mod coingecko;
pub mod etherscan;
pub mod messari;

pub use coingecko::*;
pub use etherscan::*;
pub use messari::*;

use eyre::{eyre, Result};
use reqwest::Url;

use crate::models::ProviderConfig;
use crate::utils::constants::USER_AGENT;

/// All upstream clients, sharing one connection pool
#[derive(Debug, Clone)]
pub struct Providers {
    pub coingecko: CoinGeckoClient,
    pub etherscan: EtherscanClient,
    pub messari: MessariClient,
}

impl Providers {
    /// Build every client from injected configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            coingecko: CoinGeckoClient::new(client.clone(), config.coingecko_url.clone(), config.timeout),
            etherscan: EtherscanClient::new(
                client.clone(),
                config.etherscan_url.clone(),
                config.etherscan_api_key.clone(),
                config.timeout,
            ),
            messari: MessariClient::new(
                client,
                config.messari_url.clone(),
                config.messari_api_key.clone(),
                config.timeout,
            ),
        })
    }
}

/// Append path segments to a provider base URL.
///
/// Each segment is percent-encoded on its own, so caller input such as a
/// symbol or coin id can never add segments, a query or a fragment.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| eyre!("Invalid provider URL {}: {}", base_url, e))?;
    url.path_segments_mut()
        .map_err(|_| eyre!("Provider URL cannot take a path: {}", base_url))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_appends_segments() {
        let url = endpoint_url("https://api.coingecko.com/api/v3", &["coins", "bitcoin"]).unwrap();
        assert_eq!(url.as_str(), "https://api.coingecko.com/api/v3/coins/bitcoin");

        let url = endpoint_url("https://api.coingecko.com/api/v3/", &["search"]).unwrap();
        assert_eq!(url.as_str(), "https://api.coingecko.com/api/v3/search");
    }

    #[test]
    fn test_endpoint_url_encodes_reserved_characters() {
        let url = endpoint_url("http://localhost/api", &["v2", "assets", "#btc", "profile"]).unwrap();
        assert_eq!(url.path(), "/api/v2/assets/%23btc/profile");
        assert_eq!(url.fragment(), None);

        let url = endpoint_url("http://localhost/api", &["coins", "a/b?c"]).unwrap();
        assert_eq!(url.path(), "/api/coins/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_endpoint_url_rejects_bad_base() {
        assert!(endpoint_url("not a url", &["search"]).is_err());
        assert!(endpoint_url("mailto:ops@example.com", &["search"]).is_err());
    }
}

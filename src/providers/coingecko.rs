//! CoinGecko API Client - the primary source
//!
//! Every public endpoint except `/test` ends up here. Failures are NOT
//! swallowed: a 429 becomes [`ErrorCode::UpstreamRateLimited`], anything else
//! becomes [`ErrorCode::UpstreamError`] and aborts the request.
//!
//! API: https://api.coingecko.com/api/v3
//! Free tier, no API key required
//!
//! [`ErrorCode::UpstreamRateLimited`]: crate::models::ErrorCode::UpstreamRateLimited
//! [`ErrorCode::UpstreamError`]: crate::models::ErrorCode::UpstreamError

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoint_url;
use crate::models::{AppError, AppResult, MarketsParams};

/// CoinGecko API client
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CoinGeckoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// GET `{base_url}/{segments..}` and parse the JSON body.
    ///
    /// Single attempt, no retry. An unusable base URL is an internal error.
    pub async fn get(&self, segments: &[&str], query: &[(&str, String)]) -> AppResult<Value> {
        let url = endpoint_url(&self.base_url, segments)?;
        debug!(%url, params = query.len(), "CoinGecko request");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("⏳ CoinGecko rate limit hit on {}", url.path());
            return Err(AppError::rate_limited());
        }
        if !status.is_success() {
            return Err(AppError::upstream(format!("HTTP {} for url: {}", status, url)));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(body)
    }

    /// `/search?query=...`
    pub async fn search(&self, query: &str) -> AppResult<Value> {
        self.get(&["search"], &[("query", query.to_string())]).await
    }

    /// `/coins/markets` with the fixed order and change windows
    pub async fn markets(&self, params: &MarketsParams) -> AppResult<Value> {
        self.get(&["coins", "markets"], &params.to_query()).await
    }

    /// `/coins/{id}` with localization off and every data section on
    pub async fn coin(&self, coin_id: &str) -> AppResult<Value> {
        let flags = [
            ("localization", "false"),
            ("tickers", "true"),
            ("market_data", "true"),
            ("community_data", "true"),
            ("developer_data", "true"),
            ("sparkline", "true"),
        ]
        .map(|(k, v)| (k, v.to_string()));
        self.get(&["coins", coin_id], &flags).await
    }

    /// `/coins/{platform}/contract/{address}`
    pub async fn token_by_contract(&self, platform: &str, address: &str) -> AppResult<Value> {
        self.get(&["coins", platform, "contract", address], &[]).await
    }
}

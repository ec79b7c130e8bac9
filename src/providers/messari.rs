//! Messari API Client - asset profile enrichment
//!
//! Best-effort only. The key is optional: without it the request still goes
//! out unauthenticated and Messari may return a degraded profile.
//!
//! API: https://data.messari.io/api/v2/assets/{symbol}/profile

use eyre::{eyre, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoint_url;
use crate::models::{Enrichment, UnavailableReason};
use crate::utils::constants::MESSARI_API_KEY_HEADER;

/// Messari API client
#[derive(Debug, Clone)]
pub struct MessariClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl MessariClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    /// Profile JSON for an asset symbol
    pub async fn asset_profile(&self, symbol: &str) -> Enrichment<Value> {
        match self.fetch_profile(symbol).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("⚠️ Messari profile lookup failed for {}: {}", symbol, e);
                Enrichment::Unavailable(UnavailableReason::Transport(e.to_string()))
            }
        }
    }

    async fn fetch_profile(&self, symbol: &str) -> Result<Enrichment<Value>> {
        let url = endpoint_url(&self.base_url, &["v2", "assets", symbol, "profile"])?;
        debug!(%url, authenticated = self.api_key.is_some(), "Messari request");

        let mut request = self.client.get(url).timeout(self.timeout);
        if let Some(key) = &self.api_key {
            request = request.header(MESSARI_API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| eyre!("Messari request failed: {}", e))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("Messari has no profile for {}", symbol);
                Ok(Enrichment::Unavailable(UnavailableReason::NotFound))
            }
            status if !status.is_success() => {
                warn!("⚠️ Messari answered HTTP {} for {}", status, symbol);
                Ok(Enrichment::Unavailable(UnavailableReason::Rejected(format!("HTTP {}", status))))
            }
            _ => {
                let profile: Value = response
                    .json()
                    .await
                    .map_err(|e| eyre!("Failed to parse Messari response: {}", e))?;
                Ok(Enrichment::Available(profile))
            }
        }
    }
}

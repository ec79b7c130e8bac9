//! Etherscan API Client - supply enrichment
//!
//! Best-effort only: every failure collapses to
//! [`Enrichment::Unavailable`], never an error. Without an API key no
//! request is made at all.
//!
//! API: https://api.etherscan.io/api?module=stats&action=tokensupply

use eyre::{eyre, Result};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::{Enrichment, UnavailableReason};

/// Etherscan envelope: `{"status": "1", "message": "OK", "result": "..."}`
#[derive(Debug, Deserialize)]
struct EtherscanResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Value,
}

/// Etherscan API client
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl EtherscanClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            timeout,
        }
    }

    /// Raw total supply (numeric string, smallest unit) for an ERC-20 contract
    pub async fn token_supply(&self, contract_address: &str) -> Enrichment<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("Etherscan key not configured, skipping supply lookup");
            return Enrichment::Unavailable(UnavailableReason::MissingApiKey);
        };

        match self.fetch_supply(contract_address, api_key).await {
            Ok(supply) => supply,
            Err(e) => {
                warn!("⚠️ Etherscan supply lookup failed for {}: {}", contract_address, e);
                Enrichment::Unavailable(UnavailableReason::Transport(e.to_string()))
            }
        }
    }

    async fn fetch_supply(&self, contract_address: &str, api_key: &str) -> Result<Enrichment<String>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("module", "stats"),
                ("action", "tokensupply"),
                ("contractaddress", contract_address),
                ("apikey", api_key),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| eyre!("Etherscan request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("⚠️ Etherscan answered HTTP {} for {}", status, contract_address);
            return Ok(Enrichment::Unavailable(UnavailableReason::Rejected(format!("HTTP {}", status))));
        }

        let body: EtherscanResponse = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse Etherscan response: {}", e))?;

        Ok(interpret(body))
    }
}

fn interpret(body: EtherscanResponse) -> Enrichment<String> {
    if body.status != "1" {
        let reason = match body.result.as_str() {
            Some(detail) if !detail.is_empty() => format!("{}: {}", body.message, detail),
            _ => body.message,
        };
        warn!("⚠️ Etherscan rejected supply lookup: {}", reason);
        return Enrichment::Unavailable(UnavailableReason::Rejected(reason));
    }

    match body.result {
        Value::String(supply) => Enrichment::Available(supply),
        Value::Number(supply) => Enrichment::Available(supply.to_string()),
        other => Enrichment::Unavailable(UnavailableReason::Rejected(format!(
            "unexpected result: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> EtherscanResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_interpret_ok() {
        let body = parse(json!({"status": "1", "message": "OK", "result": "21000000000000000000000000"}));
        assert_eq!(
            interpret(body),
            Enrichment::Available("21000000000000000000000000".to_string())
        );
    }

    #[test]
    fn test_interpret_zero_supply_is_available() {
        let body = parse(json!({"status": "1", "message": "OK", "result": "0"}));
        assert_eq!(interpret(body), Enrichment::Available("0".to_string()));
    }

    #[test]
    fn test_interpret_failure_status() {
        let body = parse(json!({"status": "0", "message": "NOTOK", "result": "Invalid API Key"}));
        assert_eq!(
            interpret(body),
            Enrichment::Unavailable(UnavailableReason::Rejected("NOTOK: Invalid API Key".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_key_skips_request() {
        let client = EtherscanClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            None,
            Duration::from_secs(1),
        );
        assert_eq!(
            client.token_supply("0xdac17f958d2ee523a2206206994597c13d831ec7").await,
            Enrichment::Unavailable(UnavailableReason::MissingApiKey)
        );
    }
}

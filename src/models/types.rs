//! Core domain types

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_PER_PAGE, DEFAULT_VS_CURRENCY, MARKETS_ORDER, MAX_PER_PAGE, PRICE_CHANGE_WINDOWS,
};

// ============================================
// Enrichment results
// ============================================

/// Outcome of a best-effort enrichment call.
///
/// Enrichment providers never fail a request; they either deliver a value or
/// say why they could not.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment<T> {
    Available(T),
    Unavailable(UnavailableReason),
}

/// Why an enrichment source produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Credential not configured, no request issued
    MissingApiKey,
    /// Primary source gave no symbol, lookup not attempted
    MissingSymbol,
    /// Provider does not know the asset
    NotFound,
    /// Provider answered but rejected the request
    Rejected(String),
    /// Network, timeout or decode failure
    Transport(String),
}

impl<T> Enrichment<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Collapse into `Option`, dropping the reason
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Enrichment<U> {
        match self {
            Self::Available(value) => Enrichment::Available(f(value)),
            Self::Unavailable(reason) => Enrichment::Unavailable(reason),
        }
    }
}

// ============================================
// Token aggregation
// ============================================

/// Display-oriented flattening of a CoinGecko contract lookup.
/// Every field may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub contract_address: Option<String>,
    pub image: Option<String>,
    pub price_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub total_volume_usd: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub total_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub homepage: Option<String>,
    pub chat: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub description: Option<String>,
    pub twitter_followers: Option<u64>,
    pub telegram_users: Option<u64>,
    pub github_stars: Option<u64>,
    pub github_forks: Option<u64>,
    pub commit_count_4_weeks: Option<u64>,
}

/// Raw payloads from each provider, independently nullable
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedSources {
    pub coingecko: Option<Value>,
    pub etherscan: Option<Value>,
    pub messari: Option<Value>,
}

/// `/api/token/ethereum/{address}/full` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenFullReport {
    pub summary: TokenSummary,
    pub sources: AggregatedSources,
}

// ============================================
// Intent routing
// ============================================

/// Classified free-text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ContractLookup { address: String },
    MarketQuery { name: String },
}

/// `/api/ask` response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AskResponse {
    TokenFull { data: TokenFullReport },
    Markets { query: String, data: Value },
}

// ============================================
// Market data
// ============================================

/// Parameters for CoinGecko `/coins/markets`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketsParams {
    /// Comma-separated CoinGecko IDs
    #[serde(default)]
    pub ids: Option<String>,
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_sparkline", deserialize_with = "lenient_bool")]
    pub sparkline: bool,
}

fn default_vs_currency() -> String {
    DEFAULT_VS_CURRENCY.to_string()
}
fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
fn default_page() -> u32 {
    1
}
fn default_sparkline() -> bool {
    true
}

/// Boolean accepting the usual query-string spellings
/// (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n`, any case)
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientBool;

    impl<'de> de::Visitor<'de> for LenientBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean such as true, false, 1, 0, yes or no")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
                "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(LenientBool)
}

impl Default for MarketsParams {
    fn default() -> Self {
        Self {
            ids: None,
            vs_currency: default_vs_currency(),
            per_page: default_per_page(),
            page: default_page(),
            sparkline: default_sparkline(),
        }
    }
}

impl MarketsParams {
    /// Reject page sizes outside 1..=250 and pages below 1
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(AppError::invalid_parameter(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        if self.page < 1 {
            return Err(AppError::invalid_parameter("page must be at least 1"));
        }
        Ok(())
    }

    /// Query pairs sent upstream, with the fixed order and change windows
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", MARKETS_ORDER.to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
            ("price_change_percentage", PRICE_CHANGE_WINDOWS.to_string()),
        ];
        if let Some(ids) = self.ids.as_deref().filter(|ids| !ids.is_empty()) {
            query.push(("ids", ids.to_string()));
        }
        query
    }
}

/// Truncated `/search` result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub coins: Vec<Value>,
    pub exchanges: Vec<Value>,
    pub icos: Vec<Value>,
    pub categories: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enrichment_into_option() {
        let ok: Enrichment<u8> = Enrichment::Available(0);
        assert!(ok.is_available());
        assert_eq!(ok.into_option(), Some(0));

        let missing: Enrichment<u8> = Enrichment::Unavailable(UnavailableReason::MissingApiKey);
        assert!(!missing.is_available());
        assert_eq!(missing.into_option(), None);
    }

    #[test]
    fn test_ask_response_tagging() {
        let markets = AskResponse::Markets {
            query: "ethereum".to_string(),
            data: json!([]),
        };
        assert_eq!(
            serde_json::to_value(&markets).unwrap(),
            json!({"type": "markets", "query": "ethereum", "data": []})
        );

        let token = AskResponse::TokenFull {
            data: TokenFullReport {
                summary: TokenSummary::default(),
                sources: AggregatedSources::default(),
            },
        };
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["type"], "token_full");
        assert!(value["data"]["sources"]["etherscan"].is_null());
        assert!(value["data"]["summary"]["name"].is_null());
    }

    #[test]
    fn test_sparkline_accepts_common_spellings() {
        for raw in ["true", "True", "TRUE", "1", "yes", "on", "t", "Y"] {
            let params: MarketsParams = serde_json::from_value(json!({ "sparkline": raw })).unwrap();
            assert!(params.sparkline, "{} should be true", raw);
        }
        for raw in ["false", "False", "0", "no", "off", "f", "N"] {
            let params: MarketsParams = serde_json::from_value(json!({ "sparkline": raw })).unwrap();
            assert!(!params.sparkline, "{} should be false", raw);
        }

        let params: MarketsParams = serde_json::from_value(json!({ "sparkline": false })).unwrap();
        assert!(!params.sparkline);
        assert!(serde_json::from_value::<MarketsParams>(json!({ "sparkline": "maybe" })).is_err());
        assert!(serde_json::from_value::<MarketsParams>(json!({ "sparkline": 2 })).is_err());
    }

    #[test]
    fn test_markets_params_validation() {
        assert!(MarketsParams::default().validate().is_ok());

        let zero = MarketsParams { per_page: 0, ..Default::default() };
        assert!(zero.validate().is_err());

        let too_many = MarketsParams { per_page: 251, ..Default::default() };
        assert!(too_many.validate().is_err());

        let page_zero = MarketsParams { page: 0, ..Default::default() };
        assert!(page_zero.validate().is_err());
    }

    #[test]
    fn test_markets_query_omits_empty_ids() {
        let params = MarketsParams { ids: Some(String::new()), ..Default::default() };
        assert!(params.to_query().iter().all(|(k, _)| *k != "ids"));

        let params = MarketsParams { ids: Some("bitcoin,ethereum".to_string()), ..Default::default() };
        let query = params.to_query();
        assert!(query.contains(&("ids", "bitcoin,ethereum".to_string())));
        assert!(query.contains(&("order", "market_cap_desc".to_string())));
        assert!(query.contains(&("sparkline", "true".to_string())));
        assert!(query.contains(&("price_change_percentage", "1h,24h,7d".to_string())));
    }
}

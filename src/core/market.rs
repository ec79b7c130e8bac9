//! Market passthroughs: search, markets, coin detail, contract lookup
//!
//! Thin shaping over [`CoinGeckoClient`]; errors propagate unchanged.

use serde_json::Value;

use crate::models::{AppResult, MarketsParams, SearchResults};
use crate::providers::CoinGeckoClient;
use crate::utils::constants::{
    SEARCH_MAX_CATEGORIES, SEARCH_MAX_COINS, SEARCH_MAX_EXCHANGES, SEARCH_MAX_ICOS,
};
use crate::utils::json::take_array;

/// Only Ethereum contract lookups are exposed
pub const ETHEREUM_PLATFORM: &str = "ethereum";

/// Search and keep the top hits of each category, in upstream order
pub async fn search(coingecko: &CoinGeckoClient, query: &str) -> AppResult<SearchResults> {
    let data = coingecko.search(query).await?;
    Ok(truncate_search(&data))
}

pub fn truncate_search(data: &Value) -> SearchResults {
    SearchResults {
        coins: take_array(data, "coins", SEARCH_MAX_COINS),
        exchanges: take_array(data, "exchanges", SEARCH_MAX_EXCHANGES),
        icos: take_array(data, "icos", SEARCH_MAX_ICOS),
        categories: take_array(data, "categories", SEARCH_MAX_CATEGORIES),
    }
}

/// Validated `/coins/markets` passthrough
pub async fn markets(coingecko: &CoinGeckoClient, params: &MarketsParams) -> AppResult<Value> {
    params.validate()?;
    coingecko.markets(params).await
}

pub async fn coin_details(coingecko: &CoinGeckoClient, coin_id: &str) -> AppResult<Value> {
    coingecko.coin(coin_id).await
}

/// Raw CoinGecko contract lookup on Ethereum
pub async fn token_by_contract(coingecko: &CoinGeckoClient, address: &str) -> AppResult<Value> {
    coingecko.token_by_contract(ETHEREUM_PLATFORM, address).await
}

//! Token Aggregator - multi-source contract lookup
//!
//! 1. CoinGecko contract lookup (required, errors abort)
//! 2. Flatten into a [`TokenSummary`]
//! 3. If a symbol is known, Etherscan supply + Messari profile concurrently
//! 4. Return summary plus the raw per-source payloads

use serde_json::{json, Value};
use tracing::info;

use crate::core::market::token_by_contract;
use crate::models::{
    AggregatedSources, AppResult, Enrichment, TokenFullReport, TokenSummary, UnavailableReason,
};
use crate::providers::Providers;
use crate::utils::json::{f64_at, first_str_at, str_at, u64_at};

impl TokenSummary {
    /// Flatten a CoinGecko `/coins/{platform}/contract/{address}` payload
    pub fn from_coingecko(data: &Value) -> Self {
        Self {
            id: str_at(data, "id"),
            name: str_at(data, "name"),
            symbol: str_at(data, "symbol"),
            contract_address: str_at(data, "contract_address"),
            image: str_at(data, "image.large"),
            price_usd: f64_at(data, "market_data.current_price.usd"),
            market_cap_usd: f64_at(data, "market_data.market_cap.usd"),
            total_volume_usd: f64_at(data, "market_data.total_volume.usd"),
            price_change_percentage_24h: f64_at(data, "market_data.price_change_percentage_24h"),
            total_supply: f64_at(data, "market_data.total_supply"),
            circulating_supply: f64_at(data, "market_data.circulating_supply"),
            max_supply: f64_at(data, "market_data.max_supply"),
            homepage: first_str_at(data, "links.homepage"),
            chat: first_str_at(data, "links.chat_url"),
            github: first_str_at(data, "links.repos_url.github"),
            twitter: str_at(data, "links.twitter_screen_name"),
            description: str_at(data, "description.en"),
            twitter_followers: u64_at(data, "community_data.twitter_followers"),
            telegram_users: u64_at(data, "community_data.telegram_channel_user_count"),
            github_stars: u64_at(data, "developer_data.stars"),
            github_forks: u64_at(data, "developer_data.forks"),
            commit_count_4_weeks: u64_at(data, "developer_data.commit_count_4_weeks"),
        }
    }
}

/// Full lookup for an Ethereum contract address
pub async fn full_token_lookup(providers: &Providers, address: &str) -> AppResult<TokenFullReport> {
    let coingecko = token_by_contract(&providers.coingecko, address).await?;
    let summary = TokenSummary::from_coingecko(&coingecko);

    let (etherscan, messari) = match summary.symbol.as_deref().filter(|s| !s.is_empty()) {
        Some(symbol) => {
            let (supply, profile) = tokio::join!(
                providers.etherscan.token_supply(address),
                providers.messari.asset_profile(symbol),
            );
            (supply.map(|raw| json!({ "total_supply": raw })), profile)
        }
        None => {
            info!("No symbol for {}, skipping enrichment", address);
            (
                Enrichment::Unavailable(UnavailableReason::MissingSymbol),
                Enrichment::Unavailable(UnavailableReason::MissingSymbol),
            )
        }
    };

    info!(
        "🧩 Aggregated {} ({}): etherscan={}, messari={}",
        summary.name.as_deref().unwrap_or("Unknown"),
        address,
        etherscan.is_available(),
        messari.is_available()
    );

    Ok(TokenFullReport {
        summary,
        sources: AggregatedSources {
            coingecko: Some(coingecko),
            etherscan: etherscan.into_option(),
            messari: messari.into_option(),
        },
    })
}

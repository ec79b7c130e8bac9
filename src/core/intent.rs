//! Intent Router - free-text query classification
//!
//! Deliberately naive keyword matching. The phrase stripping is plain
//! substring search, so a coin whose name contains a trigger phrase will be
//! split too; callers rely on that behavior, keep it as is.

use tracing::info;

use crate::core::{aggregator::full_token_lookup, market};
use crate::models::{AppError, AppResult, AskResponse, Intent, MarketsParams};
use crate::providers::Providers;
use crate::utils::constants::{
    ASK_PER_PAGE, ASK_TOP_MATCHES, CONTRACT_ADDRESS_LENGTHS, DEFAULT_VS_CURRENCY, TRIGGER_PHRASES,
};

/// Classify a free-text query
pub fn classify(query: &str) -> Intent {
    let normalized = query.trim().to_lowercase();

    if is_contract_address(&normalized) {
        return Intent::ContractLookup { address: normalized };
    }

    Intent::MarketQuery {
        name: residual_name(&normalized),
    }
}

/// `0x` prefix and exactly 42 or 66 characters; the body is not checked
fn is_contract_address(normalized: &str) -> bool {
    normalized.starts_with("0x") && CONTRACT_ADDRESS_LENGTHS.contains(&normalized.chars().count())
}

/// Strip the first matching trigger phrase, splitting on its LAST occurrence
fn residual_name(normalized: &str) -> String {
    TRIGGER_PHRASES
        .iter()
        .find_map(|phrase| normalized.rsplit_once(*phrase))
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_else(|| normalized.to_string())
}

/// Classify and run the matching flow
pub async fn ask(providers: &Providers, query: &str) -> AppResult<AskResponse> {
    match classify(query) {
        Intent::ContractLookup { address } => {
            info!("🔍 Ask: contract lookup for {}", address);
            let data = full_token_lookup(providers, &address).await?;
            Ok(AskResponse::TokenFull { data })
        }
        Intent::MarketQuery { name } => {
            info!("🔍 Ask: market query for {:?}", name);
            let found = market::search(&providers.coingecko, &name).await?;

            let top_ids: Vec<&str> = found
                .coins
                .iter()
                .take(ASK_TOP_MATCHES)
                .filter_map(|coin| coin.get("id").and_then(|id| id.as_str()))
                .collect();
            if top_ids.is_empty() {
                return Err(AppError::no_matches());
            }

            let params = MarketsParams {
                ids: Some(top_ids.join(",")),
                vs_currency: DEFAULT_VS_CURRENCY.to_string(),
                per_page: ASK_PER_PAGE,
                page: 1,
                sparkline: true,
            };
            let data = market::markets(&providers.coingecko, &params).await?;

            Ok(AskResponse::Markets { query: name, data })
        }
    }
}

//! Crypto Intelligence Library
//!
//! Backend aggregator translating a small REST API into calls against
//! CoinGecko (primary), Etherscan and Messari (enrichment):
//! - Search, markets and coin detail passthroughs
//! - Multi-source token lookup with graceful degradation
//! - Naive free-text intent router (`/api/ask`)

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use api::{create_router, AppState};
pub use crate::core::{classify, full_token_lookup};
pub use models::{AppConfig, AppError, AppResult, ErrorCode, Intent, ProviderConfig};
pub use providers::{CoinGeckoClient, EtherscanClient, MessariClient, Providers};

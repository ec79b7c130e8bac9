//! API Request Handlers

use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    Json, Path, Query, State,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::types::*;
use crate::core::{aggregator, intent, market};
use crate::models::{AppConfig, AppResult, AskResponse, MarketsParams, SearchResults, TokenFullReport};
use crate::providers::Providers;
use crate::utils::constants::{
    APP_VERSION, MARK_DB_NOT_USED, MARK_NOT_CONNECTED, MARK_NOT_SET, MARK_RUNNING, MARK_SET,
    MSG_HELLO, MSG_ROOT,
};

/// Shared application state. Immutable after startup.
pub struct AppState {
    pub config: AppConfig,
    pub providers: Providers,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> eyre::Result<Self> {
        let providers = Providers::new(&config.providers)?;
        Ok(Self {
            config,
            providers,
            start_time: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Liveness & Diagnostics
// ============================================

pub async fn root() -> Json<MessageData> {
    Json(MessageData::new(MSG_ROOT))
}

pub async fn hello() -> Json<MessageData> {
    Json(MessageData::new(MSG_HELLO))
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Reports which credentials are configured; never connects anywhere
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsData> {
    let config = &state.config;
    let mark = |present: bool| (if present { MARK_SET } else { MARK_NOT_SET }).to_string();

    Json(DiagnosticsData {
        backend: MARK_RUNNING.to_string(),
        database: MARK_DB_NOT_USED.to_string(),
        database_url: mark(config.database_url.is_some()),
        database_name: mark(config.database_name.is_some()),
        etherscan_api_key: mark(config.providers.etherscan_api_key.is_some()),
        messari_api_key: mark(config.providers.messari_api_key.is_some()),
        connection_status: MARK_NOT_CONNECTED.to_string(),
        collections: Vec::new(),
    })
}

// ============================================
// Market Data
// ============================================

pub async fn search_assets(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchResults>> {
    let Query(SearchQuery { q }) = query?;
    let results = market::search(&state.providers.coingecko, &q).await?;
    info!("🔎 Search {:?}: {} coins", q, results.coins.len());
    Ok(Json(results))
}

pub async fn markets(
    State(state): State<Arc<AppState>>,
    params: Result<Query<MarketsParams>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(params) = params?;
    let data = market::markets(&state.providers.coingecko, &params).await?;
    Ok(Json(data))
}

pub async fn coin_details(
    State(state): State<Arc<AppState>>,
    Path(coin_id): Path<String>,
) -> AppResult<Json<Value>> {
    let data = market::coin_details(&state.providers.coingecko, &coin_id).await?;
    Ok(Json(data))
}

// ============================================
// Token Lookup
// ============================================

pub async fn token_by_contract(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> AppResult<Json<Value>> {
    let data = market::token_by_contract(&state.providers.coingecko, &address).await?;
    Ok(Json(data))
}

/// CoinGecko + Etherscan + Messari in one response
pub async fn token_full(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> AppResult<Json<TokenFullReport>> {
    let report = aggregator::full_token_lookup(&state.providers, &address).await?;
    Ok(Json(report))
}

// ============================================
// Intent Router
// ============================================

pub async fn ask_bot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(AskRequest { query }) = payload?;
    let response = intent::ask(&state.providers, &query).await?;
    Ok(Json(response))
}

//! API Request/Response Types
//!
//! Provider payloads are passed through as raw JSON; only the envelopes the
//! service itself owns are typed here.

use serde::{Deserialize, Serialize};

// ============================================
// Requests
// ============================================

/// `GET /api/search?q=...`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Coin or token search query (name or symbol)
    pub q: String,
}

/// `POST /api/ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

// ============================================
// Responses
// ============================================

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// `/test` diagnostics. Reports configuration only, connects to nothing.
#[derive(Debug, Serialize)]
pub struct DiagnosticsData {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub etherscan_api_key: String,
    pub messari_api_key: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

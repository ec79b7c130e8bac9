//! Constants Module - Single Source of Truth
//!
//! Upstream endpoints, timeouts, fixed client-facing messages and the
//! trigger phrases used by the intent router all live here.

use std::time::Duration;

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Crypto Intelligence API";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent on every upstream request
pub const USER_AGENT: &str = concat!("CryptoIntel/", env!("CARGO_PKG_VERSION"));

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

// ============================================
// UPSTREAM PROVIDERS
// ============================================

/// CoinGecko public API v3
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Etherscan API (module/action style)
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Messari data API
pub const MESSARI_API_URL: &str = "https://data.messari.io/api";

/// Single-attempt ceiling for every upstream call
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Header carrying the Messari credential
pub const MESSARI_API_KEY_HEADER: &str = "x-messari-api-key";

/// Placeholder value treated as "not configured"
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

// ============================================
// MARKETS
// ============================================

/// Fixed ordering for `/coins/markets`
pub const MARKETS_ORDER: &str = "market_cap_desc";

/// Fixed percentage-change windows for `/coins/markets`
pub const PRICE_CHANGE_WINDOWS: &str = "1h,24h,7d";

/// Default quote currency
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Default page size for `/api/markets`
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Upper bound CoinGecko accepts for `per_page`
pub const MAX_PER_PAGE: u32 = 250;

// Search truncation caps
pub const SEARCH_MAX_COINS: usize = 10;
pub const SEARCH_MAX_EXCHANGES: usize = 5;
pub const SEARCH_MAX_ICOS: usize = 5;
pub const SEARCH_MAX_CATEGORIES: usize = 10;

// ============================================
// INTENT ROUTER
// ============================================

/// Leading phrases stripped from market queries, checked in this order
pub const TRIGGER_PHRASES: [&str; 6] = ["price of ", "price ", "chart of ", "chart ", "show ", "info "];

/// Character lengths accepted as a contract address (20-byte and 32-byte hex)
pub const CONTRACT_ADDRESS_LENGTHS: [usize; 2] = [42, 66];

/// Number of search hits forwarded to the markets call
pub const ASK_TOP_MATCHES: usize = 5;

/// Page size used by the ask flow
pub const ASK_PER_PAGE: u32 = 5;

// ============================================
// CLIENT-FACING MESSAGES
// ============================================

pub const MSG_RATE_LIMITED: &str = "CoinGecko rate limit reached. Please try again shortly.";
pub const MSG_NO_MATCHES: &str = "No matching assets found";
pub const MSG_ROOT: &str = "Crypto Intelligence Backend Running";
pub const MSG_HELLO: &str = "Hello from the backend API!";

// Diagnostic markers for `/test`
pub const MARK_SET: &str = "✅ Set";
pub const MARK_NOT_SET: &str = "❌ Not Set";
pub const MARK_RUNNING: &str = "✅ Running";
pub const MARK_DB_NOT_USED: &str = "❌ Not Used (not required for this app)";
pub const MARK_NOT_CONNECTED: &str = "Not Connected";

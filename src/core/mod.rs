//! Core Module - Aggregation & Intent Routing
//!
//! Business logic on top of the provider clients: market passthroughs,
//! multi-source token aggregation and the free-text intent router.

pub mod aggregator;
pub mod intent;
pub mod market;

pub use aggregator::*;
pub use intent::*;
pub use market::*;

//! Utils Module - Helper Functions & Shared Utilities
//!
//! Constants and JSON helpers shared by providers, core and API layers.

pub mod constants;
pub mod json;

pub use constants::*;
pub use json::*;

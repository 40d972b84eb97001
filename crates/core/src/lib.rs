//! InvestiZen Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio analytics engine for InvestiZen together
//! with the holdings boundary that feeds it. It is storage-agnostic and
//! defines the repository trait implemented by the `storage-memory` crate.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod utils;

// Re-export common types from holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

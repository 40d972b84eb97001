//! Portfolio analytics engine.
//!
//! Holdings flow through valuation into allocation and risk scoring, and from
//! there into the alert and insight rules. Every function here reads an
//! immutable snapshot and returns fresh records.

pub mod alerts;
pub mod allocation;
pub mod analytics;
pub mod insights;
pub mod risk;
pub mod valuation;

pub use alerts::*;
pub use allocation::*;
pub use analytics::*;
pub use insights::*;
pub use risk::*;
pub use valuation::*;

#[cfg(test)]
pub(crate) mod test_support;

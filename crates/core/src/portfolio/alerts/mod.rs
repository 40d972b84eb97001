//! Threshold-based portfolio alerts.
//!
//! Rules are evaluated in a fixed order, and that order is the emission order:
//! crypto exposure, stock concentration, per-holding losses (input order),
//! allocation imbalance. Alert ids depend only on the rule and its subject, so
//! re-evaluating unchanged holdings yields the same ids with a new timestamp.

mod alert_engine;
mod alerts_model;

pub use alert_engine::AlertEngine;
pub use alerts_model::*;

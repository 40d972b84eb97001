//! Advisory insights derived from the holdings snapshot.

mod insight_engine;
mod insights_model;

pub use insight_engine::InsightEngine;
pub use insights_model::*;

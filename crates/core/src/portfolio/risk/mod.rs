//! Rule-based risk scoring.

mod risk_model;
mod risk_scorer;

pub use risk_model::*;
pub use risk_scorer::*;

//! Valuation of holdings: invested capital, current value, and profit/loss.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::*;
pub use valuation_model::*;

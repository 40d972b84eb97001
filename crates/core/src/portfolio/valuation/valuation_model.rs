//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::HoldingCategory;

/// Aggregate valuation over a set of holdings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    pub invested_total: Decimal,
    pub current_total: Decimal,
    pub profit_loss: Decimal,
    /// Zero when nothing is invested
    pub profit_loss_percent: Decimal,
}

/// Valuation of a single holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub holding_id: String,
    pub value: Decimal,
    pub invested: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
}

/// Profit/loss of one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfitLoss {
    pub category: HoldingCategory,
    pub invested: Decimal,
    pub current: Decimal,
    pub profit_loss: Decimal,
}

/// A holding trading below its buy price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LossPosition {
    pub holding_id: String,
    pub name: String,
    pub category: HoldingCategory,
    /// Monetary loss, positive
    pub loss: Decimal,
    /// Price change relative to buy price, negative
    pub loss_percent: Decimal,
}

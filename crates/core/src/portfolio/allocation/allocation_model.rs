//! Allocation models for portfolio breakdown by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::valuation::{percent_of, saturating_sum};

/// Allocation share of a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub category: HoldingCategory,
    /// Current value of the category's holdings
    pub value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub percent_of_total: Decimal,
}

/// Percentage share of every category, including the ones not held.
///
/// This is the view the risk, alert, and insight rules read from: absent
/// categories sit at zero instead of being missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryExposure {
    total_value: Decimal,
    percents: [Decimal; 4],
}

impl CategoryExposure {
    /// Computes category shares against the holdings' own current total.
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total_value = saturating_sum(holdings.iter().map(|h| h.market_value()));
        let mut values = [Decimal::ZERO; 4];
        for holding in holdings {
            let slot = &mut values[index_of(holding.category)];
            *slot = slot.saturating_add(holding.market_value());
        }

        Self {
            total_value,
            percents: values.map(|value| percent_of(value, total_value)),
        }
    }

    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Share of `category` in percent, zero if absent.
    pub fn percent(&self, category: HoldingCategory) -> Decimal {
        self.percents[index_of(category)]
    }

    /// Category with the largest share and that share.
    ///
    /// Ties go to the category listed first in [`HoldingCategory::ALL`]; an
    /// empty portfolio reports the first category at zero.
    pub fn dominant(&self) -> (HoldingCategory, Decimal) {
        let mut best = (HoldingCategory::ALL[0], self.percents[0]);
        for (category, percent) in HoldingCategory::ALL.iter().zip(self.percents.iter()).skip(1) {
            if *percent > best.1 {
                best = (*category, *percent);
            }
        }
        best
    }
}

fn index_of(category: HoldingCategory) -> usize {
    match category {
        HoldingCategory::Stock => 0,
        HoldingCategory::MutualFund => 1,
        HoldingCategory::Crypto => 2,
        HoldingCategory::Gold => 3,
    }
}

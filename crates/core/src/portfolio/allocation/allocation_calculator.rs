//! Groups holdings by category and computes value shares.

use log::debug;
use rust_decimal::Decimal;

use super::AllocationEntry;
use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::valuation::{percent_of, saturating_sum};

/// Allocation of `holdings` against `total_value`.
///
/// Entries come out in category enumeration order. Categories with no value
/// are omitted rather than reported at zero.
pub fn allocate(holdings: &[Holding], total_value: Decimal) -> Vec<AllocationEntry> {
    let entries: Vec<AllocationEntry> = HoldingCategory::ALL
        .iter()
        .filter_map(|&category| {
            let value = saturating_sum(
                holdings
                    .iter()
                    .filter(|h| h.category == category)
                    .map(|h| h.market_value()),
            );
            if value > Decimal::ZERO {
                Some(AllocationEntry {
                    category,
                    value,
                    percent_of_total: percent_of(value, total_value),
                })
            } else {
                None
            }
        })
        .collect();

    debug!(
        "Allocated {} holdings into {} categories (total {})",
        holdings.len(),
        entries.len(),
        total_value
    );
    entries
}

/// Category with the largest value, ties broken by enumeration order.
///
/// Returns `None` when there are no entries.
pub fn dominant_category(entries: &[AllocationEntry]) -> Option<HoldingCategory> {
    let mut best: Option<&AllocationEntry> = None;
    for category in HoldingCategory::ALL {
        if let Some(entry) = entries.iter().find(|e| e.category == category) {
            if best.map_or(true, |b| entry.value > b.value) {
                best = Some(entry);
            }
        }
    }
    best.map(|e| e.category)
}

//! Text formatting for amounts and percentages embedded in alert and insight messages.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_PERCENT_PRECISION};

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// `1234567.6` becomes `₹12,34,568`. Rounds half away from zero and keeps the
/// minus sign in front of the symbol for negative amounts.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let digits = rounded.abs().to_string();
    let grouped = group_indian(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, grouped)
    }
}

/// Formats a percentage with exactly one decimal place, without the `%` sign.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value
        .round_dp_with_strategy(DISPLAY_PERCENT_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(DISPLAY_PERCENT_PRECISION);
    rounded.to_string()
}

/// Last three digits form the first group, every group after that has two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

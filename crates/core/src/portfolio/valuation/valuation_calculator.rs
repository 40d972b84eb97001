//! Pure valuation functions over a holdings snapshot.
//!
//! None of these fail: every division is guarded so that an empty portfolio
//! or a zero denominator yields zero instead of an error, and sums saturate
//! at the `Decimal` bounds instead of overflowing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{CategoryProfitLoss, HoldingValuation, LossPosition, ValuationSummary};
use crate::holdings::{Holding, HoldingCategory};

/// `part / whole * 100`, or zero when `whole` is not positive.
///
/// A ratio outside `Decimal` range saturates towards the sign of `part`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(if part.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Sum that saturates at the `Decimal` bounds.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Aggregates invested capital, current value, and profit/loss.
pub fn summarize(holdings: &[Holding]) -> ValuationSummary {
    let (invested_total, current_total) = holdings
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(invested, current), h| {
            (
                invested.saturating_add(h.invested()),
                current.saturating_add(h.market_value()),
            )
        });
    let profit_loss = current_total - invested_total;

    ValuationSummary {
        invested_total,
        current_total,
        profit_loss,
        profit_loss_percent: percent_of(profit_loss, invested_total),
    }
}

/// Values a single holding.
pub fn per_holding(holding: &Holding) -> HoldingValuation {
    let invested = holding.invested();
    let value = holding.market_value();
    let profit_loss = value - invested;

    HoldingValuation {
        holding_id: holding.id.clone(),
        value,
        invested,
        profit_loss,
        profit_loss_percent: percent_of(profit_loss, invested),
    }
}

/// Profit/loss per category in enumeration order.
///
/// Categories whose profit/loss is exactly zero are omitted, including
/// categories with no holdings.
pub fn profit_loss_by_category(holdings: &[Holding]) -> Vec<CategoryProfitLoss> {
    HoldingCategory::ALL
        .iter()
        .map(|&category| {
            let (invested, current) = holdings
                .iter()
                .filter(|h| h.category == category)
                .fold((Decimal::ZERO, Decimal::ZERO), |(invested, current), h| {
                    (
                        invested.saturating_add(h.invested()),
                        current.saturating_add(h.market_value()),
                    )
                });
            CategoryProfitLoss {
                category,
                invested,
                current,
                profit_loss: current - invested,
            }
        })
        .filter(|entry| !entry.profit_loss.is_zero())
        .collect()
}

/// Loss-making holdings in input order.
pub fn loss_positions(holdings: &[Holding]) -> Vec<LossPosition> {
    holdings
        .iter()
        .filter(|h| h.is_loss_making())
        .map(|h| LossPosition {
            holding_id: h.id.clone(),
            name: h.name.clone(),
            category: h.category,
            loss: h.unrealized_loss(),
            loss_percent: percent_of(h.current_price - h.buy_price, h.buy_price),
        })
        .collect()
}

/// Sum of losses across loss-making holdings, as a positive amount.
pub fn total_loss(holdings: &[Holding]) -> Decimal {
    saturating_sum(
        holdings
            .iter()
            .filter(|h| h.is_loss_making())
            .map(|h| h.unrealized_loss()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::test_support::holding;

    #[test]
    fn test_summarize_empty_portfolio_is_all_zero() {
        assert_eq!(summarize(&[]), ValuationSummary::default());
    }

    #[test]
    fn test_summarize_flat_single_stock() {
        let holdings = vec![holding(
            "h1",
            "Infosys",
            HoldingCategory::Stock,
            dec!(10),
            dec!(100),
            dec!(100),
        )];
        let summary = summarize(&holdings);

        assert_eq!(summary.invested_total, dec!(1000));
        assert_eq!(summary.current_total, dec!(1000));
        assert_eq!(summary.profit_loss, dec!(0));
        assert_eq!(summary.profit_loss_percent, dec!(0));
    }

    #[test]
    fn test_summarize_mixed_gains_and_losses() {
        let holdings = vec![
            holding("h1", "Infosys", HoldingCategory::Stock, dec!(10), dec!(100), dec!(150)),
            holding("h2", "SGB", HoldingCategory::Gold, dec!(5), dec!(200), dec!(150)),
        ];
        let summary = summarize(&holdings);

        assert_eq!(summary.invested_total, dec!(2000));
        assert_eq!(summary.current_total, dec!(2250));
        assert_eq!(summary.profit_loss, dec!(250));
        assert_eq!(summary.profit_loss_percent, dec!(12.5));
    }

    #[test]
    fn test_per_holding_total_loss_does_not_divide_by_zero() {
        let wiped = holding("h1", "LUNA", HoldingCategory::Crypto, dec!(3), dec!(50), dec!(0));
        let valuation = per_holding(&wiped);

        assert_eq!(valuation.value, dec!(0));
        assert_eq!(valuation.invested, dec!(150));
        assert_eq!(valuation.profit_loss, dec!(-150));
        assert_eq!(valuation.profit_loss_percent, dec!(-100));
    }

    #[test]
    fn test_percent_of_saturates_instead_of_overflowing() {
        let tiny = Decimal::new(1, 20);
        assert_eq!(percent_of(dec!(1000000000000000), tiny), Decimal::MAX);
        assert_eq!(percent_of(dec!(-1000000000000000), tiny), Decimal::MIN);
        assert_eq!(percent_of(dec!(5), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_totals_saturate_at_decimal_bounds() {
        let huge = || {
            holding(
                "h1",
                "Whale",
                HoldingCategory::Stock,
                Decimal::MAX,
                dec!(1),
                dec!(1),
            )
        };
        let summary = summarize(&[huge(), huge()]);

        assert_eq!(summary.invested_total, Decimal::MAX);
        assert_eq!(summary.current_total, Decimal::MAX);
        assert_eq!(summary.profit_loss, Decimal::ZERO);
        assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
    }

    #[test]
    fn test_profit_loss_by_category_skips_flat_categories() {
        let holdings = vec![
            holding("h1", "Infosys", HoldingCategory::Stock, dec!(10), dec!(100), dec!(100)),
            holding("h2", "SGB", HoldingCategory::Gold, dec!(5), dec!(200), dec!(150)),
            holding("h3", "BTC", HoldingCategory::Crypto, dec!(1), dec!(1000), dec!(1200)),
        ];
        let by_category = profit_loss_by_category(&holdings);

        let categories: Vec<HoldingCategory> = by_category.iter().map(|e| e.category).collect();
        assert_eq!(categories, vec![HoldingCategory::Crypto, HoldingCategory::Gold]);
        assert_eq!(by_category[0].profit_loss, dec!(200));
        assert_eq!(by_category[1].profit_loss, dec!(-250));
    }

    #[test]
    fn test_loss_positions_keep_input_order() {
        let holdings = vec![
            holding("h1", "A", HoldingCategory::Stock, dec!(1), dec!(100), dec!(90)),
            holding("h2", "B", HoldingCategory::Stock, dec!(1), dec!(100), dec!(110)),
            holding("h3", "C", HoldingCategory::Gold, dec!(2), dec!(100), dec!(50)),
        ];
        let losses = loss_positions(&holdings);

        let ids: Vec<&str> = losses.iter().map(|l| l.holding_id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h3"]);
        assert_eq!(losses[0].loss, dec!(10));
        assert_eq!(losses[0].loss_percent, dec!(-10));
        assert_eq!(losses[1].loss, dec!(100));
        assert_eq!(total_loss(&holdings), dec!(110));
    }
}

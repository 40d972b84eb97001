//! Insight rule evaluation.
//!
//! Always yields the diversification, crypto exposure, and sector
//! concentration insights in that order, followed by an exit alert when at
//! least one holding trades below its buy price.

use log::debug;
use rust_decimal::Decimal;

use super::{Insight, InsightDetails, InsightSeverity};
use crate::constants::{
    CRYPTO_EXPOSURE_INSIGHT_ID, DIVERSIFICATION_INSIGHT_ID, EXIT_ALERT_INSIGHT_ID,
    SECTOR_CONCENTRATION_INSIGHT_ID,
};
use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::allocation::CategoryExposure;
use crate::portfolio::analytics::AnalyticsConfig;
use crate::portfolio::valuation::{loss_positions, percent_of, saturating_sum};
use crate::utils::format_percent;

#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: AnalyticsConfig,
}

impl InsightEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, holdings: &[Holding]) -> Vec<Insight> {
        let exposure = CategoryExposure::from_holdings(holdings);

        let mut insights = vec![
            self.diversification(holdings.len()),
            self.crypto_exposure(exposure.percent(HoldingCategory::Crypto)),
            self.sector_concentration(exposure.percent(HoldingCategory::Stock)),
        ];
        insights.extend(self.exit_alert(holdings));

        debug!(
            "Generated {} insights for {} holdings",
            insights.len(),
            holdings.len()
        );
        insights
    }

    fn diversification(&self, holding_count: usize) -> Insight {
        let (severity, message) = if holding_count < self.config.min_diversified_holdings {
            (
                InsightSeverity::Warning,
                "Consider adding more assets for better diversification. \
                 Aim for at least 5-10 different holdings."
                    .to_string(),
            )
        } else {
            (
                InsightSeverity::Success,
                "Good diversification with multiple asset types. \
                 Continue monitoring allocation balance."
                    .to_string(),
            )
        };

        Insight {
            id: DIVERSIFICATION_INSIGHT_ID.to_string(),
            severity,
            title: "Portfolio Diversification".to_string(),
            message,
            details: InsightDetails::Diversification { holding_count },
        }
    }

    fn crypto_exposure(&self, crypto_percent: Decimal) -> Insight {
        let percent = format_percent(crypto_percent);
        let (severity, message) = if crypto_percent > self.config.crypto_high_exposure_pct {
            (
                InsightSeverity::Critical,
                format!(
                    "High crypto exposure at {}%. Consider reducing to below {}% \
                     for better risk management.",
                    percent,
                    self.config.crypto_recommended_limit_pct.normalize()
                ),
            )
        } else if crypto_percent > self.config.crypto_moderate_exposure_pct {
            (
                InsightSeverity::Warning,
                format!(
                    "Moderate crypto exposure at {}%. Monitor volatility closely.",
                    percent
                ),
            )
        } else if crypto_percent > Decimal::ZERO {
            (
                InsightSeverity::Info,
                format!(
                    "Crypto exposure at {}% is within recommended limits.",
                    percent
                ),
            )
        } else {
            (
                InsightSeverity::Info,
                "No cryptocurrency exposure. Consider small allocation for growth potential."
                    .to_string(),
            )
        };

        Insight {
            id: CRYPTO_EXPOSURE_INSIGHT_ID.to_string(),
            severity,
            title: "Cryptocurrency Exposure".to_string(),
            message,
            details: InsightDetails::CryptoExposure { crypto_percent },
        }
    }

    fn sector_concentration(&self, stock_percent: Decimal) -> Insight {
        let (severity, message) = if stock_percent > self.config.stock_high_concentration_pct {
            (
                InsightSeverity::Warning,
                format!(
                    "Stock concentration is high at {}%. \
                     Consider diversifying into mutual funds or gold.",
                    format_percent(stock_percent)
                ),
            )
        } else {
            (
                InsightSeverity::Success,
                "Stock allocation appears balanced. Maintain diversification across sectors."
                    .to_string(),
            )
        };

        Insight {
            id: SECTOR_CONCENTRATION_INSIGHT_ID.to_string(),
            severity,
            title: "Sector Concentration".to_string(),
            message,
            details: InsightDetails::SectorConcentration { stock_percent },
        }
    }

    /// Names the holding with the largest monetary loss.
    ///
    /// Ties keep the earliest holding in input order.
    fn exit_alert(&self, holdings: &[Holding]) -> Option<Insight> {
        let positions = loss_positions(holdings);
        let total_loss = saturating_sum(positions.iter().map(|p| p.loss));
        if total_loss <= Decimal::ZERO {
            return None;
        }

        let mut worst = positions.first()?;
        for position in positions.iter().skip(1) {
            if position.loss > worst.loss {
                worst = position;
            }
        }
        let contribution_percent = percent_of(worst.loss, total_loss);

        Some(Insight {
            id: EXIT_ALERT_INSIGHT_ID.to_string(),
            severity: InsightSeverity::Critical,
            title: "Exit Alert".to_string(),
            message: format!(
                "\"{}\" contributes {}% of your total loss. Consider reviewing this position.",
                worst.name,
                format_percent(contribution_percent)
            ),
            details: InsightDetails::ExitAlert {
                holding_id: worst.holding_id.clone(),
                holding_name: worst.name.clone(),
                loss_amount: worst.loss,
                contribution_percent,
            },
        })
    }
}

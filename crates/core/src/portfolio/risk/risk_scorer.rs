//! Deterministic composite risk score.
//!
//! The score is the sum of three rule outputs, capped at 100:
//!
//! | Rule                | Condition            | Points |
//! |---------------------|----------------------|--------|
//! | Crypto exposure     | > high / > moderate / else | 40 / 20 / 10 |
//! | Stock concentration | > high / > moderate / else | 30 / 15 / 5  |
//! | Loss-making count   | `count * step`, capped     | 0..=cap      |
//!
//! The level uses the score thresholds from [`AnalyticsConfig`]. The
//! dashboard's crypto-only indicator is a separate view, see
//! [`RiskScorer::crypto_exposure_level`].

use log::debug;
use rust_decimal::Decimal;

use super::{
    ExposureWarning, ExposureWarningKind, RiskAssessment, RiskComponents, RiskFactors, RiskLevel,
};
use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::allocation::CategoryExposure;
use crate::portfolio::analytics::AnalyticsConfig;
use crate::portfolio::valuation::total_loss;
use crate::utils::format_percent;

const CRYPTO_HIGH_POINTS: u8 = 40;
const CRYPTO_MODERATE_POINTS: u8 = 20;
const CRYPTO_BASE_POINTS: u8 = 10;
const STOCK_HIGH_POINTS: u8 = 30;
const STOCK_MODERATE_POINTS: u8 = 15;
const STOCK_BASE_POINTS: u8 = 5;
const MAX_SCORE: u8 = 100;

/// Scores portfolio risk from allocation and loss exposure.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: AnalyticsConfig,
}

impl RiskScorer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Scores a holdings snapshot.
    pub fn score(&self, holdings: &[Holding]) -> RiskAssessment {
        let exposure = CategoryExposure::from_holdings(holdings);
        let loss_count = holdings.iter().filter(|h| h.is_loss_making()).count();
        let assessment = self.score_from_parts(
            exposure.percent(HoldingCategory::Crypto),
            exposure.percent(HoldingCategory::Stock),
            loss_count,
        );

        debug!(
            "Risk score {} ({}) for {} holdings, {} loss-making",
            assessment.score,
            assessment.level,
            holdings.len(),
            loss_count
        );
        assessment
    }

    /// Scores from already-computed inputs.
    pub fn score_from_parts(
        &self,
        crypto_percent: Decimal,
        stock_percent: Decimal,
        loss_count: usize,
    ) -> RiskAssessment {
        let crypto_exposure = if crypto_percent > self.config.crypto_high_exposure_pct {
            CRYPTO_HIGH_POINTS
        } else if crypto_percent > self.config.crypto_moderate_exposure_pct {
            CRYPTO_MODERATE_POINTS
        } else {
            CRYPTO_BASE_POINTS
        };

        let stock_concentration = if stock_percent > self.config.stock_high_concentration_pct {
            STOCK_HIGH_POINTS
        } else if stock_percent > self.config.stock_moderate_concentration_pct {
            STOCK_MODERATE_POINTS
        } else {
            STOCK_BASE_POINTS
        };

        // bounded by the u8 cap, so the narrowing below is lossless
        let loss_count_points = loss_count
            .saturating_mul(usize::from(self.config.loss_count_step))
            .min(usize::from(self.config.loss_count_cap)) as u8;

        let score = crypto_exposure
            .saturating_add(stock_concentration)
            .saturating_add(loss_count_points)
            .min(MAX_SCORE);

        RiskAssessment {
            score,
            level: self.level_for(score),
            components: RiskComponents {
                crypto_exposure,
                stock_concentration,
                loss_count: loss_count_points,
            },
        }
    }

    /// Maps a score onto a level.
    pub fn level_for(&self, score: u8) -> RiskLevel {
        if score >= self.config.high_risk_score {
            RiskLevel::High
        } else if score >= self.config.medium_risk_score {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Dashboard indicator driven by crypto exposure alone.
    ///
    /// Deliberately independent of [`RiskAssessment::level`].
    pub fn crypto_exposure_level(&self, crypto_percent: Decimal) -> RiskLevel {
        if crypto_percent > self.config.crypto_high_exposure_pct {
            RiskLevel::High
        } else if crypto_percent > self.config.crypto_moderate_exposure_pct {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Factor breakdown for the risk view.
    pub fn factors(&self, holdings: &[Holding]) -> RiskFactors {
        let exposure = CategoryExposure::from_holdings(holdings);
        let crypto_percent = exposure.percent(HoldingCategory::Crypto);
        let stock_percent = exposure.percent(HoldingCategory::Stock);

        let crypto_note = if crypto_percent > self.config.crypto_high_exposure_pct {
            "High risk - Consider reducing"
        } else if crypto_percent > self.config.crypto_moderate_exposure_pct {
            "Moderate exposure"
        } else {
            "Within safe limits"
        };
        let stock_note = if stock_percent > self.config.stock_high_concentration_pct {
            "High concentration"
        } else {
            "Well diversified"
        };

        RiskFactors {
            crypto_percent,
            crypto_note: crypto_note.to_string(),
            stock_percent,
            stock_note: stock_note.to_string(),
            loss_making_count: holdings.iter().filter(|h| h.is_loss_making()).count(),
            total_loss: total_loss(holdings),
        }
    }

    /// Over-exposure warnings, crypto first, then stocks.
    pub fn exposure_warnings(&self, holdings: &[Holding]) -> Vec<ExposureWarning> {
        let exposure = CategoryExposure::from_holdings(holdings);
        self.exposure_warnings_from_parts(
            exposure.percent(HoldingCategory::Crypto),
            exposure.percent(HoldingCategory::Stock),
        )
    }

    /// Over-exposure warnings from already-computed shares.
    ///
    /// Stocks are flagged at the risk-score concentration limit, which sits
    /// below the stock concentration alert.
    pub fn exposure_warnings_from_parts(
        &self,
        crypto_percent: Decimal,
        stock_percent: Decimal,
    ) -> Vec<ExposureWarning> {
        let mut warnings = Vec::new();

        if crypto_percent > self.config.crypto_high_exposure_pct {
            warnings.push(ExposureWarning {
                kind: ExposureWarningKind::CryptoExposure,
                level: RiskLevel::High,
                title: "High Crypto Exposure".to_string(),
                message: format!(
                    "Your cryptocurrency allocation is {}%, which is considered high risk. \
                     Consider reducing to below {}%.",
                    format_percent(crypto_percent),
                    self.config.crypto_recommended_limit_pct.normalize()
                ),
                percent: crypto_percent,
            });
        }
        if stock_percent > self.config.stock_high_concentration_pct {
            warnings.push(ExposureWarning {
                kind: ExposureWarningKind::StockConcentration,
                level: RiskLevel::Medium,
                title: "Stock Concentration".to_string(),
                message: format!(
                    "{}% of your portfolio is in stocks. \
                     Consider diversifying into other asset classes.",
                    format_percent(stock_percent)
                ),
                percent: stock_percent,
            });
        }

        warnings
    }
}

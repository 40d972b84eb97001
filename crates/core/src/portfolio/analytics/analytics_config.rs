//! Thresholds for the risk, alert, and insight rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Configuration for analytics thresholds.
///
/// All percentages are on a 0-100 scale. The defaults are the rule set the
/// product ships with; overrides are accepted only if they pass [`validate`].
///
/// [`validate`]: AnalyticsConfig::validate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// Crypto share above which exposure is high (default: 30)
    pub crypto_high_exposure_pct: Decimal,

    /// Crypto share above which exposure is moderate (default: 15)
    pub crypto_moderate_exposure_pct: Decimal,

    /// Crypto share quoted as the recommended ceiling in messages (default: 20)
    pub crypto_recommended_limit_pct: Decimal,

    /// Stock share above which the risk score and insights flag concentration (default: 60)
    pub stock_high_concentration_pct: Decimal,

    /// Stock share above which the risk score adds a moderate penalty (default: 40)
    pub stock_moderate_concentration_pct: Decimal,

    /// Stock share above which a concentration alert is raised (default: 70)
    pub stock_alert_concentration_pct: Decimal,

    /// Price drop beyond which a holding raises a loss alert (default: 10)
    pub loss_alert_pct: Decimal,

    /// Price drop beyond which a loss alert is high severity (default: 20)
    pub severe_loss_alert_pct: Decimal,

    /// Largest category share above which an imbalance alert is raised (default: 60)
    pub imbalance_pct: Decimal,

    /// Risk points per loss-making holding (default: 10)
    pub loss_count_step: u8,

    /// Cap on risk points from loss-making holdings (default: 30)
    pub loss_count_cap: u8,

    /// Score at or above which risk is High (default: 70)
    pub high_risk_score: u8,

    /// Score at or above which risk is Medium (default: 40)
    pub medium_risk_score: u8,

    /// Holding count from which a portfolio counts as diversified (default: 5)
    pub min_diversified_holdings: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            crypto_high_exposure_pct: dec!(30),
            crypto_moderate_exposure_pct: dec!(15),
            crypto_recommended_limit_pct: dec!(20),
            stock_high_concentration_pct: dec!(60),
            stock_moderate_concentration_pct: dec!(40),
            stock_alert_concentration_pct: dec!(70),
            loss_alert_pct: dec!(10),
            severe_loss_alert_pct: dec!(20),
            imbalance_pct: dec!(60),
            loss_count_step: 10,
            loss_count_cap: 30,
            high_risk_score: 70,
            medium_risk_score: 40,
            min_diversified_holdings: 5,
        }
    }
}

impl AnalyticsConfig {
    /// Rejects thresholds that would make the rule ladders overlap or leave
    /// the 0-100 range.
    pub fn validate(&self) -> Result<()> {
        let percents = [
            ("cryptoHighExposurePct", self.crypto_high_exposure_pct),
            ("cryptoModerateExposurePct", self.crypto_moderate_exposure_pct),
            ("cryptoRecommendedLimitPct", self.crypto_recommended_limit_pct),
            ("stockHighConcentrationPct", self.stock_high_concentration_pct),
            ("stockModerateConcentrationPct", self.stock_moderate_concentration_pct),
            ("stockAlertConcentrationPct", self.stock_alert_concentration_pct),
            ("lossAlertPct", self.loss_alert_pct),
            ("severeLossAlertPct", self.severe_loss_alert_pct),
            ("imbalancePct", self.imbalance_pct),
        ];
        for (name, value) in percents {
            if value < Decimal::ZERO || value > dec!(100) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }

        if self.crypto_moderate_exposure_pct >= self.crypto_high_exposure_pct {
            return Err(Error::InvalidConfig(
                "cryptoModerateExposurePct must be below cryptoHighExposurePct".to_string(),
            ));
        }
        if self.stock_moderate_concentration_pct >= self.stock_high_concentration_pct {
            return Err(Error::InvalidConfig(
                "stockModerateConcentrationPct must be below stockHighConcentrationPct"
                    .to_string(),
            ));
        }
        if self.loss_alert_pct >= self.severe_loss_alert_pct {
            return Err(Error::InvalidConfig(
                "lossAlertPct must be below severeLossAlertPct".to_string(),
            ));
        }
        if self.medium_risk_score >= self.high_risk_score || self.high_risk_score > 100 {
            return Err(Error::InvalidConfig(format!(
                "risk levels need mediumRiskScore < highRiskScore <= 100, got {} and {}",
                self.medium_risk_score, self.high_risk_score
            )));
        }
        if self.loss_count_cap > 100 {
            return Err(Error::InvalidConfig(format!(
                "lossCountCap cannot exceed 100, got {}",
                self.loss_count_cap
            )));
        }
        if self.min_diversified_holdings == 0 {
            return Err(Error::InvalidConfig(
                "minDiversifiedHoldings must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

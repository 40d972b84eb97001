//! Alert rule evaluation.

use chrono::{DateTime, Utc};
use log::debug;

use super::{
    Alert, AlertDetails, AlertSeverity, ImbalanceAlertDetails, LossAlertDetails,
    RiskAlertDetails,
};
use crate::constants::{
    CRYPTO_RISK_ALERT_ID, IMBALANCE_ALERT_ID, LOSS_ALERT_ID_PREFIX,
    STOCK_CONCENTRATION_ALERT_ID,
};
use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::allocation::CategoryExposure;
use crate::portfolio::analytics::AnalyticsConfig;
use crate::portfolio::valuation::loss_positions;
use crate::utils::{format_currency, format_percent};

/// Evaluates the fixed alert rule set against a holdings snapshot.
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    config: AnalyticsConfig,
}

impl AlertEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Evaluates all rules, stamping alerts with the current time.
    pub fn evaluate(&self, holdings: &[Holding]) -> Vec<Alert> {
        self.evaluate_at(holdings, Utc::now())
    }

    /// Evaluates all rules, stamping alerts with `now`.
    ///
    /// An empty result means all clear.
    pub fn evaluate_at(&self, holdings: &[Holding], now: DateTime<Utc>) -> Vec<Alert> {
        let exposure = CategoryExposure::from_holdings(holdings);
        let mut alerts = Vec::new();

        alerts.extend(self.crypto_risk_alert(&exposure, now));
        alerts.extend(self.stock_concentration_alert(&exposure, now));
        alerts.extend(self.loss_alerts(holdings, now));
        alerts.extend(self.imbalance_alert(&exposure, now));

        debug!(
            "Evaluated alerts for {} holdings: {} raised",
            holdings.len(),
            alerts.len()
        );
        alerts
    }

    fn crypto_risk_alert(&self, exposure: &CategoryExposure, now: DateTime<Utc>) -> Option<Alert> {
        let crypto_percent = exposure.percent(HoldingCategory::Crypto);
        if crypto_percent <= self.config.crypto_high_exposure_pct {
            return None;
        }

        Some(Alert {
            id: CRYPTO_RISK_ALERT_ID.to_string(),
            severity: AlertSeverity::High,
            title: "High Cryptocurrency Risk".to_string(),
            message: format!(
                "Your crypto exposure is {}%, significantly above the recommended {}% limit. \
                 This increases portfolio volatility.",
                format_percent(crypto_percent),
                self.config.crypto_recommended_limit_pct.normalize()
            ),
            details: AlertDetails::RiskAlert(RiskAlertDetails {
                category: HoldingCategory::Crypto,
                exposure_percent: crypto_percent,
                threshold_percent: self.config.crypto_high_exposure_pct,
            }),
            timestamp: now,
        })
    }

    fn stock_concentration_alert(
        &self,
        exposure: &CategoryExposure,
        now: DateTime<Utc>,
    ) -> Option<Alert> {
        let stock_percent = exposure.percent(HoldingCategory::Stock);
        if stock_percent <= self.config.stock_alert_concentration_pct {
            return None;
        }

        Some(Alert {
            id: STOCK_CONCENTRATION_ALERT_ID.to_string(),
            severity: AlertSeverity::Medium,
            title: "High Stock Concentration".to_string(),
            message: format!(
                "{}% of your portfolio is in stocks. Consider diversifying to reduce market risk.",
                format_percent(stock_percent)
            ),
            details: AlertDetails::RiskAlert(RiskAlertDetails {
                category: HoldingCategory::Stock,
                exposure_percent: stock_percent,
                threshold_percent: self.config.stock_alert_concentration_pct,
            }),
            timestamp: now,
        })
    }

    fn loss_alerts(&self, holdings: &[Holding], now: DateTime<Utc>) -> Vec<Alert> {
        loss_positions(holdings)
            .into_iter()
            .filter(|position| position.loss_percent.abs() > self.config.loss_alert_pct)
            .map(|position| {
                let drop = position.loss_percent.abs();
                let severity = if drop > self.config.severe_loss_alert_pct {
                    AlertSeverity::High
                } else {
                    AlertSeverity::Medium
                };

                Alert {
                    id: format!("{}{}", LOSS_ALERT_ID_PREFIX, position.holding_id),
                    severity,
                    title: format!("{} Down {}%", position.name, format_percent(drop)),
                    message: format!(
                        "{} has declined {}% from your buy price. Current loss: {}",
                        position.name,
                        format_percent(drop),
                        format_currency(position.loss)
                    ),
                    details: AlertDetails::LossAlert(LossAlertDetails {
                        holding_id: position.holding_id,
                        holding_name: position.name,
                        loss_percent: position.loss_percent,
                        loss_amount: position.loss,
                    }),
                    timestamp: now,
                }
            })
            .collect()
    }

    fn imbalance_alert(&self, exposure: &CategoryExposure, now: DateTime<Utc>) -> Option<Alert> {
        let (dominant, max_allocation) = exposure.dominant();
        if max_allocation <= self.config.imbalance_pct {
            return None;
        }

        Some(Alert {
            id: IMBALANCE_ALERT_ID.to_string(),
            severity: AlertSeverity::Medium,
            title: "Portfolio Imbalance Detected".to_string(),
            message: format!(
                "{} represents {}% of your portfolio. A more balanced allocation is recommended.",
                dominant.label(),
                format_percent(max_allocation)
            ),
            details: AlertDetails::ImbalanceAlert(ImbalanceAlertDetails {
                category: dominant,
                allocation_percent: max_allocation,
            }),
            timestamp: now,
        })
    }
}

//! Alert domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::HoldingCategory;

/// Alert severity, ordered Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Medium => "MEDIUM",
            AlertSeverity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alert taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    RiskAlert,
    LossAlert,
    ImbalanceAlert,
}

impl AlertKind {
    /// Returns a human-friendly label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::RiskAlert => "Risk Alert",
            AlertKind::LossAlert => "Loss Alert",
            AlertKind::ImbalanceAlert => "Imbalance Alert",
        }
    }
}

/// Exposure to a single category that crossed a risk threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlertDetails {
    pub category: HoldingCategory,
    pub exposure_percent: Decimal,
    pub threshold_percent: Decimal,
}

/// A holding that dropped below its buy price beyond the loss threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LossAlertDetails {
    pub holding_id: String,
    pub holding_name: String,
    /// Price change relative to buy price, negative
    pub loss_percent: Decimal,
    /// Monetary loss, positive
    pub loss_amount: Decimal,
}

/// The category whose share exceeds the imbalance threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImbalanceAlertDetails {
    pub category: HoldingCategory,
    pub allocation_percent: Decimal,
}

/// Kind-specific payload of an alert. The variant is the alert's kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertDetails {
    RiskAlert(RiskAlertDetails),
    LossAlert(LossAlertDetails),
    ImbalanceAlert(ImbalanceAlertDetails),
}

impl AlertDetails {
    pub fn kind(&self) -> AlertKind {
        match self {
            AlertDetails::RiskAlert(_) => AlertKind::RiskAlert,
            AlertDetails::LossAlert(_) => AlertKind::LossAlert,
            AlertDetails::ImbalanceAlert(_) => AlertKind::ImbalanceAlert,
        }
    }
}

/// A time-stamped warning raised by a threshold rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Stable identifier derived from the rule and its subject
    /// (e.g., "crypto-risk", "loss-<holding id>")
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub details: AlertDetails,
    /// When the alert was generated
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn kind(&self) -> AlertKind {
        self.details.kind()
    }
}

/// Aggregated view over a list of alerts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total: u32,
    pub counts: HashMap<AlertSeverity, u32>,
    /// `None` when all clear
    pub highest_severity: Option<AlertSeverity>,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let mut counts: HashMap<AlertSeverity, u32> = HashMap::new();
        for alert in alerts {
            *counts.entry(alert.severity).or_insert(0) += 1;
        }

        Self {
            total: alerts.len() as u32,
            counts,
            highest_severity: alerts.iter().map(|a| a.severity).max(),
        }
    }

    pub fn is_all_clear(&self) -> bool {
        self.total == 0
    }
}
